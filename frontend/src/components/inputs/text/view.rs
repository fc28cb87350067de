//! View rendering for the text input component.
//!
//! Renders a container carrying the derived class names, the textarea with
//! the computed `height`/`overflow` inline style, and the optional label.

use autosize_common::classes::{self, ClassInputs};
use autosize_common::keys;
use yew::prelude::*;

use super::messages::Msg;
use super::props::TextInputProps;
use super::state::TextInput;

pub fn view(component: &TextInput, ctx: &Context<TextInput>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    let validate = validator(props);
    let class_names = component.controller.class_names(
        &ClassInputs {
            value: &props.value,
            default_value: &props.default_value,
            label: props.label.as_deref(),
            class_name: props.class_name.as_deref(),
        },
        validate.as_ref().map(|validate| validate as &dyn Fn(&str) -> bool),
    );
    let style = component.controller.render_style(props.max_height);

    html! {
        <div class={class_names}>
            <textarea
                id={component.field_id.clone()}
                ref={component.textarea_ref.clone()}
                class={classes::FIELD}
                rows="1"
                placeholder={props.placeholder.clone()}
                tabindex={props.tab_index.map(|index| index.to_string())}
                disabled={props.disabled || !props.editable}
                style={style.to_css()}
                value={props.value.clone()}
                onclick={props.on_click.clone()}
                ondragstart={props.on_drag_start.clone()}
                ondragend={props.on_drag_end.clone()}
                ondragover={props.on_drag_over.clone()}
                onfocus={link.callback(Msg::Focus)}
                onblur={link.callback(Msg::Blur)}
                oninput={link.callback(Msg::Input)}
                onkeydown={link.callback(|event: KeyboardEvent| {
                    let disposition = keys::classify(&event.key(), event.key_code());
                    if disposition.prevent_default {
                        event.prevent_default();
                    }
                    Msg::KeyDown(event, disposition)
                })}
            />
            { build_label(component, props) }
        </div>
    }
}

/// Adapts the host's validator callback to the plain predicate the class
/// derivation expects.
fn validator(props: &TextInputProps) -> Option<impl Fn(&str) -> bool + '_> {
    props
        .validate
        .as_ref()
        .map(|validate| move |value: &str| validate.emit(value.to_string()))
}

fn build_label(component: &TextInput, props: &TextInputProps) -> Html {
    match props.label.as_ref().filter(|label| !label.is_empty()) {
        Some(label) => html! {
            <label class={classes::LABEL} for={component.field_id.clone()}>
                { label.to_string() }
            </label>
        },
        None => html! {},
    }
}
