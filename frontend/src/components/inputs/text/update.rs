//! Update function for the text input component.
//!
//! Elm-style: each `Msg` is handed to the controller together with the host
//! callbacks it may forward to, and the returned `bool` tells Yew whether to
//! re-render. The forwarding order lives in `FieldController`.

use yew::prelude::*;

use super::messages::Msg;
use super::state::TextInput;

pub fn update(component: &mut TextInput, ctx: &Context<TextInput>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Refresh => true,
        Msg::Resize => {
            let measurement = component.measure();
            component.controller.recompute(measurement)
        }
        Msg::Scheduled => {
            let measurement = component.measure();
            component.controller.run_scheduled(measurement)
        }
        Msg::Focus(event) => component.controller.focus(props.editable, || {
            if let Some(on_focus) = &props.on_focus {
                on_focus.emit(event);
            }
        }),
        Msg::Blur(event) => component.controller.blur(|| {
            if let Some(on_blur) = &props.on_blur {
                on_blur.emit(event);
            }
        }),
        Msg::Input(event) => {
            let measurement = component.measure();
            component.controller.change(measurement, |_| {
                if let Some(on_change) = &props.on_change {
                    on_change.emit(event);
                }
            })
        }
        Msg::KeyDown(event, disposition) => {
            component.controller.key_down(
                disposition,
                || {
                    if let Some(on_enter_key_down) = &props.on_enter_key_down {
                        on_enter_key_down.emit(event.clone());
                    }
                },
                || {
                    if let Some(on_key_down) = &props.on_key_down {
                        on_key_down.emit(event.clone());
                    }
                },
            );
            false
        }
    }
}
