//! Demo page hosting three text inputs: a chat composer that sends on
//! Enter, a validated e-mail field and a read-only transcript summary.
//!
//! Clearing the composer after sending is an external value change, which
//! exercises the deferred height recompute.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::inputs::text::TextInput;
use crate::helpers::{is_valid_email, now_label, show_toast};

pub struct ChatMessage {
    pub sent_at: String,
    pub text: String,
}

pub enum Msg {
    DraftChanged(String),
    Send,
    ClearDraft,
    EmailChanged(String),
}

pub struct App {
    draft: String,
    email: String,
    messages: Vec<ChatMessage>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: String::new(),
            email: String::new(),
            messages: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DraftChanged(text) => {
                self.draft = text;
                true
            }
            Msg::Send => {
                let text = self.draft.trim().to_string();
                if text.is_empty() {
                    return false;
                }
                self.messages.push(ChatMessage {
                    sent_at: now_label(),
                    text,
                });
                self.draft.clear();
                show_toast("Mensaje enviado.");
                true
            }
            Msg::ClearDraft => {
                self.draft.clear();
                true
            }
            Msg::EmailChanged(email) => {
                self.email = email;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let transcript = self
            .messages
            .iter()
            .map(|message| format!("[{}] {}", message.sent_at, message.text))
            .collect::<Vec<_>>()
            .join("\n");

        html! {
            <div class="demo-root">
                <ul class="chat-log">
                    { for self.messages.iter().map(|message| html! {
                        <li>
                            <span class="chat-time">{ message.sent_at.clone() }</span>
                            <span class="chat-text">{ message.text.clone() }</span>
                        </li>
                    }) }
                </ul>

                <TextInput
                    label="Mensaje"
                    placeholder="Escribe un mensaje y pulsa Enter"
                    value={self.draft.clone()}
                    min_rows={Some(1)}
                    max_rows={Some(6)}
                    class_name="composer"
                    on_change={link.callback(|event: InputEvent| Msg::DraftChanged(textarea_value(&event)))}
                    on_enter_key_down={link.callback(|_: KeyboardEvent| Msg::Send)}
                />
                <button class="icon-btn" onclick={link.callback(|_| Msg::ClearDraft)}>
                    {"Limpiar"}
                </button>

                <TextInput
                    label="Correo"
                    value={self.email.clone()}
                    max_rows={Some(1)}
                    validate={Callback::from(|value: String| is_valid_email(&value))}
                    on_change={link.callback(|event: InputEvent| Msg::EmailChanged(textarea_value(&event)))}
                    on_enter_key_down={Callback::from(|_: KeyboardEvent| show_toast("Correo guardado."))}
                />

                <TextInput
                    label="Historial"
                    value={transcript}
                    editable={false}
                    min_rows={Some(2)}
                    max_rows={Some(10)}
                />
            </div>
        }
    }
}

fn textarea_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlTextAreaElement>().value()
}
