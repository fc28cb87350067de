//! Small browser utilities used by the demo page.

use regex::Regex;
use std::sync::LazyLock;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 2500;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; \
    transform: translateX(-50%); background: rgba(0, 0, 0, 0.8); color: #fff; \
    padding: 10px 20px; border-radius: 4px; z-index: 10000; \
    font-family: Arial, sans-serif;";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern is valid")
});

/// Shows `message` at the bottom of the page and removes it after
/// [`TOAST_MILLIS`].
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    if toast.set_attribute("style", TOAST_STYLE).is_err() {
        log::debug!("toast style rejected");
    }
    let toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}

/// Loose e-mail check for the demo's validated field.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Current local time as `HH:MM:SS`, used to stamp sent messages.
pub fn now_label() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("  ana.perez@correo.co "));
    }

    #[test]
    fn rejects_incomplete_addresses() {
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana perez@example.com"));
        assert!(!is_valid_email(""));
    }
}
