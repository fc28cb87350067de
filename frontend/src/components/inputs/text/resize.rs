//! Window `resize` subscription tied to a Rust value's lifetime.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::Callback;

const RESIZE: &str = "resize";

/// A registered window `resize` listener. Dropping it unregisters the
/// listener and frees the closure, so the registration can neither leak nor
/// outlive the component that owns it.
pub struct ResizeSubscription {
    window: Window,
    closure: Closure<dyn Fn()>,
}

impl ResizeSubscription {
    /// Registers `on_resize` on the global window. Returns `None` when there
    /// is no window or the browser rejects the registration.
    pub fn attach(on_resize: Callback<()>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move || on_resize.emit(())) as Box<dyn Fn()>);
        match window.add_event_listener_with_callback(RESIZE, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { window, closure }),
            Err(err) => {
                log::warn!("could not attach resize listener: {err:?}");
                None
            }
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(RESIZE, self.closure.as_ref().unchecked_ref())
        {
            log::debug!("resize listener was already gone: {err:?}");
        }
    }
}
