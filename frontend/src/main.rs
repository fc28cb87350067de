use crate::app::App;

mod app;
mod components;
mod helpers;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"console logging already initialized".into());
        }
    }

    yew::Renderer::<App>::new().render();
}
