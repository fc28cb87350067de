//! Auto-resizing text input: root module wiring the Yew `Component`
//! implementation with submodules for props, state, update, view and the
//! browser plumbing (measurement and resize subscription).
//!
//! Lifecycle
//! - First render: attach the window resize listener and take the first
//!   measurement.
//! - New props: re-render now, measure on the next timer tick, once the new
//!   value is in the DOM. A newer update supersedes a pending one.
//! - Destroy: cancel the pending tick, detach the listener and drop the
//!   shadow node.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

mod measure;
mod messages;
mod props;
mod resize;
mod state;
mod update;
mod view;

use messages::Msg;
use props::TextInputProps;
use resize::ResizeSubscription;
pub use state::TextInput;

impl Component for TextInput {
    type Message = Msg;
    type Properties = TextInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        TextInput::new(ctx.props().rows())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let link = ctx.link().clone();
        self.controller.receive_updated_configuration(ctx.props().rows(), move || {
            Timeout::new(0, move || link.send_message(Msg::Scheduled))
        });
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let on_resize = ctx.link().callback(|_: ()| Msg::Resize);
            let measurement = self.measure();
            let changed = self
                .controller
                .mount(move || ResizeSubscription::attach(on_resize), measurement);
            if changed {
                ctx.link().send_message(Msg::Refresh);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.unmount();
        self.measurer.release();
    }
}
