use autosize_common::keys::KeyDisposition;
use yew::events::{FocusEvent, InputEvent, KeyboardEvent};

pub enum Msg {
    /// Re-render after the first measurement on mount.
    Refresh,
    /// The window was resized; measure right away.
    Resize,
    /// The deferred recompute queued by a props update fired.
    Scheduled,
    Focus(FocusEvent),
    Blur(FocusEvent),
    Input(InputEvent),
    /// Key press, classified once in the listener.
    KeyDown(KeyboardEvent, KeyDisposition),
}
