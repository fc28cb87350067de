//! Framework-agnostic logic behind the auto-resizing text input.
//!
//! Everything in this crate is pure with respect to the DOM: layout metrics
//! come in as a [`layout::Measurement`] and timers/listeners are opaque
//! handles owned by a [`slot::Slot`]. The Yew component in the frontend crate
//! plugs the browser into these seams.

pub mod classes;
pub mod control;
pub mod keys;
pub mod layout;
pub mod model;
pub mod slot;
