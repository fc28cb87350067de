//! Component state for the auto-resizing text input.
//!
//! The focus/height state itself lives inside `FieldController`; this struct
//! adds the browser side: the textarea ref, the shadow measurer and the id
//! that links the label to the field.

use autosize_common::control::FieldController;
use autosize_common::layout::Measurement;
use autosize_common::model::RowBounds;
use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use super::measure::ShadowMeasurer;
use super::resize::ResizeSubscription;

/// Main state container for the `TextInput` component.
pub struct TextInput {
    /// Field state, row bounds, pending recompute timer and resize listener.
    pub controller: FieldController<Timeout, ResizeSubscription>,

    /// Reference to the `<textarea>` DOM node.
    pub textarea_ref: NodeRef,

    /// Hidden twin of the textarea used for measuring.
    pub measurer: ShadowMeasurer,

    /// `id` of the textarea, referenced by the label's `for`.
    pub field_id: AttrValue,
}

impl TextInput {
    pub fn new(rows: RowBounds) -> Self {
        Self {
            controller: FieldController::new(rows),
            textarea_ref: NodeRef::default(),
            measurer: ShadowMeasurer::default(),
            field_id: AttrValue::from(format!("text-input-{}", Uuid::new_v4())),
        }
    }

    /// Reads the current layout of the textarea. Failures are expected
    /// before the first paint and after teardown, so they are only logged.
    pub fn measure(&mut self) -> Option<Measurement> {
        match self.measurer.measure(&self.textarea_ref) {
            Ok(measurement) => Some(measurement),
            Err(err) => {
                log::debug!("skipping height recompute: {err}");
                None
            }
        }
    }
}
