//! Defines the properties for the `TextInput` component.
//!
//! Everything the host controls lives here: the value, row bounds, the
//! optional validator and every event callback. Props are immutable per
//! render; a new set arriving without a user edit triggers one deferred
//! height recompute.

use autosize_common::model::RowBounds;
use yew::prelude::*;

/// Properties for the `TextInput` component.
#[derive(Properties, PartialEq, Clone)]
pub struct TextInputProps {
    /// When false the field cannot take focus and the textarea is disabled.
    #[prop_or(true)]
    pub editable: bool,
    #[prop_or_default]
    pub disabled: bool,

    /// Host-declared content. Also the value handed to `validate`.
    #[prop_or_default]
    pub value: AttrValue,
    /// Only used to decide whether the field looks active.
    #[prop_or_default]
    pub default_value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Floating label rendered after the textarea; empty means no label.
    #[prop_or_default]
    pub label: Option<AttrValue>,

    /// Height floor in rows. Unset means the content decides.
    #[prop_or_default]
    pub min_rows: Option<u32>,
    /// Height ceiling in rows; taller content scrolls.
    #[prop_or_default]
    pub max_rows: Option<u32>,
    /// Style-level `max-height` override in pixels. Only affects whether a
    /// scrollbar is shown.
    #[prop_or_default]
    pub max_height: Option<f64>,

    /// Extra classes appended to the container's base classes.
    #[prop_or_default]
    pub class_name: Option<AttrValue>,
    #[prop_or_default]
    pub tab_index: Option<i32>,

    /// Returns whether `value` is acceptable. Without it no success/error
    /// class is ever applied.
    #[prop_or_default]
    pub validate: Option<Callback<String, bool>>,

    #[prop_or_default]
    pub on_focus: Option<Callback<FocusEvent>>,
    #[prop_or_default]
    pub on_blur: Option<Callback<FocusEvent>>,
    /// Fired on every edit, after the height has been recomputed.
    #[prop_or_default]
    pub on_change: Option<Callback<InputEvent>>,
    /// Fired for every key, Enter included.
    #[prop_or_default]
    pub on_key_down: Option<Callback<KeyboardEvent>>,
    /// Fired for Enter instead of inserting a newline.
    #[prop_or_default]
    pub on_enter_key_down: Option<Callback<KeyboardEvent>>,
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_drag_start: Option<Callback<DragEvent>>,
    #[prop_or_default]
    pub on_drag_end: Option<Callback<DragEvent>>,
    #[prop_or_default]
    pub on_drag_over: Option<Callback<DragEvent>>,
}

impl TextInputProps {
    pub fn rows(&self) -> RowBounds {
        RowBounds::new(self.min_rows, self.max_rows)
    }
}
