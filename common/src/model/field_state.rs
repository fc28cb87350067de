//! State of a single text input and its transition function.
//!
//! All mutations go through [`FieldState::reduce`], so a handler can never
//! leave the state half-updated: it either returns the next value or the
//! same one.

use crate::layout::HeightDecision;

/// Runtime state owned by one text input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldState {
    /// True while the textarea has input focus.
    pub focus: bool,
    /// Last computed pixel height. `None` until the first measurement.
    pub height: Option<f64>,
    /// Pixel floor derived from `min_rows`, `-inf` when unset.
    pub min_height: f64,
    /// Pixel ceiling derived from `max_rows`, `+inf` when unset.
    pub max_height: f64,
    /// Natural (unclamped) content height of the last measurement.
    pub content_height: Option<f64>,
}

/// Inputs accepted by [`FieldState::reduce`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldAction {
    /// The textarea received focus. Ignored unless `editable`.
    Focus { editable: bool },
    /// The textarea lost focus. Never gated.
    Blur,
    /// A fresh height decision from the estimator.
    Measured(HeightDecision),
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            focus: false,
            height: None,
            min_height: f64::NEG_INFINITY,
            max_height: f64::INFINITY,
            content_height: None,
        }
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state that follows `action`.
    pub fn reduce(self, action: FieldAction) -> Self {
        match action {
            FieldAction::Focus { editable: false } => self,
            FieldAction::Focus { editable: true } => Self { focus: true, ..self },
            FieldAction::Blur => Self { focus: false, ..self },
            FieldAction::Measured(decision) => Self {
                height: Some(decision.height),
                min_height: decision.min_height,
                max_height: decision.max_height,
                content_height: Some(decision.content_height),
                ..self
            },
        }
    }
}
