//! Inline style applied to the textarea.

use std::fmt;

use crate::model::FieldState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
        }
    }
}

/// `{height, overflow}` pair rendered on the textarea.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub height: Option<f64>,
    pub overflow: Overflow,
}

impl RenderStyle {
    /// Derives the style from `state`.
    ///
    /// `style_max_height` is a host-level `max-height` override; the larger of
    /// it and the row-derived ceiling wins. The scrollbar is hidden while that
    /// ceiling still fits the natural content.
    pub fn derive(state: &FieldState, style_max_height: Option<f64>) -> Self {
        let max_height = style_max_height
            .unwrap_or(f64::NEG_INFINITY)
            .max(state.max_height);
        let natural = state.content_height.or(state.height);
        let overflow = match natural {
            Some(height) if max_height < height => Overflow::Auto,
            _ => Overflow::Hidden,
        };
        Self {
            height: state.height,
            overflow,
        }
    }

    /// Renders the style as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(height) = self.height {
            write!(f, "height: {height}px; ")?;
        }
        write!(f, "overflow: {};", self.overflow.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{estimate, Measurement};
    use crate::model::{FieldAction, RowBounds};

    fn measured(content_height: f64) -> FieldState {
        let measurement = Measurement {
            content_height,
            row_height: 20.0,
            row_offset: 0.0,
        };
        let decision = estimate(&measurement, RowBounds::new(Some(2), Some(6)));
        FieldState::new().reduce(FieldAction::Measured(decision))
    }

    #[test]
    fn unmeasured_field_hides_scrollbar() {
        let style = RenderStyle::derive(&FieldState::new(), None);
        assert_eq!(style.height, None);
        assert_eq!(style.overflow, Overflow::Hidden);
        assert_eq!(style.to_css(), "overflow: hidden;");
    }

    #[test]
    fn short_content_is_floored_without_scroll() {
        let style = RenderStyle::derive(&measured(15.0), None);
        assert_eq!(style.height, Some(40.0));
        assert_eq!(style.overflow, Overflow::Hidden);
    }

    #[test]
    fn tall_content_is_capped_and_scrolls() {
        let style = RenderStyle::derive(&measured(200.0), None);
        assert_eq!(style.height, Some(120.0));
        assert_eq!(style.overflow, Overflow::Auto);
        assert_eq!(style.to_css(), "height: 120px; overflow: auto;");
    }

    #[test]
    fn content_within_bounds_does_not_scroll() {
        let style = RenderStyle::derive(&measured(80.0), None);
        assert_eq!(style.height, Some(80.0));
        assert_eq!(style.overflow, Overflow::Hidden);
    }

    #[test]
    fn larger_style_override_suppresses_scroll() {
        let style = RenderStyle::derive(&measured(200.0), Some(240.0));
        assert_eq!(style.overflow, Overflow::Hidden);
        let style = RenderStyle::derive(&measured(200.0), Some(60.0));
        assert_eq!(style.overflow, Overflow::Auto);
    }
}
