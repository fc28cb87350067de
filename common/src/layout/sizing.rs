//! Box-model arithmetic for turning shadow-node scroll heights into a
//! [`Measurement`].
//!
//! `scrollHeight` includes padding but not border. The inline `height` style
//! means different things under `border-box` and `content-box`, so both the
//! content height and the row-derived bounds are shifted into the node's own
//! box model here.

use super::estimator::Measurement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxSizing {
    ContentBox,
    BorderBox,
}

impl BoxSizing {
    /// Parses a computed `box-sizing` value; anything unknown is `content-box`.
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "border-box" => BoxSizing::BorderBox,
            _ => BoxSizing::ContentBox,
        }
    }
}

/// Vertical box metrics read from the node's computed style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingData {
    pub box_sizing: BoxSizing,
    /// `padding-top + padding-bottom`
    pub padding: f64,
    /// `border-top-width + border-bottom-width`
    pub border: f64,
}

impl SizingData {
    /// Builds the metrics from raw computed-style strings.
    pub fn from_css(
        box_sizing: &str,
        padding_top: &str,
        padding_bottom: &str,
        border_top: &str,
        border_bottom: &str,
    ) -> Self {
        let px = |value: &str| parse_px(value).unwrap_or(0.0);
        Self {
            box_sizing: BoxSizing::from_css(box_sizing),
            padding: px(padding_top) + px(padding_bottom),
            border: px(border_top) + px(border_bottom),
        }
    }

    /// Builds a [`Measurement`] from two scroll heights of the shadow node:
    /// one holding the real content and one holding a single character.
    pub fn measurement(&self, content_scroll: f64, single_row_scroll: f64) -> Measurement {
        let content_height = match self.box_sizing {
            BoxSizing::BorderBox => content_scroll + self.border,
            BoxSizing::ContentBox => content_scroll - self.padding,
        };
        let row_offset = match self.box_sizing {
            BoxSizing::BorderBox => self.padding + self.border,
            BoxSizing::ContentBox => 0.0,
        };
        Measurement {
            content_height,
            row_height: single_row_scroll - self.padding,
            row_offset,
        }
    }
}

/// Parses a CSS pixel length such as `"12.5px"` or `"0"`.
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pixel_lengths() {
        assert_eq!(parse_px("12.5px"), Some(12.5));
        assert_eq!(parse_px(" 0 "), Some(0.0));
        assert_eq!(parse_px("normal"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn border_box_adds_border_and_offsets_rows() {
        let sizing = SizingData::from_css("border-box", "4px", "4px", "1px", "1px");
        let measurement = sizing.measurement(68.0, 28.0);
        assert_eq!(measurement.content_height, 70.0);
        assert_eq!(measurement.row_height, 20.0);
        assert_eq!(measurement.row_offset, 10.0);
    }

    #[test]
    fn content_box_strips_padding() {
        let sizing = SizingData::from_css("content-box", "4px", "4px", "1px", "1px");
        let measurement = sizing.measurement(68.0, 28.0);
        assert_eq!(measurement.content_height, 60.0);
        assert_eq!(measurement.row_height, 20.0);
        assert_eq!(measurement.row_offset, 0.0);
    }

    #[test]
    fn unreadable_lengths_count_as_zero() {
        let sizing = SizingData::from_css("", "auto", "", "medium", "1px");
        assert_eq!(sizing.box_sizing, BoxSizing::ContentBox);
        assert_eq!(sizing.padding, 0.0);
        assert_eq!(sizing.border, 1.0);
    }
}
