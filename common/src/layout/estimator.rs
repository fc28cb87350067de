//! Height estimator.
//!
//! Converts row counts into pixel bounds using the row height read from the
//! live node and clamps the natural content height into them. The function is
//! pure: the DOM read happens before the call and arrives as a
//! [`Measurement`].

use crate::model::RowBounds;

/// Layout metrics of the textarea at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Natural height of the current content, in the same box model as the
    /// inline `height` style.
    pub content_height: f64,
    /// Height of a single line of text in the node's current font.
    pub row_height: f64,
    /// Extra pixels added to row-derived bounds (padding and border under
    /// `border-box`).
    pub row_offset: f64,
}

/// Result of one estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightDecision {
    /// Height to apply, always within `[min_height, max_height]`.
    pub height: f64,
    pub min_height: f64,
    pub max_height: f64,
    /// Unclamped content height the decision was made from.
    pub content_height: f64,
}

/// Computes the pixel height for `measurement` under `rows`.
pub fn estimate(measurement: &Measurement, rows: RowBounds) -> HeightDecision {
    let content_height = sanitize(measurement.content_height);
    let row_height = sanitize(measurement.row_height);
    let row_offset = sanitize(measurement.row_offset);

    let to_pixels = |count: u32| f64::from(count) * row_height + row_offset;
    let min_height = rows.min().map_or(f64::NEG_INFINITY, to_pixels);
    let max_height = rows.max().map_or(f64::INFINITY, to_pixels);

    // RowBounds guarantees min <= max, so the order of max/min does not matter.
    let height = content_height.max(min_height).min(max_height);

    HeightDecision {
        height,
        min_height,
        max_height,
        content_height,
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn measured(content_height: f64) -> Measurement {
        Measurement {
            content_height,
            row_height: 20.0,
            row_offset: 0.0,
        }
    }

    #[test]
    fn floor_applies_to_short_content() {
        let decision = estimate(&measured(15.0), RowBounds::new(Some(2), Some(6)));
        assert_eq!(decision.height, 40.0);
        assert_eq!(decision.min_height, 40.0);
        assert_eq!(decision.max_height, 120.0);
    }

    #[test]
    fn ceiling_applies_to_tall_content() {
        let decision = estimate(&measured(200.0), RowBounds::new(Some(2), Some(6)));
        assert_eq!(decision.height, 120.0);
        assert_eq!(decision.content_height, 200.0);
    }

    #[test]
    fn content_within_bounds_is_kept() {
        let decision = estimate(&measured(80.0), RowBounds::new(Some(2), Some(6)));
        assert_eq!(decision.height, 80.0);
    }

    #[test]
    fn unset_rows_impose_no_bounds() {
        let decision = estimate(&measured(15.0), RowBounds::unbounded());
        assert_eq!(decision.height, 15.0);
        assert_eq!(decision.min_height, f64::NEG_INFINITY);
        assert_eq!(decision.max_height, f64::INFINITY);
    }

    #[test]
    fn row_offset_is_added_to_bounds() {
        let measurement = Measurement {
            content_height: 10.0,
            row_height: 20.0,
            row_offset: 12.0,
        };
        let decision = estimate(&measurement, RowBounds::new(Some(1), Some(3)));
        assert_eq!(decision.min_height, 32.0);
        assert_eq!(decision.max_height, 72.0);
        assert_eq!(decision.height, 32.0);
    }

    #[test]
    fn garbage_metrics_never_produce_nan() {
        let measurement = Measurement {
            content_height: f64::NAN,
            row_height: -4.0,
            row_offset: f64::INFINITY,
        };
        let decision = estimate(&measurement, RowBounds::new(Some(2), Some(4)));
        assert_eq!(decision.height, 0.0);
        assert!(!decision.min_height.is_nan());
        assert!(!decision.max_height.is_nan());
    }

    proptest! {
        #[test]
        fn height_stays_within_bounds(
            content in 0.0f64..5000.0,
            row_height in 1.0f64..64.0,
            min_rows in 0u32..20,
            extra_rows in 0u32..20,
        ) {
            let rows = RowBounds::new(Some(min_rows), Some(min_rows + extra_rows));
            let measurement = Measurement { content_height: content, row_height, row_offset: 0.0 };
            let decision = estimate(&measurement, rows);
            prop_assert!(decision.min_height <= decision.height);
            prop_assert!(decision.height <= decision.max_height);
            prop_assert_eq!(decision.min_height, f64::from(min_rows) * row_height);
        }

        #[test]
        fn missing_min_rows_means_no_floor(content in 0.0f64..5000.0, max_rows in proptest::option::of(0u32..20)) {
            let decision = estimate(&measured(content), RowBounds::new(None, max_rows));
            prop_assert_eq!(decision.min_height, f64::NEG_INFINITY);
        }
    }
}
