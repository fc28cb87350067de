//! Row-count configuration for the text input.
//!
//! Hosts configure the control in rows, not pixels. `RowBounds` normalizes
//! the pair once so that the estimator never sees an inverted range.

/// Minimum and maximum number of visible rows, either of which may be unset.
///
/// Invariant: when both bounds are present, `min <= max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowBounds {
    min: Option<u32>,
    max: Option<u32>,
}

impl RowBounds {
    /// Builds the bounds from host configuration.
    ///
    /// An inverted pair (`min > max`) is resolved by raising `max` to `min`.
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        let max = match (min, max) {
            (Some(min), Some(max)) if min > max => {
                log::warn!("min_rows ({min}) exceeds max_rows ({max}); using {min} for both");
                Some(min)
            }
            _ => max,
        };
        Self { min, max }
    }

    /// No floor and no ceiling: the field follows its content.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<u32> {
        self.min
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ordered_bounds() {
        let rows = RowBounds::new(Some(2), Some(6));
        assert_eq!(rows.min(), Some(2));
        assert_eq!(rows.max(), Some(6));
    }

    #[test]
    fn inverted_bounds_collapse_to_min() {
        let rows = RowBounds::new(Some(8), Some(3));
        assert_eq!(rows.min(), Some(8));
        assert_eq!(rows.max(), Some(8));
    }

    #[test]
    fn one_sided_bounds_are_kept() {
        assert_eq!(RowBounds::new(None, Some(4)).max(), Some(4));
        assert_eq!(RowBounds::new(Some(3), None).min(), Some(3));
        assert_eq!(RowBounds::unbounded(), RowBounds::new(None, None));
    }
}
