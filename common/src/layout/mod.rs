//! Height computation: raw DOM metrics in, pixel height and overflow out.

pub mod estimator;
pub mod sizing;
pub mod style;

pub use estimator::{estimate, HeightDecision, Measurement};
pub use sizing::{parse_px, BoxSizing, SizingData};
pub use style::{Overflow, RenderStyle};
