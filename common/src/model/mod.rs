pub mod field_state;
pub mod rows;

pub use field_state::{FieldAction, FieldState};
pub use rows::RowBounds;
