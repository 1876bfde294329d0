mod grid;
mod ramp_type;
mod rows;

pub use grid::Grid;
pub use ramp_type::RampType;
pub use rows::{AggregateRow, CohortCell};
