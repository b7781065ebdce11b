pub mod gate;
pub mod grid;

pub use gate::{CoverageGate, CoverageResult};
pub use grid::{CoverageGrid, MAX_AXIS_SAMPLES, MAX_GRID_EVALUATIONS};
