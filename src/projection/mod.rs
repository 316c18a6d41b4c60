//! Month-by-month revenue projection

mod state;
mod engine;
mod rows;

pub use state::GrowthState;
pub use engine::{project, ProjectionAssumptions, ProjectionEngine, MAX_PROJECTION_MONTHS};
pub use rows::{round_cents, ProjectionRow, ProjectionSummary, ProjectionTable};
