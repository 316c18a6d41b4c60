//! Pitch Polisher - turns raw startup notes into investor-ready material
//!
//! This library provides:
//! - A month-by-month revenue projection (users, revenue, COGS, gross and net profit)
//! - Top-down market sizing (TAM / SAM / SOM)
//! - Growth sensitivity sweeps over the projection
//! - A prompt library and a Gemini text-generation client
//! - A report builder with Markdown and CSV renderers

pub mod error;
pub mod projection;
pub mod market;
pub mod scenario;
pub mod prompts;
pub mod generation;
pub mod report;

// Re-export commonly used types
pub use error::{GenerationError, PitchError, ValidationError};
pub use projection::{project, ProjectionAssumptions, ProjectionEngine, ProjectionRow, ProjectionTable};
pub use market::{estimate, MarketInputs, MarketSizeEstimate};
pub use scenario::ScenarioRunner;
pub use prompts::{PitchContext, PitchSection};
pub use generation::{GeminiClient, GenerationSettings, TextGenerator};
pub use report::{PitchReport, PitchRequest, ReportBuilder};
