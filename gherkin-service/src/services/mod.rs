pub mod generation;
pub mod generators;
pub mod metrics;

pub use generation::GenerationService;
pub use generators::{GenerationError, GherkinGenerator};
