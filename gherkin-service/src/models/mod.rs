//! Request and response shapes for the HTTP API.

pub mod generation;
pub mod health;
pub mod metadata;

pub use generation::{GenerationRequest, GenerationSuccessResponse};
pub use health::HealthStatus;
pub use metadata::ModelMetadata;
