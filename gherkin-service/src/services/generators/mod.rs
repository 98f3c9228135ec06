//! Generation backend abstraction.
//!
//! A backend turns a validated request into a Gherkin scenario. The service
//! holds it as an injected `Arc<dyn GherkinGenerator>`, so the stub shipped
//! here can be replaced by a model-backed implementation or a test double.

pub mod mock;
pub mod template;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::GenerationRequest;

pub use mock::MockGenerator;
pub use template::TemplateGenerator;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation backend error: {0}")]
    Backend(String),

    #[error("Generation timed out after {0} ms")]
    TimedOut(u128),
}

#[async_trait]
pub trait GherkinGenerator: Send + Sync {
    /// Short identifier used in logs and metrics.
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
