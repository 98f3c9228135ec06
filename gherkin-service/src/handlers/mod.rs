//! HTTP handlers for gherkin-service.

pub mod generate;
pub mod health;
pub mod metrics;
pub mod model;

pub use generate::generate_gherkin;
pub use health::health_check;
pub use model::model_metadata;
