use service_core::error::AppError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::generators::{GenerationError, GherkinGenerator};
use super::metrics;
use crate::models::{GenerationRequest, GenerationSuccessResponse};

/// Runs a validated request through the injected generation backend.
#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn GherkinGenerator>,
    timeout: Option<Duration>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn GherkinGenerator>, timeout: Option<Duration>) -> Self {
        Self { generator, timeout }
    }

    pub fn backend_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Backend failures surface as `AppError::Internal`; their detail is
    /// logged but never returned to the caller.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationSuccessResponse, AppError> {
        let start = Instant::now();
        let result = self.call_backend(request).await;
        let elapsed = start.elapsed();

        metrics::record_generation(self.generator.name(), result.is_ok(), elapsed);

        match result {
            Ok(gherkin) => {
                tracing::info!(
                    client_request_id = request.request_id,
                    backend = self.generator.name(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Generated Gherkin scenario"
                );
                Ok(GenerationSuccessResponse::new(request.request_id, gherkin))
            }
            Err(e) => {
                tracing::error!(
                    client_request_id = request.request_id,
                    backend = self.generator.name(),
                    error = %e,
                    "Gherkin generation failed"
                );
                Err(AppError::Internal(anyhow::Error::new(e)))
            }
        }
    }

    async fn call_backend(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.generator.generate(request))
                .await
                .unwrap_or(Err(GenerationError::TimedOut(limit.as_millis()))),
            None => self.generator.generate(request).await,
        }
    }
}
