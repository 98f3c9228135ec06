use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::models::{GenerationRequest, GenerationSuccessResponse};
use crate::startup::AppState;

/// `POST /v1/generate-gherkin`
///
/// Validation failures are rejected by the extractor with 422 before this
/// body runs.
#[tracing::instrument(
    skip(state, request),
    fields(client_request_id = request.request_id, domain = %request.domain)
)]
pub async fn generate_gherkin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerationRequest>,
) -> Result<Json<GenerationSuccessResponse>, AppError> {
    let response = state.generation.generate(&request).await?;
    Ok(Json(response))
}
