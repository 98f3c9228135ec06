use serde::{Deserialize, Serialize};
use service_core::error::{ApiStatusCode, ResponseStatus};
use validator::Validate;

/// Body of `POST /v1/generate-gherkin`. Empty strings are accepted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub domain: String,
    #[validate(range(min = 1, message = "requestId must be a positive integer"))]
    pub request_id: i64,
    pub requirement_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSuccessResponse {
    pub status: ResponseStatus,
    pub status_code: ApiStatusCode,
    pub request_id: i64,
    pub generated_gherkin: String,
}

impl GenerationSuccessResponse {
    pub fn new(request_id: i64, generated_gherkin: String) -> Self {
        Self {
            status: ResponseStatus::Success,
            status_code: ApiStatusCode::Success,
            request_id,
            generated_gherkin,
        }
    }
}
