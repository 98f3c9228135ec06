use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Requested Endpoint Not Found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// The closed set of status codes a response body may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatusCode {
    Success,
    UnprocessableEntity,
    NotFound,
    InternalServerError,
}

impl ApiStatusCode {
    pub fn as_u16(self) -> u16 {
        match self {
            ApiStatusCode::Success => 200,
            ApiStatusCode::UnprocessableEntity => 422,
            ApiStatusCode::NotFound => 404,
            ApiStatusCode::InternalServerError => 500,
        }
    }

    pub fn http_status(self) -> http::StatusCode {
        match self {
            ApiStatusCode::Success => http::StatusCode::OK,
            ApiStatusCode::UnprocessableEntity => http::StatusCode::UNPROCESSABLE_ENTITY,
            ApiStatusCode::NotFound => http::StatusCode::NOT_FOUND,
            ApiStatusCode::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps an HTTP status back into the closed set, if it belongs to it.
    pub fn from_http(status: http::StatusCode) -> Option<Self> {
        match status {
            http::StatusCode::OK => Some(ApiStatusCode::Success),
            http::StatusCode::UNPROCESSABLE_ENTITY => Some(ApiStatusCode::UnprocessableEntity),
            http::StatusCode::NOT_FOUND => Some(ApiStatusCode::NotFound),
            http::StatusCode::INTERNAL_SERVER_ERROR => Some(ApiStatusCode::InternalServerError),
            _ => None,
        }
    }
}

impl Serialize for ApiStatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Body returned for every non-success response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub status_code: ApiStatusCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> ApiStatusCode {
        match self {
            AppError::Validation(_) => ApiStatusCode::UnprocessableEntity,
            AppError::NotFound => ApiStatusCode::NotFound,
            AppError::Internal(_) => ApiStatusCode::InternalServerError,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let message = match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        ErrorResponse {
            status: ResponseStatus::Fail,
            status_code: self.status_code(),
            message,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(first_validation_message(&errors))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Picks the first failing rule, ordered by field name so the choice is stable.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, err.code),
            })
        })
        .unwrap_or_else(|| errors.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(err) = &self {
            tracing::error!(error = ?err, "Request failed with internal error");
        }

        let body = self.to_error_response();
        (body.status_code.http_status(), Json(body)).into_response()
    }
}
