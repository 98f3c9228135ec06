//! Keeps every response inside the closed status-code taxonomy.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

use crate::error::{ApiStatusCode, AppError};

/// Router fallback for paths no route matches.
pub async fn not_found_fallback() -> AppError {
    AppError::NotFound
}

/// Rewrites any response whose status falls outside the closed set.
///
/// A known path requested with the wrong method is reported as not found;
/// other client errors become validation failures; everything else is an
/// internal error.
pub async fn status_taxonomy_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status();

    if ApiStatusCode::from_http(status).is_some() {
        return response;
    }

    tracing::warn!(
        method = %method,
        path = %path,
        status = %status,
        "Rewriting response status outside the API taxonomy"
    );

    let err = if status == StatusCode::METHOD_NOT_ALLOWED {
        AppError::NotFound
    } else if status.is_client_error() {
        AppError::Validation(
            status
                .canonical_reason()
                .unwrap_or("Unprocessable Entity")
                .to_string(),
        )
    } else {
        AppError::Internal(anyhow::anyhow!(
            "unmapped response status {} for {} {}",
            status,
            method,
            path
        ))
    };

    err.into_response()
}

/// Converts a handler panic into the generic internal error body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
