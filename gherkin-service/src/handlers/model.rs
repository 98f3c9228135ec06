use axum::{
    extract::{rejection::PathRejection, Path},
    Json,
};
use service_core::error::AppError;

use crate::models::ModelMetadata;

/// `GET /{version}/model`
///
/// Only one model is deployed; the requested version is logged and the
/// current metadata is returned for any non-empty value.
pub async fn model_metadata(
    version: Result<Path<String>, PathRejection>,
) -> Result<Json<ModelMetadata>, AppError> {
    let Path(version) = version.map_err(|e| AppError::Validation(e.body_text()))?;
    if version.is_empty() {
        return Err(AppError::NotFound);
    }

    tracing::debug!(
        requested = %version,
        served = ModelMetadata::CURRENT.version,
        "Serving model metadata"
    );

    Ok(Json(ModelMetadata::CURRENT))
}
