use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that deserializes and validates before the handler runs.
///
/// Every failure (unreadable body, malformed JSON, missing or mistyped
/// fields, violated `validator` rules) is rejected as `AppError::Validation`
/// carrying the message of the first check that failed. The body is parsed
/// regardless of `Content-Type`.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let value: T = serde_json::from_slice(&bytes)?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(range(min = 1, message = "id must be a positive integer"))]
        id: i64,
        name: String,
    }

    async fn extract(body: &'static str) -> Result<Payload, AppError> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        ValidatedJson::<Payload>::from_request(req, &())
            .await
            .map(|ValidatedJson(p)| p)
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let payload = extract(r#"{"id": 7, "name": ""}"#).await.unwrap();
        assert_eq!(payload.id, 7);
        assert_eq!(payload.name, "");
    }

    #[tokio::test]
    async fn rejects_rule_violation_with_rule_message() {
        match extract(r#"{"id": 0, "name": "x"}"#).await {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "id must be a positive integer"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_missing_field() {
        match extract(r#"{"id": 3}"#).await {
            Err(AppError::Validation(msg)) => assert!(msg.contains("missing field `name`")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn deserialization_error_reported_before_rule_violation() {
        match extract(r#"{"id": -1}"#).await {
            Err(AppError::Validation(msg)) => assert!(msg.contains("missing field `name`")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_wrong_type() {
        match extract(r#"{"id": "three", "name": "x"}"#).await {
            Err(AppError::Validation(msg)) => assert!(msg.contains("invalid type")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        assert!(matches!(
            extract("{not json").await,
            Err(AppError::Validation(_))
        ));
    }
}
