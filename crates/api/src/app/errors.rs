use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use jobboard_core::DomainError;
use jobboard_infra::AlertMatchError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::External(e) => {
            tracing::warn!(error = %e, "external job source request failed");
            json_error(StatusCode::BAD_GATEWAY, "external_source_error", e.to_string())
        }
        ServiceError::AlertMatch(AlertMatchError::Pattern(e)) => {
            tracing::error!(error = %e, "stored alert pattern is unusable");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "alert_pattern_error", e.to_string())
        }
        ServiceError::Repository(e) | ServiceError::AlertMatch(AlertMatchError::Repository(e)) => {
            tracing::error!(error = %e, "repository failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "repository_error", e.to_string())
        }
        ServiceError::Source(e) => {
            tracing::error!(error = %e, "job source failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "source_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg),
        e @ DomainError::InvalidPattern { .. } => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_pattern", e.to_string())
        }
    }
}

/// Body or query string that could not be decoded into the expected shape.
pub fn malformed_request(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
