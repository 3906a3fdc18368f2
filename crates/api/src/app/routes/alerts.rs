use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn create_alert(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::JobAlertIn>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::malformed_request(rejection.body_text()),
    };
    let alert = match body.into_alert() {
        Ok(alert) => alert,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.submit_alert(alert) {
        Ok(alert) => (StatusCode::CREATED, Json(dto::alert_to_json(&alert))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_alerts(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.list_alerts() {
        Ok(alerts) => {
            let items = alerts.iter().map(dto::alert_to_json).collect::<Vec<_>>();
            Json(serde_json::json!({ "items": items })).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
