use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use jobboard_core::JobFilters;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn add_job(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::JobIn>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::malformed_request(rejection.body_text()),
    };
    let job = match body.into_job() {
        Ok(job) => job,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.submit_job(job).await {
        Ok(submitted) => (StatusCode::CREATED, Json(dto::submitted_job_to_json(&submitted))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_jobs(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.list_jobs() {
        Ok(jobs) => Json(dto::jobs_to_json(&jobs)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_aggregated_jobs(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_aggregated_jobs().await {
        Ok(jobs) => Json(dto::jobs_to_json(&jobs)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn search_external_jobs(
    Extension(services): Extension<Arc<AppServices>>,
    filters: Result<Query<JobFilters>, QueryRejection>,
) -> axum::response::Response {
    let Query(filters) = match filters {
        Ok(filters) => filters,
        Err(rejection) => return errors::malformed_request(rejection.body_text()),
    };
    match services.search_external_jobs(filters).await {
        Ok(jobs) => Json(dto::jobs_to_json(&jobs)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
