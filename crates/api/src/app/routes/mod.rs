use axum::{
    routing::{get, post},
    Router,
};

pub mod alerts;
pub mod jobs;
pub mod system;

/// Router for every endpoint that needs `AppServices`.
pub fn router() -> Router {
    Router::new()
        .route("/add-job", post(jobs::add_job))
        .route("/jobs", get(jobs::list_jobs))
        .route("/aggregated-jobs", get(jobs::list_aggregated_jobs))
        .route("/external-jobs", get(jobs::search_external_jobs))
        .route("/job-alerts", post(alerts::create_alert).get(alerts::list_alerts))
}
