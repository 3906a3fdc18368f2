//! HTTP client for the external job listing service.
//!
//! The service answers `GET <base>/jobs` with a JSON array of positional rows
//! `[name, salary, country, skills]`. Optional filters travel as query
//! parameters; absent filters are omitted, never sent empty.

use async_trait::async_trait;
use jobboard_core::{Job, JobFilters};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::ExternalSourceConfig;
use crate::source::{JobSource, SourceError};

const JOBS_ENDPOINT: &str = "jobs";

#[derive(Debug, Error)]
pub enum ExternalSourceError {
    /// The client could not be constructed from its configuration.
    #[error("external job source misconfigured: {0}")]
    Setup(String),

    /// Transport failure, timeout, or a non-success HTTP status.
    #[error("external job source unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("external job source returned a malformed body: {0}")]
    MalformedBody(String),

    #[error("external job row {index} is malformed: {reason}")]
    MalformedRow { index: usize, reason: String },
}

/// One row of the remote payload, in wire order.
#[derive(Debug, Deserialize)]
struct ExternalJobRow(String, u64, String, Vec<String>);

impl From<ExternalJobRow> for Job {
    /// Rows are taken as published; only their shape is checked.
    fn from(ExternalJobRow(name, salary, country, skills): ExternalJobRow) -> Self {
        Job {
            name,
            country,
            salary,
            skills,
        }
    }
}

/// Client for the external job listing service.
#[derive(Debug, Clone)]
pub struct ExternalJobClient {
    http: Client,
    jobs_url: Url,
}

impl ExternalJobClient {
    pub fn new(config: &ExternalSourceConfig) -> Result<Self, ExternalSourceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalSourceError::Setup(e.to_string()))?;
        let jobs_url = config
            .base_url
            .join(JOBS_ENDPOINT)
            .map_err(|e| ExternalSourceError::Setup(e.to_string()))?;

        Ok(Self { http, jobs_url })
    }

    /// Fetch jobs, optionally narrowed by `filters`.
    pub async fn get_jobs(&self, filters: Option<&JobFilters>) -> Result<Vec<Job>, ExternalSourceError> {
        let mut request = self.http.get(self.jobs_url.clone());
        if let Some(filters) = filters {
            request = request.query(&filters.sanitize());
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(ExternalSourceError::Unreachable)?;
        let body = response.bytes().await.map_err(ExternalSourceError::Unreachable)?;

        let jobs = parse_rows(&body)?;
        tracing::debug!(url = %self.jobs_url, count = jobs.len(), "external jobs fetched");
        Ok(jobs)
    }
}

fn parse_rows(body: &[u8]) -> Result<Vec<Job>, ExternalSourceError> {
    let rows: Vec<Value> =
        serde_json::from_slice(body).map_err(|e| ExternalSourceError::MalformedBody(e.to_string()))?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value::<ExternalJobRow>(row)
                .map(Job::from)
                .map_err(|e| ExternalSourceError::MalformedRow {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect()
}

#[async_trait]
impl JobSource for ExternalJobClient {
    fn name(&self) -> &str {
        "external"
    }

    async fn get_jobs(&self) -> Result<Vec<Job>, SourceError> {
        Ok(ExternalJobClient::get_jobs(self, None).await?)
    }
}
