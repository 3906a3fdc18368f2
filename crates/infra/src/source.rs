//! Uniform "fetch jobs" capability shared by every aggregated source.

use async_trait::async_trait;
use jobboard_core::Job;
use thiserror::Error;

use crate::external::ExternalSourceError;
use crate::repository::{InMemoryJobRepository, JobRepository, RepositoryError};
use crate::storage::Storage;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not deliver data right now (remote down, bad payload, timeout).
    #[error(transparent)]
    Unavailable(#[from] ExternalSourceError),

    /// Local data could not be read back; an integrity bug, not an outage.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SourceError {
    /// Whether a reader may carry on without this source's results.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn get_jobs(&self) -> Result<Vec<Job>, SourceError>;
}

#[async_trait]
impl<S: Storage + 'static> JobSource for InMemoryJobRepository<S> {
    fn name(&self) -> &str {
        "repository"
    }

    async fn get_jobs(&self) -> Result<Vec<Job>, SourceError> {
        Ok(JobRepository::get_jobs(self)?)
    }
}
