use std::sync::Arc;

use jobboard_core::JobAlert;

use super::RepositoryError;
use crate::storage::{FromRecord, InMemoryStorage, Storage, ToRecord};

/// Job alert subscription repository.
pub trait JobAlertRepository: Send + Sync {
    fn add(&self, alert: &JobAlert) -> Result<(), RepositoryError>;
    fn get_job_alerts(&self) -> Result<Vec<JobAlert>, RepositoryError>;
}

impl<R> JobAlertRepository for Arc<R>
where
    R: JobAlertRepository + ?Sized,
{
    fn add(&self, alert: &JobAlert) -> Result<(), RepositoryError> {
        (**self).add(alert)
    }

    fn get_job_alerts(&self) -> Result<Vec<JobAlert>, RepositoryError> {
        (**self).get_job_alerts()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryJobAlertRepository<S = InMemoryStorage> {
    storage: S,
}

impl<S: Storage> InMemoryJobAlertRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> JobAlertRepository for InMemoryJobAlertRepository<S> {
    fn add(&self, alert: &JobAlert) -> Result<(), RepositoryError> {
        self.storage.add(alert.to_record()?)?;
        tracing::debug!(pattern = %alert.regex_name, "job alert stored");
        Ok(())
    }

    fn get_job_alerts(&self) -> Result<Vec<JobAlert>, RepositoryError> {
        self.storage
            .get_all()?
            .into_iter()
            .map(|record| JobAlert::from_record(record).map_err(RepositoryError::from))
            .collect()
    }
}
