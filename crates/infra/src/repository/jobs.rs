use std::sync::Arc;

use jobboard_core::Job;

use super::RepositoryError;
use crate::storage::{FromRecord, InMemoryStorage, Storage, ToRecord};

/// Job posting repository.
pub trait JobRepository: Send + Sync {
    fn add(&self, job: &Job) -> Result<(), RepositoryError>;
    fn get_jobs(&self) -> Result<Vec<Job>, RepositoryError>;
}

impl<R> JobRepository for Arc<R>
where
    R: JobRepository + ?Sized,
{
    fn add(&self, job: &Job) -> Result<(), RepositoryError> {
        (**self).add(job)
    }

    fn get_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        (**self).get_jobs()
    }
}

/// Jobs kept as records in a [`Storage`].
#[derive(Debug, Default)]
pub struct InMemoryJobRepository<S = InMemoryStorage> {
    storage: S,
}

impl<S: Storage> InMemoryJobRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> JobRepository for InMemoryJobRepository<S> {
    fn add(&self, job: &Job) -> Result<(), RepositoryError> {
        self.storage.add(job.to_record()?)?;
        tracing::debug!(job = %job.name, "job stored");
        Ok(())
    }

    fn get_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        let jobs = self
            .storage
            .get_all()?
            .into_iter()
            .map(Job::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = jobs.len(), "jobs loaded");
        Ok(jobs)
    }
}
