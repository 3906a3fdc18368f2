//! Merges jobs from several sources into one result set.

use std::sync::Arc;

use futures::future::join_all;
use jobboard_core::Job;

use crate::source::{JobSource, SourceError};

/// Fans a job query out over an ordered list of sources.
///
/// Sources are queried concurrently but merged in configuration order. A
/// source that is unavailable contributes nothing; the remaining sources
/// still answer. Integrity failures (e.g. unreadable local records) are not
/// absorbed and fail the whole call.
pub struct JobAggregator {
    sources: Vec<Arc<dyn JobSource>>,
}

impl JobAggregator {
    pub fn new(sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn get_jobs(&self) -> Result<Vec<Job>, SourceError> {
        let results = join_all(self.sources.iter().map(|source| source.get_jobs())).await;

        let mut jobs = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(found) => jobs.extend(found),
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(source = source.name(), error = %err, "job source unavailable; skipping");
                }
                Err(err) => {
                    tracing::error!(source = source.name(), error = %err, "job source failed");
                    return Err(err);
                }
            }
        }

        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::external::ExternalSourceError;
    use crate::repository::RepositoryError;
    use crate::storage::StorageError;

    struct StaticSource {
        jobs: Vec<Job>,
        delay: Duration,
    }

    fn static_source(jobs: Vec<Job>) -> Arc<dyn JobSource> {
        Arc::new(StaticSource {
            jobs,
            delay: Duration::ZERO,
        })
    }

    fn delayed_source(jobs: Vec<Job>, delay: Duration) -> Arc<dyn JobSource> {
        Arc::new(StaticSource { jobs, delay })
    }

    fn unavailable() -> Arc<dyn JobSource> {
        Arc::new(UnavailableSource)
    }

    fn broken() -> Arc<dyn JobSource> {
        Arc::new(BrokenRepositorySource)
    }

    #[async_trait]
    impl JobSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn get_jobs(&self) -> Result<Vec<Job>, SourceError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.jobs.clone())
        }
    }

    struct UnavailableSource;

    #[async_trait]
    impl JobSource for UnavailableSource {
        fn name(&self) -> &str {
            "unavailable"
        }

        async fn get_jobs(&self) -> Result<Vec<Job>, SourceError> {
            Err(ExternalSourceError::MalformedBody("not json".to_string()).into())
        }
    }

    struct BrokenRepositorySource;

    #[async_trait]
    impl JobSource for BrokenRepositorySource {
        fn name(&self) -> &str {
            "broken"
        }

        async fn get_jobs(&self) -> Result<Vec<Job>, SourceError> {
            Err(RepositoryError::Storage(StorageError::Poisoned).into())
        }
    }

    fn job(name: &str) -> Job {
        Job::new(name, "Arg", 1, vec![]).unwrap()
    }

    #[tokio::test]
    async fn results_follow_source_order() {
        let aggregator = JobAggregator::new(vec![
            static_source(vec![job("j1")]),
            static_source(vec![job("j2")]),
        ]);

        assert_eq!(aggregator.get_jobs().await.unwrap(), vec![job("j1"), job("j2")]);
    }

    #[tokio::test]
    async fn unavailable_source_contributes_nothing() {
        let aggregator = JobAggregator::new(vec![
            unavailable(),
            static_source(vec![job("j1")]),
        ]);

        assert_eq!(aggregator.get_jobs().await.unwrap(), vec![job("j1")]);
    }

    #[tokio::test]
    async fn all_sources_unavailable_yields_empty() {
        let aggregator = JobAggregator::new(vec![unavailable(), unavailable()]);
        assert!(aggregator.get_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn integrity_failures_are_not_swallowed() {
        let aggregator = JobAggregator::new(vec![
            static_source(vec![job("j1")]),
            broken(),
        ]);

        let err = aggregator.get_jobs().await.unwrap_err();
        assert!(matches!(err, SourceError::Repository(_)));
    }

    #[tokio::test]
    async fn order_is_configuration_order_not_completion_order() {
        let aggregator = JobAggregator::new(vec![
            delayed_source(vec![job("slow-1"), job("slow-2")], Duration::from_millis(50)),
            static_source(vec![job("fast")]),
        ]);

        assert_eq!(
            aggregator.get_jobs().await.unwrap(),
            vec![job("slow-1"), job("slow-2"), job("fast")]
        );
    }

    #[tokio::test]
    async fn no_sources_means_no_jobs() {
        let aggregator = JobAggregator::new(vec![]);
        assert!(aggregator.get_jobs().await.unwrap().is_empty());
        assert!(aggregator.source_names().is_empty());
    }
}
