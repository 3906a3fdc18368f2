//! Service wiring and the operations behind each route.
//!
//! Everything is built once at process start and shared behind an `Arc`;
//! nothing here is global.

use std::sync::Arc;

use thiserror::Error;

use jobboard_core::{DomainError, Job, JobAlert, JobFilters};
use jobboard_infra::{
    AlertMatchError, AppConfig, ExternalJobClient, ExternalSourceError, InMemoryJobAlertRepository,
    InMemoryJobRepository, InMemoryStorage, JobAggregator, JobAlertMatcher, JobAlertRepository,
    JobRepository, JobSource, LogNotifier, Notifier, RepositoryError, SourceError,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    AlertMatch(#[from] AlertMatchError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    External(#[from] ExternalSourceError),
}

/// Outcome of a job submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    pub job: Job,
    /// Alerts that matched and were handed to the notifier.
    pub alerts_notified: usize,
}

pub struct AppServices {
    jobs: Arc<InMemoryJobRepository>,
    alerts: Arc<InMemoryJobAlertRepository>,
    external: Arc<ExternalJobClient>,
    aggregator: JobAggregator,
    matcher: JobAlertMatcher<Arc<InMemoryJobAlertRepository>>,
    notifier: Arc<dyn Notifier>,
}

pub fn build_services(config: &AppConfig) -> Result<AppServices, ExternalSourceError> {
    build_services_with_notifier(config, Arc::new(LogNotifier::new()))
}

pub fn build_services_with_notifier(
    config: &AppConfig,
    notifier: Arc<dyn Notifier>,
) -> Result<AppServices, ExternalSourceError> {
    let jobs = Arc::new(InMemoryJobRepository::new(InMemoryStorage::new()));
    let alerts = Arc::new(InMemoryJobAlertRepository::new(InMemoryStorage::new()));
    let external = Arc::new(ExternalJobClient::new(&config.external)?);

    // External listings first, then locally submitted ones.
    let aggregator = JobAggregator::new(vec![
        external.clone() as Arc<dyn JobSource>,
        jobs.clone() as Arc<dyn JobSource>,
    ]);
    let matcher = JobAlertMatcher::new(alerts.clone());

    tracing::info!(
        sources = ?aggregator.source_names(),
        notifier = notifier.channel_name(),
        "services built"
    );

    Ok(AppServices {
        jobs,
        alerts,
        external,
        aggregator,
        matcher,
        notifier,
    })
}

impl AppServices {
    /// Store a job, then notify every alert whose pattern matches it.
    ///
    /// Alerts are matched before the job is stored, so a matching failure
    /// leaves nothing behind. Notification failures are logged and do not
    /// undo the submission.
    pub async fn submit_job(&self, job: Job) -> Result<SubmittedJob, ServiceError> {
        let to_notify = self.matcher.get_alerts_to_notify(&job)?;

        JobRepository::add(&*self.jobs, &job)?;
        tracing::info!(job = %job.name, "job added");

        for alert in &to_notify {
            if let Err(err) = self.notifier.notify(&alert.email, &job).await {
                tracing::warn!(
                    email = %alert.email,
                    channel = self.notifier.channel_name(),
                    error = %err,
                    "job alert notification failed"
                );
            }
        }

        Ok(SubmittedJob {
            alerts_notified: to_notify.len(),
            job,
        })
    }

    pub fn list_jobs(&self) -> Result<Vec<Job>, ServiceError> {
        Ok(JobRepository::get_jobs(&*self.jobs)?)
    }

    /// Jobs from every source; an unavailable source only shrinks the result.
    pub async fn list_aggregated_jobs(&self) -> Result<Vec<Job>, ServiceError> {
        Ok(self.aggregator.get_jobs().await?)
    }

    /// Query the external source directly; here an outage is the caller's problem.
    pub async fn search_external_jobs(&self, filters: JobFilters) -> Result<Vec<Job>, ServiceError> {
        filters.validate()?;
        let filters = (!filters.is_empty()).then_some(filters);
        Ok(self.external.get_jobs(filters.as_ref()).await?)
    }

    pub fn submit_alert(&self, alert: JobAlert) -> Result<JobAlert, ServiceError> {
        JobAlertRepository::add(&*self.alerts, &alert)?;
        tracing::info!(email = %alert.email, pattern = %alert.regex_name, "job alert registered");
        Ok(alert)
    }

    pub fn list_alerts(&self) -> Result<Vec<JobAlert>, ServiceError> {
        Ok(self.alerts.get_job_alerts()?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use jobboard_infra::NotifyError;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, email: &str, job: &Job) -> Result<(), NotifyError> {
            self.sent
                .lock()
                .unwrap()
                .push((email.to_string(), job.name.clone()));
            if self.fail {
                return Err(NotifyError::Delivery("smtp down".to_string()));
            }
            Ok(())
        }

        fn channel_name(&self) -> &str {
            "recording"
        }
    }

    fn services_with(notifier: Arc<RecordingNotifier>) -> AppServices {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        build_services_with_notifier(&config, notifier).unwrap()
    }

    fn sr_python() -> Job {
        Job::new("sr python", "Arg", 10, vec!["python".to_string()]).unwrap()
    }

    #[tokio::test]
    async fn submitted_job_is_listed() {
        let services = services_with(Arc::new(RecordingNotifier::default()));
        services.submit_job(sr_python()).await.unwrap();

        assert_eq!(services.list_jobs().unwrap(), vec![sr_python()]);
    }

    #[tokio::test]
    async fn submission_notifies_matching_alerts_only() {
        let notifier = Arc::new(RecordingNotifier::default());
        let services = services_with(notifier.clone());
        services
            .submit_alert(JobAlert::new("sr@example.com", "^sr").unwrap())
            .unwrap();
        services
            .submit_alert(JobAlert::new("ssr@example.com", "^ssr").unwrap())
            .unwrap();

        let submitted = services.submit_job(sr_python()).await.unwrap();

        assert_eq!(submitted.alerts_notified, 1);
        assert_eq!(
            *notifier.sent.lock().unwrap(),
            vec![("sr@example.com".to_string(), "sr python".to_string())]
        );
    }

    #[tokio::test]
    async fn notifier_failure_keeps_the_job() {
        let notifier = Arc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let services = services_with(notifier.clone());
        services
            .submit_alert(JobAlert::new("sr@example.com", "sr").unwrap())
            .unwrap();

        let submitted = services.submit_job(sr_python()).await.unwrap();

        assert_eq!(submitted.alerts_notified, 1);
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
        assert_eq!(services.list_jobs().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn matching_failure_stores_nothing() {
        let services = services_with(Arc::new(RecordingNotifier::default()));
        let unusable = JobAlert {
            email: "a@example.com".to_string(),
            regex_name: "sr(".to_string(),
        };
        JobAlertRepository::add(&*services.alerts, &unusable).unwrap();

        let err = services.submit_job(sr_python()).await.unwrap_err();

        assert!(matches!(err, ServiceError::AlertMatch(AlertMatchError::Pattern(_))));
        assert!(services.list_jobs().unwrap().is_empty());
    }

    #[tokio::test]
    async fn inverted_salary_range_is_rejected_before_any_request() {
        let services = services_with(Arc::new(RecordingNotifier::default()));
        let filters = JobFilters {
            salary_min: Some(10),
            salary_max: Some(1),
            ..Default::default()
        };

        let err = services.search_external_jobs(filters).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn alerts_are_listed_in_registration_order() {
        let services = services_with(Arc::new(RecordingNotifier::default()));
        let a = JobAlert::new("a@example.com", "^jr").unwrap();
        let b = JobAlert::new("b@example.com", "^sr").unwrap();
        services.submit_alert(a.clone()).unwrap();
        services.submit_alert(b.clone()).unwrap();

        assert_eq!(services.list_alerts().unwrap(), vec![a, b]);
    }
}
