//! Alert notification channels.

use async_trait::async_trait;
use jobboard_core::Job;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Delivers "a job matching your alert was posted" messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, email: &str, job: &Job) -> Result<(), NotifyError>;

    /// Human-readable name for this channel (e.g. "log").
    fn channel_name(&self) -> &str;
}

/// Writes each notification to the log instead of sending mail.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, email: &str, job: &Job) -> Result<(), NotifyError> {
        tracing::info!(
            email,
            job = %job.name,
            country = %job.country,
            salary = job.salary,
            "sending job alert email"
        );
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let notifier = LogNotifier::new();
        let job = Job::new("sr python", "Arg", 10, vec![]).unwrap();

        notifier.notify("email1@gmail.com", &job).await.unwrap();
        assert_eq!(notifier.channel_name(), "log");
    }
}
