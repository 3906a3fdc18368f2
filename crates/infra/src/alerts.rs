//! Decides which alert subscriptions fire for a newly added job.

use std::collections::HashMap;
use std::sync::Mutex;

use jobboard_core::{DomainError, Job, JobAlert};
use regex::Regex;
use thiserror::Error;

use crate::repository::{JobAlertRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum AlertMatchError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A stored alert carries a pattern that no longer compiles.
    #[error(transparent)]
    Pattern(#[from] DomainError),
}

/// Matches jobs against every stored alert.
///
/// Compiled patterns are kept keyed by their source text, so each distinct
/// pattern is compiled once per matcher.
#[derive(Debug)]
pub struct JobAlertMatcher<R> {
    alerts: R,
    compiled: Mutex<HashMap<String, Regex>>,
}

impl<R: JobAlertRepository> JobAlertMatcher<R> {
    pub fn new(alerts: R) -> Self {
        Self {
            alerts,
            compiled: Mutex::new(HashMap::new()),
        }
    }

    /// Alerts whose pattern matches the start of `job.name`, in repository
    /// order. Identical registrations each fire.
    pub fn get_alerts_to_notify(&self, job: &Job) -> Result<Vec<JobAlert>, AlertMatchError> {
        let mut to_notify = Vec::new();
        // A poisoned cache only holds finished compilations.
        let mut compiled = self.compiled.lock().unwrap_or_else(|e| e.into_inner());
        for alert in self.alerts.get_job_alerts()? {
            if !compiled.contains_key(&alert.regex_name) {
                compiled.insert(alert.regex_name.clone(), alert.pattern()?);
            }
            if compiled[&alert.regex_name].is_match(&job.name) {
                to_notify.push(alert);
            }
        }
        drop(compiled);

        tracing::debug!(job = %job.name, matched = to_notify.len(), "alerts matched");
        Ok(to_notify)
    }

    #[cfg(test)]
    fn compiled_count(&self) -> usize {
        self.compiled.lock().unwrap().len()
    }
}
