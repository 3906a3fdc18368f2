//! Job alert subscriptions.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A subscription pairing a notification target with a job-name pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAlert {
    pub email: String,
    pub regex_name: String,
}

impl JobAlert {
    /// Build a validated alert.
    pub fn new(email: impl Into<String>, regex_name: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        let regex_name = regex_name.into();

        validate_email(&email)?;
        let alert = Self { email, regex_name };
        alert.pattern()?;

        Ok(alert)
    }

    /// Compile the alert pattern, anchored at the start of the job name.
    ///
    /// The match must begin at position 0 but need not consume the whole
    /// name: `^sr` and `sr` both match "sr python"; `python` does not.
    pub fn pattern(&self) -> DomainResult<Regex> {
        // Compile on its own first so a pattern cannot close the anchoring
        // group below (e.g. `a)|(b`).
        Regex::new(&self.regex_name)
            .map_err(|e| DomainError::invalid_pattern(&self.regex_name, e.to_string()))?;

        Regex::new(&format!(r"\A(?:{})", self.regex_name))
            .map_err(|e| DomainError::invalid_pattern(&self.regex_name, e.to_string()))
    }

    /// Whether this alert fires for a job with the given name.
    pub fn matches(&self, job_name: &str) -> DomainResult<bool> {
        Ok(self.pattern()?.is_match(job_name))
    }
}

fn validate_email(email: &str) -> DomainResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(DomainError::validation("email must not be empty"));
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::validation(format!("invalid email address: {email}"))),
    }
}
