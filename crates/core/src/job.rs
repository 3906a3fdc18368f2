//! Job postings.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A job posting.
///
/// Jobs are immutable once stored; equality is attribute equality since a
/// posting carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub country: String,
    pub salary: u64,
    pub skills: Vec<String>,
}

impl Job {
    /// Build a validated job posting.
    ///
    /// The name is what alert patterns are matched against, so a blank name
    /// is rejected.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        salary: u64,
        skills: Vec<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("job name must not be empty"));
        }

        Ok(Self {
            name,
            country: country.into(),
            salary,
            skills,
        })
    }
}
