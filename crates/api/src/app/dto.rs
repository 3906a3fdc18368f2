use serde::Deserialize;

use jobboard_core::{DomainError, DomainResult, Job, JobAlert};

use crate::app::services::SubmittedJob;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct JobIn {
    pub name: String,
    pub country: String,
    /// Any JSON number, so negative or fractional salaries are reported as
    /// validation errors rather than decode errors.
    pub salary: serde_json::Number,
    pub skills: Vec<String>,
}

impl JobIn {
    pub fn into_job(self) -> DomainResult<Job> {
        let salary = match self.salary.as_u64() {
            Some(salary) => salary,
            None if self.salary.as_i64().is_some() => {
                return Err(DomainError::validation("salary must be non-negative"));
            }
            None => return Err(DomainError::validation("salary must be a whole number")),
        };
        Job::new(self.name, self.country, salary, self.skills)
    }
}

#[derive(Debug, Deserialize)]
pub struct JobAlertIn {
    pub email: String,
    pub regex_name: String,
}

impl JobAlertIn {
    pub fn into_alert(self) -> DomainResult<JobAlert> {
        JobAlert::new(self.email, self.regex_name)
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn job_to_json(job: &Job) -> serde_json::Value {
    serde_json::json!({
        "name": job.name,
        "country": job.country,
        "salary": job.salary,
        "skills": job.skills,
    })
}

pub fn jobs_to_json(jobs: &[Job]) -> serde_json::Value {
    let items = jobs.iter().map(job_to_json).collect::<Vec<_>>();
    serde_json::json!({ "items": items })
}

pub fn submitted_job_to_json(submitted: &SubmittedJob) -> serde_json::Value {
    let mut body = job_to_json(&submitted.job);
    body["alerts_notified"] = serde_json::json!(submitted.alerts_notified);
    body
}

pub fn alert_to_json(alert: &JobAlert) -> serde_json::Value {
    serde_json::json!({
        "email": alert.email,
        "regex_name": alert.regex_name,
    })
}
