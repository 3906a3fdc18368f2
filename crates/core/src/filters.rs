//! Query constraints for external job sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Optional constraints narrowing an external job query.
///
/// Each field is independent. An absent field means "no constraint" and is
/// left out of the outgoing request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl JobFilters {
    pub fn is_empty(&self) -> bool {
        self.sanitize().is_empty()
    }

    /// Query parameters for the present fields only.
    pub fn sanitize(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        if let Some(name) = &self.name {
            params.insert("name", name.clone());
        }
        if let Some(salary_min) = self.salary_min {
            params.insert("salary_min", salary_min.to_string());
        }
        if let Some(salary_max) = self.salary_max {
            params.insert("salary_max", salary_max.to_string());
        }
        if let Some(country) = &self.country {
            params.insert("country", country.clone());
        }
        params
    }

    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(DomainError::validation(format!(
                    "salary_min ({min}) must not exceed salary_max ({max})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_absent_fields() {
        let filters = JobFilters {
            name: Some("x".to_string()),
            salary_max: None,
            ..Default::default()
        };

        let params = filters.sanitize();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name").map(String::as_str), Some("x"));
        assert!(!params.contains_key("salary_max"));
    }

    #[test]
    fn sanitize_keeps_every_present_field() {
        let filters = JobFilters {
            name: Some("dev".to_string()),
            salary_min: Some(1000),
            salary_max: Some(2000),
            country: Some("Argentina".to_string()),
        };

        let params = filters.sanitize();
        assert_eq!(params.len(), 4);
        assert_eq!(params["salary_min"], "1000");
        assert_eq!(params["salary_max"], "2000");
        assert_eq!(params["country"], "Argentina");
    }

    #[test]
    fn empty_filters_sanitize_to_nothing() {
        let filters = JobFilters::default();
        assert!(filters.is_empty());
        assert!(filters.sanitize().is_empty());
    }

    #[test]
    fn serialization_never_emits_nulls() {
        let filters = JobFilters {
            country: Some("Arg".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({ "country": "Arg" }));
    }

    #[test]
    fn validate_rejects_inverted_salary_range() {
        let filters = JobFilters {
            salary_min: Some(5000),
            salary_max: Some(1000),
            ..Default::default()
        };
        assert!(matches!(filters.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_accepts_open_ranges() {
        let filters = JobFilters {
            salary_min: Some(5000),
            ..Default::default()
        };
        assert!(filters.validate().is_ok());
    }
}
