//! `jobboard-core`: job board domain types.
//!
//! This crate contains **pure domain** values (no storage, no transport).

pub mod alert;
pub mod error;
pub mod filters;
pub mod job;

pub use alert::JobAlert;
pub use error::{DomainError, DomainResult};
pub use filters::JobFilters;
pub use job::Job;
