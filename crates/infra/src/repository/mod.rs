//! Domain repositories over generic record storage.

pub mod alerts;
pub mod jobs;

use thiserror::Error;

use crate::storage::{ConversionError, StorageError};

pub use alerts::{InMemoryJobAlertRepository, JobAlertRepository};
pub use jobs::{InMemoryJobRepository, JobRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}
