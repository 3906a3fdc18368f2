//! Append-only record storage.
//!
//! Storage knows nothing about jobs or alerts: it keeps generic records in
//! insertion order. Repositories own the conversion to and from domain types.

pub mod in_memory;
pub mod record;

use std::sync::Arc;

use thiserror::Error;

pub use in_memory::InMemoryStorage;
pub use record::{ConversionError, FromRecord, Record, ToRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A writer panicked while holding the lock; the collection can no longer be trusted.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Append-only collection of records.
pub trait Storage: Send + Sync {
    fn add(&self, record: Record) -> Result<(), StorageError>;

    /// All records, in insertion order.
    fn get_all(&self) -> Result<Vec<Record>, StorageError>;

    /// Remove every record.
    fn clean(&self) -> Result<(), StorageError>;
}

impl<S> Storage for Arc<S>
where
    S: Storage + ?Sized,
{
    fn add(&self, record: Record) -> Result<(), StorageError> {
        (**self).add(record)
    }

    fn get_all(&self) -> Result<Vec<Record>, StorageError> {
        (**self).get_all()
    }

    fn clean(&self) -> Result<(), StorageError> {
        (**self).clean()
    }
}
