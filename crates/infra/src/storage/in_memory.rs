use std::sync::RwLock;

use super::{Record, Storage, StorageError};

/// In-memory record storage.
///
/// A single lock guards the collection so concurrent requests cannot
/// interleave partial writes. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    records: RwLock<Vec<Record>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn add(&self, record: Record) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(|_| StorageError::Poisoned)?;
        records.push(record);
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Record>, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::Poisoned)?;
        Ok(records.clone())
    }

    fn clean(&self) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(|_| StorageError::Poisoned)?;
        records.clear();
        Ok(())
    }
}
