//! Generic records and conversion to/from domain types.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Untyped field-name to value mapping; the unit of storage.
pub type Record = serde_json::Map<String, Value>;

/// A value could not be converted to or from a [`Record`].
///
/// On the read path this means stored data no longer matches its domain
/// type, which is an integrity bug rather than a missing value.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{target} does not serialize to a record (got {found})")]
    NotARecord {
        target: &'static str,
        found: &'static str,
    },

    #[error("record cannot be converted to {target}: {source}")]
    Shape {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub trait ToRecord {
    fn to_record(&self) -> Result<Record, ConversionError>;
}

pub trait FromRecord: Sized {
    fn from_record(record: Record) -> Result<Self, ConversionError>;
}

impl<T: Serialize> ToRecord for T {
    fn to_record(&self) -> Result<Record, ConversionError> {
        let target = std::any::type_name::<T>();
        match serde_json::to_value(self).map_err(|source| ConversionError::Shape { target, source })? {
            Value::Object(map) => Ok(map),
            other => Err(ConversionError::NotARecord {
                target,
                found: value_kind(&other),
            }),
        }
    }
}

impl<T: DeserializeOwned> FromRecord for T {
    fn from_record(record: Record) -> Result<Self, ConversionError> {
        serde_json::from_value(Value::Object(record)).map_err(|source| ConversionError::Shape {
            target: std::any::type_name::<T>(),
            source,
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
