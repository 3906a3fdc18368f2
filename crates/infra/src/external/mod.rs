//! External service clients/adapters.

pub mod client;

pub use client::{ExternalJobClient, ExternalSourceError};
