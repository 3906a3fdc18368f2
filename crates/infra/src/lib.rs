//! Infrastructure layer: storage, repositories, job sources, notification.

pub mod aggregator;
pub mod alerts;
pub mod config;
pub mod external;
pub mod notify;
pub mod repository;
pub mod source;
pub mod storage;

pub use aggregator::JobAggregator;
pub use alerts::{AlertMatchError, JobAlertMatcher};
pub use config::{AppConfig, ConfigError, ExternalSourceConfig};
pub use external::{ExternalJobClient, ExternalSourceError};
pub use notify::{LogNotifier, Notifier, NotifyError};
pub use repository::{
    InMemoryJobAlertRepository, InMemoryJobRepository, JobAlertRepository, JobRepository,
    RepositoryError,
};
pub use source::{JobSource, SourceError};
pub use storage::{ConversionError, InMemoryStorage, Record, Storage, StorageError};
