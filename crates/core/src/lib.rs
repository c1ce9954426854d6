//! Shared building blocks for webhook adapters: the collector envelope and
//! raw event types, schema keys, the parameter and list-processing
//! conventions every adapter follows, and date normalization helpers.

pub mod config;
pub mod dates;
pub mod error;
pub mod params;
pub mod schema;
pub mod types;
pub mod validated;

pub use config::AppConfig;
pub use error::{AdapterError, IngestError, IngestResult};
pub use types::{CollectorApi, CollectorContext, CollectorPayload, CollectorSource, NameValuePair, RawEvent};
pub use validated::{NonEmptyVec, Validated};
