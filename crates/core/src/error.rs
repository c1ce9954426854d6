use thiserror::Error;

pub type IngestResult<T> = Result<T, IngestError>;

/// Process-level failures: loading configuration, reading input, decoding
/// the collector payload.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-event adapter failures. These are reported as data inside a
/// [`Validated`](crate::validated::Validated) result, rendered through
/// `Display`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Request body is empty: no {vendor} event to process")]
    EmptyBody { vendor: String },

    #[error("{vendor} event failed to parse into JSON: [{detail}]")]
    InvalidJson { vendor: String, detail: String },

    #[error("{vendor} event is not a json object")]
    NotJsonObject { vendor: String },

    #[error("could not find schema for type {event_type}")]
    SchemaNotFound { event_type: String },

    #[error("List of events is empty (should never happen, not catching empty list properly)")]
    EmptyEventList,

    #[error("Payload with vendor {vendor} and version {version} not supported")]
    UnsupportedApi { vendor: String, version: String },
}
