//! Adaptors for translating vendor webhook payloads into raw events.
//!
//! Each adaptor implements [`WebhookAdaptor`] to turn a [`CollectorPayload`]
//! addressed to its vendor into one or more [`RawEvent`]s.

pub mod marketo;

use ingest_core::{CollectorPayload, NonEmptyVec, RawEvent, Validated};

/// Adaptor trait — transforms a collector payload into raw events.
pub trait WebhookAdaptor: Send + Sync {
    /// Vendor identifier as it appears in the collector path (e.g. "com.marketo").
    fn vendor(&self) -> &str;

    /// Webhook API version handled (e.g. "v1").
    fn version(&self) -> &str;

    /// Convert the payload into raw events, or every reason it could not be.
    fn to_raw_events(&self, payload: &CollectorPayload) -> Validated<NonEmptyVec<RawEvent>>;
}
