//! Webhook adapters — convert third-party webhook payloads into
//! vendor-neutral raw events.
//!
//! # Modules
//!
//! - [`adaptors`] — the [`WebhookAdaptor`] trait and per-vendor implementations
//! - [`registry`] — routes a collector payload to the adaptor for its API

pub mod adaptors;
pub mod registry;

pub use adaptors::marketo::MarketoAdaptor;
pub use adaptors::WebhookAdaptor;
pub use registry::AdaptorRegistry;
