//! Adaptor registry — routes a collector payload to the adaptor registered
//! for its `(vendor, version)`.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use ingest_core::config::AdaptersConfig;
use ingest_core::error::AdapterError;
use ingest_core::validated::invalid;
use ingest_core::{CollectorApi, CollectorPayload, NonEmptyVec, RawEvent, Validated};

use crate::adaptors::marketo::{self, MarketoAdaptor};
use crate::adaptors::WebhookAdaptor;

#[derive(Default)]
pub struct AdaptorRegistry {
    adaptors: HashMap<CollectorApi, Arc<dyn WebhookAdaptor>>,
}

impl AdaptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the vendors named in `config`. Unknown names are skipped.
    pub fn from_config(config: &AdaptersConfig) -> Self {
        let mut registry = Self::new();
        for vendor in &config.enabled {
            match vendor.as_str() {
                marketo::VENDOR => registry.register(Arc::new(MarketoAdaptor::new())),
                other => warn!(vendor = other, "no adaptor for configured vendor"),
            }
        }
        info!(count = registry.len(), "adaptors registered");
        registry
    }

    /// Register an adaptor, replacing any previous one for the same API.
    pub fn register(&mut self, adaptor: Arc<dyn WebhookAdaptor>) {
        let api = CollectorApi::new(adaptor.vendor(), adaptor.version());
        self.adaptors.insert(api, adaptor);
    }

    pub fn get(&self, api: &CollectorApi) -> Option<Arc<dyn WebhookAdaptor>> {
        self.adaptors.get(api).cloned()
    }

    pub fn len(&self) -> usize {
        self.adaptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adaptors.is_empty()
    }

    /// Hand the payload to the adaptor for its API.
    pub fn route(&self, payload: &CollectorPayload) -> Validated<NonEmptyVec<RawEvent>> {
        match self.adaptors.get(&payload.api) {
            Some(adaptor) => adaptor.to_raw_events(payload),
            None => {
                warn!(
                    vendor = %payload.api.vendor,
                    version = %payload.api.version,
                    "unsupported collector API"
                );
                invalid(AdapterError::UnsupportedApi {
                    vendor: payload.api.vendor.clone(),
                    version: payload.api.version.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest_core::{CollectorContext, CollectorSource};

    fn payload(vendor: &str, version: &str) -> CollectorPayload {
        CollectorPayload {
            api: CollectorApi::new(vendor, version),
            querystring: Vec::new(),
            content_type: Some("application/json".into()),
            body: Some(r#"{"name":"lead"}"#.into()),
            source: CollectorSource {
                name: "test".into(),
                encoding: "UTF-8".into(),
                hostname: None,
            },
            context: CollectorContext::default(),
        }
    }

    #[test]
    fn test_from_config_registers_marketo() {
        let registry = AdaptorRegistry::from_config(&AdaptersConfig::default());
        assert_eq!(registry.len(), 1);
        let adaptor = registry.get(&CollectorApi::new("com.marketo", "v1")).unwrap();
        assert_eq!(adaptor.vendor(), "com.marketo");
    }

    #[test]
    fn test_from_config_skips_unknown_vendor() {
        let registry = AdaptorRegistry::from_config(&AdaptersConfig {
            enabled: vec!["com.unknown".into()],
        });
        assert!(registry.is_empty());
    }

    #[test]
    fn test_route_known_api() {
        let registry = AdaptorRegistry::from_config(&AdaptersConfig::default());
        let events = registry.route(&payload("com.marketo", "v1")).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_route_unsupported_version() {
        let registry = AdaptorRegistry::from_config(&AdaptersConfig::default());
        let errors = registry.route(&payload("com.marketo", "v2")).unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &["Payload with vendor com.marketo and version v2 not supported"]
        );
    }
}
