//! Marketo webhook adaptor — converts Marketo lead webhook payloads into
//! self-describing raw events.
//!
//! Marketo's webhook body carries no event-type field, so every payload is
//! tagged with the single `event` schema.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use ingest_core::dates::DateFieldReformatter;
use ingest_core::error::AdapterError;
use ingest_core::params::{raw_events_list_processor, to_unstruct_event_params};
use ingest_core::schema::{lookup_schema, EventSchemaMap, SchemaKey, SchemaVer};
use ingest_core::validated::invalid;
use ingest_core::{CollectorPayload, NonEmptyVec, RawEvent, Validated};

use super::WebhookAdaptor;

pub const VENDOR: &str = "com.marketo";
pub const VERSION: &str = "v1";

const VENDOR_NAME: &str = "Marketo";
const TRACKER_VERSION: &str = "com.marketo-v1";
const PLATFORM: &str = "srv";
const EXPECTED_CONTENT_TYPE: &str = "application/json";

/// Label used for schema lookup in place of a discriminator field.
const EVENT_TYPE: &str = "event";

/// Lead fields Marketo sends as `yyyy-MM-dd HH:mm:ss` in UTC.
pub const DATE_FIELDS: &[&str] = &[
    "acquisition_date",
    "created_at",
    "email_suspended_at",
    "last_assigned_date",
    "last_interesting_moment_date",
    "last_referred_enrollment",
    "last_referred_visit",
    "updated_at",
];

const MARKETO_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Marketo webhook adaptor.
pub struct MarketoAdaptor {
    schemas: EventSchemaMap,
    reformatter: DateFieldReformatter,
}

impl Default for MarketoAdaptor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketoAdaptor {
    pub fn new() -> Self {
        Self::with_schemas(HashMap::from([(
            EVENT_TYPE,
            SchemaKey::new("com.marketo", "event", "jsonschema", SchemaVer::new(2, 0, 0)),
        )]))
    }

    /// Build with a custom event-type → schema map.
    pub fn with_schemas(schemas: EventSchemaMap) -> Self {
        Self {
            schemas,
            reformatter: DateFieldReformatter::new(DATE_FIELDS, MARKETO_DATE_TIME_FORMAT),
        }
    }

    /// Turn one webhook body into a raw event. Each step needs the previous
    /// one's output, so the first failure is the only one reported.
    pub fn payload_body_to_event(&self, body: &str, payload: &CollectorPayload) -> Validated<RawEvent> {
        let parsed: Value = match serde_json::from_str(body) {
            Ok(json) => json,
            Err(e) => {
                return invalid(AdapterError::InvalidJson {
                    vendor: VENDOR_NAME.to_string(),
                    detail: e.to_string(),
                })
            }
        };

        if !parsed.is_object() {
            return invalid(AdapterError::NotJsonObject {
                vendor: VENDOR_NAME.to_string(),
            });
        }

        let event = self.reformatter.reformat(&parsed);
        let schema = lookup_schema(EVENT_TYPE, &self.schemas)?;

        let parameters =
            to_unstruct_event_params(TRACKER_VERSION, &payload.querystring, &schema, &event, PLATFORM);

        debug!(
            vendor = VENDOR,
            schema = %schema,
            parameter_count = parameters.len(),
            "Marketo event transformed"
        );

        Ok(RawEvent {
            api: payload.api.clone(),
            parameters,
            content_type: payload.content_type.clone(),
            source: payload.source.clone(),
            context: payload.context.clone(),
        })
    }
}

impl WebhookAdaptor for MarketoAdaptor {
    fn vendor(&self) -> &str {
        VENDOR
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn to_raw_events(&self, payload: &CollectorPayload) -> Validated<NonEmptyVec<RawEvent>> {
        let Some(body) = payload.body.as_deref() else {
            warn!(vendor = VENDOR, "empty request body");
            return invalid(AdapterError::EmptyBody {
                vendor: VENDOR_NAME.to_string(),
            });
        };

        // Any content type is accepted.
        if payload.content_type.as_deref() != Some(EXPECTED_CONTENT_TYPE) {
            debug!(
                vendor = VENDOR,
                content_type = ?payload.content_type,
                "unexpected content type"
            );
        }

        let result = raw_events_list_processor(vec![self.payload_body_to_event(body, payload)]);
        if let Err(ref errors) = result {
            for error in errors {
                warn!(vendor = VENDOR, error = %error, "Marketo payload rejected");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest_core::{CollectorApi, CollectorContext, CollectorSource, NameValuePair};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn test_payload(body: Option<&str>) -> CollectorPayload {
        CollectorPayload {
            api: CollectorApi::new(VENDOR, VERSION),
            querystring: vec![NameValuePair::new("aid", "marketing-site")],
            content_type: Some("application/json".into()),
            body: body.map(String::from),
            source: CollectorSource {
                name: "clj-tomcat".into(),
                encoding: "UTF-8".into(),
                hostname: None,
            },
            context: CollectorContext::default(),
        }
    }

    fn unstruct_data(event: &RawEvent) -> Value {
        let ue_pr: Value = serde_json::from_str(&event.parameters["ue_pr"]).unwrap();
        ue_pr["data"].clone()
    }

    #[test]
    fn test_date_fields_table() {
        assert_eq!(
            DATE_FIELDS,
            &[
                "acquisition_date",
                "created_at",
                "email_suspended_at",
                "last_assigned_date",
                "last_interesting_moment_date",
                "last_referred_enrollment",
                "last_referred_visit",
                "updated_at",
            ]
        );
    }

    #[test]
    fn test_body_to_event() {
        let adaptor = MarketoAdaptor::new();
        let payload = test_payload(None);
        let event = adaptor
            .payload_body_to_event(r#"{"created_at":"2020-01-01 10:00:00","x":1}"#, &payload)
            .unwrap();

        assert_eq!(event.api, payload.api);
        assert_eq!(event.content_type, payload.content_type);
        assert_eq!(event.source, payload.source);
        assert_eq!(event.parameters["tv"], "com.marketo-v1");
        assert_eq!(event.parameters["e"], "ue");
        assert_eq!(event.parameters["p"], "srv");
        assert_eq!(event.parameters["aid"], "marketing-site");

        let data = unstruct_data(&event);
        assert_eq!(data["schema"], "iglu:com.marketo/event/jsonschema/2-0-0");
        assert_eq!(
            data["data"],
            json!({"created_at": "2020-01-01T10:00:00.000Z", "x": 1})
        );
    }

    #[test]
    fn test_invalid_json() {
        let adaptor = MarketoAdaptor::new();
        let errors = adaptor
            .payload_body_to_event("{not json", &test_payload(None))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors
            .head()
            .starts_with("Marketo event failed to parse into JSON: ["));
        assert!(errors.head().contains("line 1"));
    }

    #[test]
    fn test_non_object_body() {
        let adaptor = MarketoAdaptor::new();
        for body in ["[1,2,3]", "42", "null", "\"text\""] {
            let errors = adaptor
                .payload_body_to_event(body, &test_payload(None))
                .unwrap_err();
            assert_eq!(errors.as_slice(), &["Marketo event is not a json object"]);
        }
    }

    #[test]
    fn test_missing_schema() {
        let adaptor = MarketoAdaptor::with_schemas(EventSchemaMap::new());
        let errors = adaptor
            .payload_body_to_event("{}", &test_payload(None))
            .unwrap_err();
        assert_eq!(errors.as_slice(), &["could not find schema for type event"]);
    }

    #[test]
    fn test_empty_body() {
        let adaptor = MarketoAdaptor::new();
        let errors = adaptor.to_raw_events(&test_payload(None)).unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &["Request body is empty: no Marketo event to process"]
        );
    }

    #[test]
    fn test_content_type_not_enforced() {
        let adaptor = MarketoAdaptor::new();
        let mut payload = test_payload(Some(r#"{"name":"webhook"}"#));
        payload.content_type = Some("text/plain".into());
        let events = adaptor.to_raw_events(&payload).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events.head().content_type.as_deref(), Some("text/plain"));

        payload.content_type = None;
        assert!(adaptor.to_raw_events(&payload).is_ok());
    }

    #[test]
    fn test_to_raw_events_single_event() {
        let adaptor = MarketoAdaptor::new();
        let events = adaptor
            .to_raw_events(&test_payload(Some(r#"{"lead":{"updated_at":"2018-03-07 14:28:16"}}"#)))
            .unwrap();
        assert_eq!(events.len(), 1);
        let data = unstruct_data(events.head());
        assert_eq!(data["data"]["lead"]["updated_at"], "2018-03-07T14:28:16.000Z");
    }
}
