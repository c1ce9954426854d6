//! Conventions shared by every adapter: how an event body becomes raw event
//! parameters, and how per-event results fold into one payload-level result.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::error::AdapterError;
use crate::schema::SchemaKey;
use crate::types::{NameValuePair, RawEvent};
use crate::validated::{invalid, NonEmptyVec, Validated};

/// Schema of the envelope wrapping every self-describing event body.
pub const UNSTRUCT_EVENT_SCHEMA: &str =
    "iglu:com.snowplowanalytics.snowplow/unstruct_event/jsonschema/1-0-0";

/// Build the parameter map for a self-describing (unstructured) event.
///
/// `tv`, `e`, `p` and `ue_pr` are set first; querystring pairs are applied
/// on top, so a pair with the same name wins.
pub fn to_unstruct_event_params(
    tracker: &str,
    querystring: &[NameValuePair],
    schema: &SchemaKey,
    event_json: &Value,
    platform: &str,
) -> BTreeMap<String, String> {
    let ue_pr = json!({
        "schema": UNSTRUCT_EVENT_SCHEMA,
        "data": {
            "schema": schema.to_schema_uri(),
            "data": event_json,
        }
    });

    let mut params = BTreeMap::from([
        ("tv".to_string(), tracker.to_string()),
        ("e".to_string(), "ue".to_string()),
        ("p".to_string(), platform.to_string()),
        ("ue_pr".to_string(), ue_pr.to_string()),
    ]);
    params.extend(
        querystring
            .iter()
            .map(|pair| (pair.name.clone(), pair.value.clone())),
    );
    params
}

/// Fold per-event results into one result for the whole payload.
///
/// Every success is kept when nothing failed; otherwise all failure messages
/// are concatenated in order and the successes are discarded.
pub fn raw_events_list_processor(
    results: Vec<Validated<RawEvent>>,
) -> Validated<NonEmptyVec<RawEvent>> {
    let mut successes = Vec::new();
    let mut failures: Option<NonEmptyVec<String>> = None;

    for result in results {
        match result {
            Ok(event) => successes.push(event),
            Err(errors) => match failures.as_mut() {
                Some(acc) => acc.append(errors),
                None => failures = Some(errors),
            },
        }
    }

    if let Some(failures) = failures {
        return Err(failures);
    }
    match NonEmptyVec::from_vec(successes) {
        Some(events) => Ok(events),
        None => invalid(AdapterError::EmptyEventList),
    }
}
