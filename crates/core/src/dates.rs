//! Date normalization for vendor payloads: rewrite known date fields into the
//! timestamp format expected by JSON schema `date-time` validation.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use tracing::debug;

/// Output format, e.g. `2020-01-01T10:00:00.000Z`.
pub const JSON_SCHEMA_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse `value` with `input_format` as a UTC wall-clock time and render it
/// with [`JSON_SCHEMA_DATE_TIME_FORMAT`]. `None` when it does not parse.
pub fn to_json_schema_date_time(value: &str, input_format: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(value, input_format)
        .ok()
        .map(|dt| dt.and_utc().format(JSON_SCHEMA_DATE_TIME_FORMAT).to_string())
}

/// Rewrites string values of a fixed set of keys, at any object depth.
///
/// Only nested objects are walked; arrays are passed through untouched even
/// when their elements are objects carrying date keys.
#[derive(Debug, Clone, Copy)]
pub struct DateFieldReformatter {
    fields: &'static [&'static str],
    input_format: &'static str,
}

impl DateFieldReformatter {
    pub const fn new(fields: &'static [&'static str], input_format: &'static str) -> Self {
        Self {
            fields,
            input_format,
        }
    }

    pub fn reformat(&self, json: &Value) -> Value {
        match json {
            Value::Object(obj) => Value::Object(self.reformat_object(obj)),
            other => other.clone(),
        }
    }

    fn reformat_object(&self, obj: &Map<String, Value>) -> Map<String, Value> {
        obj.iter()
            .map(|(key, value)| (key.clone(), self.reformat_entry(key, value)))
            .collect()
    }

    fn reformat_entry(&self, key: &str, value: &Value) -> Value {
        match value {
            Value::String(s) if self.fields.contains(&key) => {
                match to_json_schema_date_time(s, self.input_format) {
                    Some(formatted) => Value::String(formatted),
                    None => {
                        debug!(field = key, "date field left as-is");
                        value.clone()
                    }
                }
            }
            Value::Object(obj) => Value::Object(self.reformat_object(obj)),
            other => other.clone(),
        }
    }
}
