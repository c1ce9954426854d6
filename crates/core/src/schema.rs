//! Self-describing schema identifiers and the event-type lookup adapters use
//! to tag their output.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// `MODEL-REVISION-ADDITION` schema version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SchemaVer {
    pub model: u32,
    pub revision: u32,
    pub addition: u32,
}

impl SchemaVer {
    pub const fn new(model: u32, revision: u32, addition: u32) -> Self {
        Self {
            model,
            revision,
            addition,
        }
    }
}

impl fmt::Display for SchemaVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.model, self.revision, self.addition)
    }
}

/// Identifies a schema in the registry: vendor, name, format and version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SchemaKey {
    pub vendor: String,
    pub name: String,
    pub format: String,
    pub version: SchemaVer,
}

impl SchemaKey {
    pub fn new(
        vendor: impl Into<String>,
        name: impl Into<String>,
        format: impl Into<String>,
        version: SchemaVer,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            name: name.into(),
            format: format.into(),
            version,
        }
    }

    /// Renders as `iglu:<vendor>/<name>/<format>/<version>`.
    pub fn to_schema_uri(&self) -> String {
        format!(
            "iglu:{}/{}/{}/{}",
            self.vendor, self.name, self.format, self.version
        )
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_schema_uri())
    }
}

/// Maps an event-type label to the schema describing that event.
pub type EventSchemaMap = HashMap<&'static str, SchemaKey>;

pub fn lookup_schema(event_type: &str, schemas: &EventSchemaMap) -> Result<SchemaKey, AdapterError> {
    schemas
        .get(event_type)
        .cloned()
        .ok_or_else(|| AdapterError::SchemaNotFound {
            event_type: event_type.to_string(),
        })
}
