use std::path::Path;

use serde::Deserialize;

use crate::error::IngestResult;

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `INGEST__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub adapters: AdaptersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which webhook adapters are registered at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AdaptersConfig {
    #[serde(default = "default_enabled_adapters")]
    pub enabled: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

fn default_node_id() -> String {
    "ingest-01".to_string()
}
fn default_enabled_adapters() -> Vec<String> {
    vec!["com.marketo".to_string()]
}

impl Default for AdaptersConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_adapters(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            adapters: AdaptersConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, with environment
    /// variables taking precedence.
    pub fn load_from(file: Option<&Path>) -> IngestResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }
        let builder = builder.add_source(
            config::Environment::with_prefix("INGEST")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("adapters.enabled"),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
