//! ingest-adapter — converts a collector payload captured from a vendor
//! webhook into raw events.
//!
//! Reads one collector payload JSON document and prints either
//! `{"events": [...]}` or `{"errors": [...]}` on stdout.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ingest_adapters::AdaptorRegistry;
use ingest_core::config::AppConfig;
use ingest_core::{CollectorPayload, IngestResult};
use serde_json::json;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "ingest-adapter")]
#[command(about = "Convert vendor webhook payloads into raw events")]
#[command(version)]
struct Cli {
    /// Collector payload JSON file (reads stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// TOML config file
    #[arg(long, env = "INGEST_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the output (overrides config)
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn read_payload(input: Option<&PathBuf>) -> IngestResult<CollectorPayload> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the result document.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingest_adapter=info,ingest_adapters=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if cli.pretty {
        config.output.pretty = true;
    }

    info!(
        node_id = %config.node_id,
        adapters = ?config.adapters.enabled,
        "Configuration loaded"
    );

    let registry = AdaptorRegistry::from_config(&config.adapters);
    let payload = read_payload(cli.input.as_ref()).context("reading collector payload")?;

    let (document, failed) = match registry.route(&payload) {
        Ok(events) => {
            info!(count = events.len(), vendor = %payload.api.vendor, "payload converted");
            (json!({ "events": events }), false)
        }
        Err(errors) => (json!({ "errors": errors }), true),
    };

    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{rendered}");

    if failed {
        anyhow::bail!("payload rejected");
    }
    Ok(())
}
