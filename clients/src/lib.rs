//! Shared plumbing for the Semantica command-line clients.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use semantica_instance::Settings;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// With `verbose`, `RUST_LOG` is honoured (default `info`). Otherwise
/// logging is off so stdout stays machine-readable.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        EnvFilter::new("off")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads settings from `path`, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

/// Reads `path`, or stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parses `text` as a JSON value, naming `what` in the error.
///
/// # Errors
///
/// Returns an error if `text` is not valid JSON.
pub fn parse_json(text: &str, what: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).with_context(|| format!("Failed to parse {what} as JSON"))
}
