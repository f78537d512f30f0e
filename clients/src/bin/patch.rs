//! `semantica-patch`: Applies a JSON Patch to instance data.
//!
//! Instance data is a JSON object keyed by full predicate URI. Patch paths
//! may use compact URIs (`dbpedia:name`).
//!
//! **Usage:**
//! ```text
//! semantica-patch --patch changes.json [DATA.json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use semantica_clients::{init_logging, parse_json, read_input};
use semantica_instance::patch::{apply_patch, parse_patch};
use semantica_vocab::PrefixRegistry;
use tracing::info;

/// Apply a JSON Patch to instance data.
#[derive(Parser)]
#[command(name = "semantica-patch", about = "Apply a JSON Patch to instance data")]
struct Args {
    /// Instance data file (default: stdin).
    data: Option<PathBuf>,

    /// Patch file: a JSON array of operations.
    #[arg(long)]
    patch: PathBuf,

    /// Log to stderr (honours RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let patch_text = std::fs::read_to_string(&args.patch)
        .with_context(|| format!("Failed to read {}", args.patch.display()))?;
    let operations = parse_patch(&parse_json(&patch_text, "patch")?).context("Invalid patch")?;

    let data = parse_json(&read_input(args.data.as_deref())?, "instance data")?;
    let Some(data) = data.as_object() else {
        bail!("Instance data must be a JSON object");
    };

    let patched = apply_patch(PrefixRegistry::global(), data, &operations)
        .context("Failed to apply patch")?;
    info!(operations = operations.len(), "patch applied");

    let out = serde_json::to_string_pretty(&patched).context("Failed to serialize patched data")?;
    println!("{out}");
    Ok(())
}
