//! `semantica-instance`: Assembles the JSON-LD document of one resource from
//! a SPARQL JSON result.
//!
//! **Usage:**
//! ```text
//! semantica-instance --instance-id Rio \
//!     --instance-uri http://semantica.globo.com/place/Rio \
//!     --class-uri http://semantica.globo.com/place/City [RESULT.json]
//! ```
//!
//! Reads stdin when no file is given. Prints the document as JSON, or exits
//! with status 2 when the result has no rows.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use semantica_clients::{init_logging, read_input};
use semantica_instance::{get_instance, InstanceRequest, QueryResult};
use tracing::info;

/// Assemble an instance document from query bindings.
#[derive(Parser)]
#[command(
    name = "semantica-instance",
    about = "Assemble a compacted JSON-LD instance document from SPARQL JSON results"
)]
struct Args {
    /// SPARQL JSON result file (default: stdin).
    input: Option<PathBuf>,

    /// Short resource identifier, emitted as `_resource_id`.
    #[arg(long)]
    instance_id: String,

    /// Full URI of the instance.
    #[arg(long)]
    instance_uri: String,

    /// Full URI of the instance's class.
    #[arg(long)]
    class_uri: Option<String>,

    /// Print compact JSON instead of pretty JSON.
    #[arg(long)]
    compact: bool,

    /// Log pipeline decisions to stderr (honours RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = read_input(args.input.as_deref())?;
    let result = QueryResult::from_json(&text).context("Failed to decode SPARQL JSON result")?;
    let request = InstanceRequest {
        instance_id: args.instance_id,
        instance_uri: args.instance_uri,
        class_uri: args.class_uri,
    };

    let Some(document) = get_instance(&request, &result).context("Failed to assemble instance")?
    else {
        eprintln!("Instance {} not found", request.instance_uri);
        process::exit(2);
    };
    info!(instance = %request.instance_uri, "instance assembled");

    let json = document.to_json().context("Failed to serialize instance document")?;
    let out = if args.compact {
        serde_json::to_string(&json)
    } else {
        serde_json::to_string_pretty(&json)
    }
    .context("Failed to serialize instance document")?;
    println!("{out}");
    Ok(())
}
