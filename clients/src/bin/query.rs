//! `semantica-query`: Prints the SPARQL query that fetches an instance's
//! bindings.
//!
//! **Usage:**
//! ```text
//! semantica-query --instance-uri <uri> --class-uri <uri> [--lang en] [--config semantica.toml]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use semantica_clients::{init_logging, load_settings};
use semantica_instance::InstanceQuery;

/// Render the instance query.
#[derive(Parser)]
#[command(name = "semantica-query", about = "Render the SPARQL instance query")]
struct Args {
    /// Full URI of the instance.
    #[arg(long)]
    instance_uri: String,

    /// Full URI of the instance's class.
    #[arg(long)]
    class_uri: String,

    /// Language of literals and labels (default: settings `default_lang`).
    #[arg(long)]
    lang: Option<String>,

    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log to stderr (honours RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(args.config.as_deref())?;
    let lang = args.lang.as_deref().unwrap_or(&settings.default_lang);
    let query = InstanceQuery {
        instance_uri: &args.instance_uri,
        class_uri: &args.class_uri,
        lang,
        ruleset_uri: &settings.ruleset_uri,
    };
    let sparql = query.to_sparql().context("Failed to render instance query")?;
    println!("{sparql}");
    Ok(())
}
