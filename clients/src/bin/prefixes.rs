//! `semantica-prefixes`: Inspects the namespace registry.
//!
//! **Usage:**
//! ```text
//! semantica-prefixes                      # list slug, namespace, label
//! semantica-prefixes expand schema:name
//! semantica-prefixes shorten http://schema.org/name
//! semantica-prefixes index-name http://semantica.globo.com/ [--config semantica.toml]
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
use clap::{Parser, Subcommand};
use semantica_clients::{init_logging, load_settings};
use semantica_vocab::{PrefixRegistry, UriMode};

/// Inspect the namespace registry.
#[derive(Parser)]
#[command(name = "semantica-prefixes", about = "Inspect the Semantica namespace registry")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log to stderr (honours RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered slug, namespace and label.
    List,
    /// Expand a compact URI.
    Expand {
        /// `slug:local` value.
        value: String,
    },
    /// Shorten a full URI.
    Shorten {
        /// Full URI.
        value: String,
    },
    /// Print the search index name of a graph.
    IndexName {
        /// Graph URI.
        graph_uri: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let registry = PrefixRegistry::global();

    match args.command.unwrap_or(Command::List) {
        Command::List => {
            for ns in registry.namespaces() {
                println!("{:<14} {:<48} {}", ns.slug, ns.iri, ns.label);
            }
        }
        Command::Expand { value } => {
            let uri = registry
                .normalize_uri(&value, UriMode::Expand)
                .with_context(|| format!("Failed to expand {value}"))?;
            println!("{uri}");
        }
        Command::Shorten { value } => {
            println!("{}", registry.shorten(&value));
        }
        Command::IndexName { graph_uri } => {
            let settings = load_settings(args.config.as_deref())?;
            println!(
                "{}",
                registry.search_index_name(&settings.index_prefix, &graph_uri)
            );
        }
    }
    Ok(())
}
