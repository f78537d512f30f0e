//! `semantica-conformance`: Validates a directory of emitted instance
//! documents.
//!
//! **Usage:**
//! ```text
//! semantica-conformance [--documents <path>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use semantica_clients::init_logging;
use semantica_conformance::{run_directory, Severity};

/// Validate instance documents.
#[derive(Parser)]
#[command(
    name = "semantica-conformance",
    about = "Validate emitted instance documents against the representation rules"
)]
struct Args {
    /// Directory of `*.json` documents (searched recursively).
    #[arg(long, default_value = "documents")]
    documents: PathBuf,

    /// Only print failures and warnings.
    #[arg(short, long)]
    quiet: bool,

    /// Log to stderr (honours RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = run_directory(&args.documents)?;

    println!("Semantica Conformance Report");
    println!("============================");
    println!();

    for result in &report.results {
        if args.quiet && result.severity == Severity::Pass {
            continue;
        }
        println!("{result}");
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.pass_count(),
        report.warning_count(),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
