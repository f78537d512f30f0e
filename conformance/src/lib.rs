//! Semantica conformance suite.
//!
//! Validates emitted instance documents against the representation rules:
//! identity keys, a `@context` that declares exactly the registered
//! namespaces the document uses, compacted predicate keys, and `rdf:type`
//! mirroring `@type`.
//!
//! # Entry Point
//!
//! ```no_run
//! use semantica_conformance::run_directory;
//! use std::path::Path;
//!
//! let report = run_directory(Path::new("documents"))?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::document::DocumentValidator;

/// Validates a single document value.
///
/// # Errors
///
/// Returns an error only if the validator cannot be built.
pub fn validate_document(name: &str, doc: &serde_json::Value) -> Result<ConformanceReport> {
    Ok(DocumentValidator::global()?.validate(name, doc))
}

/// Validates every `*.json` file under `dir`, recursively.
///
/// Files are visited in name order. A file that is not valid JSON is
/// reported as a failure rather than aborting the run.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked or a file cannot be read.
pub fn run_directory(dir: &Path) -> Result<ConformanceReport> {
    let validator = DocumentValidator::global()?;
    let mut report = ConformanceReport::new();
    let mut documents = 0usize;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |x| x != "json") {
            continue;
        }
        let name = path
            .strip_prefix(dir)
            .unwrap_or(path)
            .display()
            .to_string();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        documents += 1;
        match serde_json::from_str(&content) {
            Ok(doc) => report.extend(validator.validate(&name, &doc)),
            Err(e) => report.push(
                TestResult::fail("document/json", format!("Not valid JSON: {e}")).in_document(name),
            ),
        }
    }

    debug!(dir = %dir.display(), documents, "validated documents");
    if documents == 0 {
        report.push(TestResult::warn(
            "document/discovery",
            format!("No .json documents found under {}", dir.display()),
        ));
    }
    Ok(report)
}
