//! Check results and their aggregation.

use std::fmt;

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Suspicious but not a violation.
    Warning,
    /// The document violates a rule.
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        })
    }
}

/// A single check result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Check identifier, e.g. `document/context`.
    pub check: String,
    /// Document the check ran against, when known.
    pub document: Option<String>,
    /// What was found.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Offending keys or values.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(check: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            check: check.into(),
            document: None,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Pass)
    }

    /// A failing result.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Failure)
    }

    /// A failing result listing the offending items.
    pub fn fail_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(check, message)
        }
    }

    /// A warning.
    pub fn warn(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Warning)
    }

    /// Tags the result with the document it came from.
    #[must_use]
    pub fn in_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Returns true for [`Severity::Failure`].
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.check)?;
        if let Some(document) = &self.document {
            write!(f, " ({document})")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Results of every check run.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in the order the checks ran.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Moves every result of `other` into this report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Number of passing checks.
    pub fn pass_count(&self) -> usize {
        self.count(Severity::Pass)
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// The failed checks.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Returns true when nothing failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("b", "hm"));
        report.push(TestResult::fail("c", "bad"));
        assert_eq!(report.pass_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn display_includes_document() {
        let result = TestResult::fail("document/type", "mismatch").in_document("rio.json");
        assert_eq!(result.to_string(), "[FAIL] document/type (rio.json): mismatch");
    }
}
