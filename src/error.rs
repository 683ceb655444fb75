//! Failure taxonomy for a verification run
//!
//! Every way a run can fail ends up as a [`VerifyError`]. Its `Display` text is
//! the diagnostic printed after `FAIL: `, so each variant renders a complete,
//! human-readable reason naming the field and the observed vs. expected values.

use std::path::{Path, PathBuf};

/// Coarse classification of a failure, independent of its message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingFixture,
    InvalidFixture,
    MissingOutput,
    EmptyOutput,
    FormatMismatch,
    CountMismatch,
    KeySetMismatch,
    OrderMismatch,
    ValueMismatch,
    ContentHeuristicFailure,
}

/// A terminal failure of a single verification run
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyError {
    #[error("{what} '{}' does not exist", .path.display())]
    MissingFixture { what: String, path: PathBuf },

    #[error("{what} '{}' {reason}", .path.display())]
    InvalidFixture {
        what: String,
        path: PathBuf,
        reason: String,
    },

    #[error("'{}' does not exist", .0.display())]
    MissingOutput(PathBuf),

    #[error("'{}' is empty", .0.display())]
    EmptyOutput(PathBuf),

    #[error("{}", format_mismatch(.line, .expected, .found))]
    FormatMismatch {
        /// 1-based line number, `None` for document-level mismatches
        line: Option<usize>,
        expected: String,
        found: String,
    },

    #[error("Expected {expected} {what}, found {actual}")]
    CountMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("{what} keys mismatch - missing: {}, extra: {}", list(.missing), list(.extra))]
    KeySetMismatch {
        what: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("{what} must be in {expected} order, got {}", list(.actual))]
    OrderMismatch {
        what: String,
        expected: String,
        actual: Vec<String>,
    },

    #[error("{field}: expected {expected}, got {actual}")]
    ValueMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("{0}")]
    ContentHeuristicFailure(String),
}

impl VerifyError {
    pub fn missing_fixture(what: impl Into<String>, path: &Path) -> Self {
        Self::MissingFixture {
            what: what.into(),
            path: path.to_path_buf(),
        }
    }

    pub fn invalid_fixture(what: impl Into<String>, path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidFixture {
            what: what.into(),
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn format_at(line: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::FormatMismatch {
            line: Some(line),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn format_doc(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::FormatMismatch {
            line: None,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn count(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::CountMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    pub fn value(
        field: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::ValueMismatch {
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn heuristic(reason: impl Into<String>) -> Self {
        Self::ContentHeuristicFailure(reason.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingFixture { .. } => FailureKind::MissingFixture,
            Self::InvalidFixture { .. } => FailureKind::InvalidFixture,
            Self::MissingOutput(_) => FailureKind::MissingOutput,
            Self::EmptyOutput(_) => FailureKind::EmptyOutput,
            Self::FormatMismatch { .. } => FailureKind::FormatMismatch,
            Self::CountMismatch { .. } => FailureKind::CountMismatch,
            Self::KeySetMismatch { .. } => FailureKind::KeySetMismatch,
            Self::OrderMismatch { .. } => FailureKind::OrderMismatch,
            Self::ValueMismatch { .. } => FailureKind::ValueMismatch,
            Self::ContentHeuristicFailure(_) => FailureKind::ContentHeuristicFailure,
        }
    }
}

fn format_mismatch(line: &Option<usize>, expected: &str, found: &str) -> String {
    match line {
        Some(n) => format!("Line {n} does not match {expected}: '{found}'"),
        None => format!("Document does not match {expected}: {found}"),
    }
}

fn list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
    format!("[{}]", quoted.join(", "))
}
