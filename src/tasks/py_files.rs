//! Workspace source file listing
//!
//! Output: one `<path>: <n> bytes` line per matching file, sorted by path.
//! The expected listing is a fresh walk of the workspace.

use glob::Pattern;

use crate::compare::{expect_count, expect_eq};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::fixture::{enumerate_files, FileEntry};
use crate::grammar::{Grammar, LinePattern, ParsedLine};
use crate::report::Pass;

use super::{read_task_output, TaskId};

pub fn grammar() -> Grammar {
    Grammar::Uniform(LinePattern::PathSize)
}

pub fn render(entries: &[FileEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {} bytes\n", e.path, e.size))
        .collect()
}

/// Listing extracted from a conforming document, paths normalised to `/`
pub fn parse_entries(text: &str) -> Result<Vec<FileEntry>, VerifyError> {
    let lines = grammar().parse(text)?.into_lines();
    Ok(lines
        .iter()
        .filter_map(|line| match line {
            ParsedLine::Measured { key, amount, .. } => Some(FileEntry {
                path: key.replace('\\', "/"),
                size: *amount,
            }),
            _ => None,
        })
        .collect())
}

/// Walk the workspace with the configured filter
pub fn expected_listing(config: &GraderConfig) -> Result<Vec<FileEntry>, VerifyError> {
    let filter = &config.enumeration;
    let workspace = config.workspace.as_path();
    let pattern = Pattern::new(&filter.pattern).map_err(|e| {
        VerifyError::invalid_fixture(
            "Enumeration pattern",
            std::path::Path::new(&filter.pattern),
            format!("is not a valid glob: {e}"),
        )
    })?;
    enumerate_files(workspace, &pattern, &filter.excluded_roots).map_err(|e| {
        VerifyError::invalid_fixture("Workspace", workspace, format!("cannot be walked: {e}"))
    })
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::PyFiles, config)?;
    let parsed = parse_entries(&text)?;

    let expected = expected_listing(config)?;
    tracing::debug!(files = expected.len(), "expected record derived");

    let pattern = &config.enumeration.pattern;
    expect_count(&format!("files matching '{pattern}'"), expected.len(), parsed.len())?;

    for (i, (want, got)) in expected.iter().zip(&parsed).enumerate() {
        expect_eq(&format!("Line {} path", i + 1), want.path.as_str(), got.path.as_str())?;
        expect_eq(&format!("'{}' size", want.path), want.size, got.size)?;
    }

    Ok(Pass::new(format!(
        "All {} files matching '{pattern}' listed with correct sizes",
        expected.len()
    )))
}
