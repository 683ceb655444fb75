//! Directory line-count report
//!
//! The settings fixture names a target directory. Output:
//!
//! ```text
//! target_dir: <configured value>
//! files:
//! <name>: <n> lines
//! ```
//!
//! with one entry per regular file, sorted by name, counting non-blank lines.

use std::path::PathBuf;

use serde_json::Value;

use crate::compare::{expect_count, expect_eq, expect_key_set, expect_sorted};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::fixture::{list_regular_files, read_fixture};
use crate::grammar::{non_blank_lines, Grammar, KeySpec, LinePattern, ParsedLine, ValueKind};
use crate::report::Pass;
use crate::truth::{count_nonblank_lines, FileLineCount};

use super::{read_task_output, TaskId};

const SETTINGS: &str = "Config file";

/// Expected report: configured target plus per-file counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirReport {
    pub target_dir: String,
    pub files: Vec<FileLineCount>,
}

impl DirReport {
    pub fn render(&self) -> String {
        let mut out = format!("target_dir: {}\nfiles:\n", self.target_dir);
        for file in &self.files {
            out.push_str(&format!("{}: {} lines\n", file.name, file.lines));
        }
        out
    }
}

fn target_line() -> LinePattern {
    LinePattern::key_value(KeySpec::Literal("target_dir".to_string()), ValueKind::Text)
}

fn entry_line() -> LinePattern {
    LinePattern::key_value_unit("lines")
}

pub fn grammar() -> Grammar {
    Grammar::Headed {
        head: vec![target_line(), LinePattern::exact_header("files")],
        body: entry_line(),
    }
}

fn file_line_count(line: &ParsedLine) -> Option<FileLineCount> {
    match line {
        ParsedLine::Measured { key, amount, .. } => Some(FileLineCount {
            name: key.clone(),
            lines: usize::try_from(*amount).unwrap_or(usize::MAX),
        }),
        _ => None,
    }
}

/// Configured `target_dir` from the settings fixture
fn target_dir(config: &GraderConfig) -> Result<String, VerifyError> {
    let path = &config.paths.report_settings;
    let content = read_fixture(SETTINGS, path, &config.resolve(path))?;
    let settings: Value = serde_json::from_str(&content)
        .map_err(|e| VerifyError::invalid_fixture(SETTINGS, path, format!("is not valid JSON: {e}")))?;
    let Value::Object(settings) = settings else {
        return Err(VerifyError::invalid_fixture(SETTINGS, path, "is not a JSON object"));
    };

    match settings.get("target_dir").and_then(Value::as_str) {
        Some(dir) if !dir.trim().is_empty() => Ok(dir.trim().to_string()),
        _ => Err(VerifyError::invalid_fixture(
            SETTINGS,
            path,
            "has no non-empty 'target_dir' string",
        )),
    }
}

/// Load the settings, then count the lines of every file in the target
pub fn expected_report(config: &GraderConfig) -> Result<DirReport, VerifyError> {
    let target = target_dir(config)?;
    let target_path = PathBuf::from(&target);
    let dir = config.resolve(&target_path);
    if !dir.is_dir() {
        return Err(VerifyError::missing_fixture("Target directory", &target_path));
    }

    let listing = list_regular_files(&dir).map_err(|e| {
        VerifyError::invalid_fixture("Target directory", &target_path, format!("cannot be listed: {e}"))
    })?;
    let mut files = Vec::with_capacity(listing.len());
    for (name, path) in listing {
        let shown = target_path.join(&name);
        let content = read_fixture("Target file", &shown, &path)?;
        files.push(FileLineCount {
            name,
            lines: count_nonblank_lines(&content),
        });
    }

    Ok(DirReport {
        target_dir: target,
        files,
    })
}

/// Report extracted from a conforming document
pub fn parse_report(text: &str) -> Result<DirReport, VerifyError> {
    let (head, body) = grammar().parse(text)?.into_headed();
    let target_dir = head.first().map(ParsedLine::text).unwrap_or_default().to_string();
    let files = body.iter().filter_map(file_line_count).collect();
    Ok(DirReport { target_dir, files })
}

fn lines_of(files: &[FileLineCount], name: &str) -> Option<usize> {
    files.iter().find(|f| f.name == name).map(|f| f.lines)
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let expected = expected_report(config)?;
    tracing::debug!(files = expected.files.len(), "expected record derived");

    let text = read_task_output(TaskId::DirReport, config)?;
    let lines = non_blank_lines(&text);
    let line = |i: usize| lines.get(i).copied().unwrap_or("");

    let target = target_line().parse_at(1, line(0))?;
    expect_eq("target_dir", expected.target_dir.as_str(), target.text())?;
    LinePattern::exact_header("files").parse_at(2, line(1))?;

    let entries = lines.get(2..).unwrap_or_default();
    expect_count("file entries", expected.files.len(), entries.len())?;

    let pattern = entry_line();
    let mut files = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let parsed = pattern.parse_at(i + 3, entry)?;
        files.extend(file_line_count(&parsed));
    }

    let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
    expect_sorted("Files", &names)?;
    let expected_names: Vec<String> = expected.files.iter().map(|f| f.name.clone()).collect();
    expect_key_set("File", &expected_names, &names)?;

    for file in &expected.files {
        let found = lines_of(&files, &file.name).unwrap_or_default();
        expect_eq(&format!("'{}' line count", file.name), file.lines, found)?;
    }

    Ok(Pass::new(format!(
        "Report correct - target_dir='{}', {} files reported",
        expected.target_dir,
        expected.files.len()
    )))
}
