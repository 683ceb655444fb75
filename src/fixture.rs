//! Fixture and output loading
//!
//! Files are opened, read in full and closed before any comparison runs.
//! Missing fixtures and missing or empty outputs are reported as their own
//! failure kinds; nothing here retries.

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::VerifyError;

/// Read a text fixture in full
///
/// `shown` is the workspace-relative path used in diagnostics; `path` is the
/// resolved location that is actually read.
pub fn read_fixture(what: &str, shown: &Path, path: &Path) -> Result<String, VerifyError> {
    if !path.is_file() {
        return Err(VerifyError::missing_fixture(what, shown));
    }
    let bytes = fs::read(path)
        .map_err(|e| VerifyError::invalid_fixture(what, shown, format!("cannot be read: {e}")))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(fixture = %shown.display(), bytes = bytes.len(), "fixture loaded");
    Ok(content)
}

/// Read a candidate output document and trim it
///
/// Fails with `MissingOutput` when absent and `EmptyOutput` when it holds
/// nothing but whitespace.
pub fn read_output(shown: &Path, path: &Path) -> Result<String, VerifyError> {
    if !path.exists() {
        return Err(VerifyError::MissingOutput(shown.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| {
        VerifyError::format_doc("a readable file", format!("'{}': {e}", shown.display()))
    })?;
    let text = String::from_utf8(bytes).map_err(|_| {
        VerifyError::format_doc("UTF-8 text", format!("'{}' is not valid UTF-8", shown.display()))
    })?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(VerifyError::EmptyOutput(shown.to_path_buf()));
    }
    tracing::debug!(output = %shown.display(), chars = trimmed.len(), "output loaded");
    Ok(trimmed.to_string())
}

/// Regular files directly inside `dir`, sorted by file name
///
/// Subdirectories and other non-file entries are skipped.
pub fn list_regular_files(dir: &Path) -> std::io::Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// A file found by [`enumerate_files`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the walk root, `/`-separated
    pub path: String,
    pub size: u64,
}

/// Recursively collect files whose name matches `pattern`
///
/// Entries whose first path component is listed in `excluded_roots` are pruned
/// before descending. Symlinked files are listed with their target's size;
/// symlinked directories are not descended into. The result is sorted by
/// relative path.
pub fn enumerate_files(
    root: &Path,
    pattern: &Pattern,
    excluded_roots: &[String],
) -> std::io::Result<Vec<FileEntry>> {
    let walker = WalkDir::new(root).min_depth(1).into_iter().filter_entry(|e| {
        !(e.depth() == 1
            && e.file_type().is_dir()
            && excluded_roots
                .iter()
                .any(|name| e.file_name().to_string_lossy() == name.as_str()))
    });

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(std::io::Error::other)?;
        // symlinks count when they point at a regular file
        if !entry.path().is_file() {
            continue;
        }
        if !pattern.matches(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let size = fs::metadata(entry.path())?.len();
        found.push(FileEntry { path: rel, size });
    }

    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

/// Platform identifier of the executing host
///
/// Uses the `uname`-style names the task outputs are expected to mention.
pub fn host_platform() -> String {
    match std::env::consts::OS {
        "macos" => "darwin".to_string(),
        other => other.to_string(),
    }
}
