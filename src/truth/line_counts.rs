//! Non-blank line counts for a directory report

/// Expected report entry for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLineCount {
    pub name: String,
    pub lines: usize,
}

/// Number of lines containing anything besides whitespace
pub fn count_nonblank_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
