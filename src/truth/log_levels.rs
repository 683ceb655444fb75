//! Log level tallies

use std::fmt;

/// Tags counted in a server log, in their reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// All levels in the order a summary must list them
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == tag)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of lines per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub info: u64,
    pub warn: u64,
    pub error: u64,
}

impl LevelCounts {
    pub fn get(&self, level: LogLevel) -> u64 {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
        }
    }

    fn bump(&mut self, level: LogLevel) {
        match level {
            LogLevel::Info => self.info += 1,
            LogLevel::Warn => self.warn += 1,
            LogLevel::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.info + self.warn + self.error
    }

    /// Canonical summary document: one `LEVEL: count` line per level
    pub fn render(&self) -> String {
        LogLevel::ALL
            .iter()
            .map(|level| format!("{level}: {}\n", self.get(*level)))
            .collect()
    }
}

/// Leading `[TAG]` of a log line, if the tag is a known level
fn leading_level(line: &str) -> Option<LogLevel> {
    let rest = line.strip_prefix('[')?;
    let (tag, _) = rest.split_once(']')?;
    LogLevel::from_tag(tag)
}

/// Tally lines that begin with `[INFO]`, `[WARN]` or `[ERROR]`
///
/// Lines are trimmed first. Blank lines and lines with any other prefix are
/// not counted.
pub fn count_log_levels(log: &str) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for line in log.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(level) = leading_level(line) {
            counts.bump(level);
        }
    }
    counts
}
