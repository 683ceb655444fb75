//! Log level summary
//!
//! Output: exactly three `LEVEL: count` lines in the order INFO, WARN, ERROR,
//! with counts equal to the tagged lines of the source log.

use crate::compare::{expect_count, expect_eq, expect_sequence};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::fixture::read_fixture;
use crate::grammar::{non_blank_lines, Grammar, KeySpec, LinePattern, ParsedLine, ValueKind};
use crate::report::Pass;
use crate::truth::{count_log_levels, LogLevel};

use super::{read_task_output, TaskId};

pub fn grammar() -> Grammar {
    let levels = LogLevel::ALL.iter().map(|l| l.as_str().to_string()).collect();
    Grammar::Uniform(LinePattern::key_value(KeySpec::OneOf(levels), ValueKind::Integer))
}

/// Level/count pairs in document order
pub fn parse_counts(lines: &[&str]) -> Result<Vec<(String, u64)>, VerifyError> {
    let parsed = grammar().parse_lines(lines)?.into_lines();
    parsed
        .iter()
        .enumerate()
        .map(|(i, line)| match line {
            ParsedLine::KeyValue { key, value } => value
                .parse::<u64>()
                .map(|count| (key.clone(), count))
                .map_err(|_| VerifyError::format_at(i + 1, "a count that fits 64 bits", value)),
            other => Err(VerifyError::format_at(
                i + 1,
                grammar().describe(),
                other.text(),
            )),
        })
        .collect()
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let fixture = &config.paths.log_fixture;
    let log = read_fixture("Source log", fixture, &config.resolve(fixture))?;
    let expected = count_log_levels(&log);
    tracing::debug!(?expected, "expected record derived");

    let text = read_task_output(TaskId::LogSummary, config)?;
    let lines = non_blank_lines(&text);
    expect_count("lines (INFO/WARN/ERROR)", LogLevel::ALL.len(), lines.len())?;

    let parsed = parse_counts(&lines)?;
    let order: Vec<String> = parsed.iter().map(|(level, _)| level.clone()).collect();
    let required: Vec<&str> = LogLevel::ALL.iter().map(LogLevel::as_str).collect();
    expect_sequence("Lines", &required, &order)?;

    for (level, (_, count)) in LogLevel::ALL.iter().zip(&parsed) {
        expect_eq(&format!("{level} count"), expected.get(*level), *count)?;
    }

    Ok(Pass::new(format!(
        "Log summary correct - INFO:{} WARN:{} ERROR:{} (total {} lines)",
        expected.info,
        expected.warn,
        expected.error,
        expected.total()
    )))
}
