//! Haiku about technology
//!
//! Output: three lines with 5, 7 and 5 syllables that mention something
//! from the technology vocabulary.

use crate::compare::{expect_count, expect_keyword, expect_syllable_pattern};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::grammar::{Grammar, LinePattern, ParsedLine};
use crate::report::Pass;

use super::{read_task_output, TaskId};

pub const SYLLABLE_PATTERN: [usize; 3] = [5, 7, 5];

pub fn grammar() -> Grammar {
    Grammar::Uniform(LinePattern::Scalar)
}

pub fn render(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::Haiku, config)?;
    let parsed = grammar().parse(&text)?.into_lines();
    expect_count("haiku lines", SYLLABLE_PATTERN.len(), parsed.len())?;

    let lines: Vec<&str> = parsed.iter().map(ParsedLine::text).collect();
    expect_syllable_pattern(&lines, &SYLLABLE_PATTERN)?;
    let keyword = expect_keyword(
        &text,
        &config.keywords.technology,
        "Haiku does not appear to be about technology",
    )?;

    Ok(Pass::new(format!(
        "Haiku has 5-7-5 syllables and is about technology ('{keyword}')"
    )))
}
