//! Pros and cons lists
//!
//! Output: a `Pros:` section and a `Cons:` section, five `- ` bullets each,
//! every bullet 10 to 30 words long.

use crate::compare::{expect_count, expect_word_range};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::grammar::{Grammar, LinePattern, ParsedDocument};
use crate::report::Pass;

use super::{read_task_output, TaskId};

pub const POINTS_PER_SECTION: usize = 5;
pub const MIN_POINT_WORDS: usize = 10;
pub const MAX_POINT_WORDS: usize = 30;

pub fn grammar() -> Grammar {
    Grammar::Sectioned {
        sections: vec!["Pros".to_string(), "Cons".to_string()],
        body: LinePattern::Bullet,
    }
}

pub fn render(pros: &[&str], cons: &[&str]) -> String {
    let mut out = String::from("Pros:\n");
    for point in pros {
        out.push_str(&format!("- {point}\n"));
    }
    out.push_str("\nCons:\n");
    for point in cons {
        out.push_str(&format!("- {point}\n"));
    }
    out
}

/// Bullet texts of the named section; the section must exist with bullets
fn points(doc: &ParsedDocument, name: &str) -> Result<Vec<String>, VerifyError> {
    let entries = doc
        .section(name)
        .map(|s| s.entries.as_slice())
        .unwrap_or_default();
    if entries.is_empty() {
        return Err(VerifyError::format_doc(
            format!("a '{name}:' section with bullet points"),
            "none found",
        ));
    }
    Ok(entries.iter().map(|e| e.text().to_string()).collect())
}

/// Pros and cons of a conforming document
pub fn parse_points(text: &str) -> Result<(Vec<String>, Vec<String>), VerifyError> {
    let doc = grammar().parse(text)?;
    Ok((points(&doc, "Pros")?, points(&doc, "Cons")?))
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::ProsCons, config)?;
    let (pros, cons) = parse_points(&text)?;

    expect_count("pros", POINTS_PER_SECTION, pros.len())?;
    expect_count("cons", POINTS_PER_SECTION, cons.len())?;

    for (i, point) in pros.iter().chain(&cons).enumerate() {
        expect_word_range(&format!("Point {}", i + 1), point, MIN_POINT_WORDS, MAX_POINT_WORDS)?;
    }

    Ok(Pass::new(format!(
        "{POINTS_PER_SECTION} pros and {POINTS_PER_SECTION} cons, each {MIN_POINT_WORDS}-{MAX_POINT_WORDS} words"
    )))
}
