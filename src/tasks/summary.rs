//! One-sentence summary of benefits and challenges
//!
//! Output: a single sentence of 8 to 49 words, ending in a period, naming at
//! least one benefit and one challenge.

use crate::compare::{expect_keyword, expect_single_sentence};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::grammar::Grammar;
use crate::report::Pass;
use crate::utils::word_count;

use super::{read_task_output, TaskId};

/// Exclusive upper bound on words
pub const MAX_WORDS: usize = 50;
pub const MIN_WORDS: usize = 8;

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::Summary, config)?;
    let summary = Grammar::Prose.parse(&text)?.into_text();

    expect_single_sentence(&summary)?;

    let words = word_count(&summary);
    if words >= MAX_WORDS {
        return Err(VerifyError::heuristic(format!(
            "Summary too long ({words} words); it must be under {MAX_WORDS} words"
        )));
    }
    if words < MIN_WORDS {
        return Err(VerifyError::heuristic(format!(
            "Summary too short ({words} words); it must be at least {MIN_WORDS} words"
        )));
    }
    if !summary.ends_with('.') {
        return Err(VerifyError::heuristic("Summary must end with a period"));
    }

    let keywords = &config.keywords;
    expect_keyword(&summary, &keywords.benefit, "Summary does not mention any benefits")?;
    expect_keyword(&summary, &keywords.challenge, "Summary does not mention any challenges")?;

    Ok(Pass::new(format!(
        "One-sentence summary covers both benefits and challenges ({words} words)"
    )))
}
