//! Content checks for prose outputs
//!
//! These stand in for ground truth where the task asks for writing rather than
//! data: length bounds, vocabulary presence and syllable shape.

use crate::error::VerifyError;
use crate::truth::line_syllables;
use crate::utils::{find_keyword, truncate_string, word_count};

/// Word count of `text` must lie within `min..=max`
pub fn expect_word_range(what: &str, text: &str, min: usize, max: usize) -> Result<usize, VerifyError> {
    let words = word_count(text);
    if (min..=max).contains(&words) {
        Ok(words)
    } else {
        Err(VerifyError::heuristic(format!(
            "{what} must be {min}-{max} words, found {words}: '{}'",
            truncate_string(text, 120)
        )))
    }
}

/// At least one keyword must appear in `text`, case-insensitively
///
/// Returns the first matching keyword; `failure` is the diagnostic otherwise.
pub fn expect_keyword<'a>(text: &str, keywords: &'a [String], failure: &str) -> Result<&'a str, VerifyError> {
    find_keyword(text, keywords).ok_or_else(|| VerifyError::heuristic(failure))
}

/// Each line must carry the given number of syllables
pub fn expect_syllable_pattern(lines: &[&str], pattern: &[usize]) -> Result<(), VerifyError> {
    for (i, (line, expected)) in lines.iter().zip(pattern).enumerate() {
        let found = line_syllables(line);
        if found != *expected {
            return Err(VerifyError::heuristic(format!(
                "Line {} must have {expected} syllables, found {found}: '{line}'",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Text must hold at most one `.`-delimited sentence
pub fn expect_single_sentence(text: &str) -> Result<(), VerifyError> {
    let sentences = text.split('.').filter(|s| !s.trim().is_empty()).count();
    if sentences > 1 {
        return Err(VerifyError::heuristic(format!(
            "Expected a single sentence, found {sentences} sentences"
        )));
    }
    Ok(())
}
