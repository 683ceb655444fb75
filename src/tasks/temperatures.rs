//! Celsius to Fahrenheit conversion output
//!
//! Output: one converted value per line, in input order.

use crate::compare::{expect_count, expect_rounded};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::grammar::{non_blank_lines, Grammar, LinePattern};
use crate::report::Pass;
use crate::truth::conversion::CONVERSION_PRECISION;
use crate::truth::{expected_conversions, Conversion};
use crate::utils::format_float;

use super::{read_task_output, TaskId};

pub fn grammar() -> Grammar {
    Grammar::Uniform(LinePattern::Scalar)
}

pub fn render(conversions: &[Conversion]) -> String {
    conversions
        .iter()
        .map(|c| format!("{}\n", format_float(c.fahrenheit)))
        .collect()
}

/// Parse the converted values of a conforming document
pub fn parse_values(text: &str) -> Result<Vec<f64>, VerifyError> {
    let lines = grammar().parse(text)?.into_lines();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.text()
                .parse::<f64>()
                .map_err(|_| VerifyError::format_at(i + 1, "a number", line.text()))
        })
        .collect()
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::Temperatures, config)?;
    let expected = expected_conversions();
    tracing::debug!(count = expected.len(), "expected record derived");

    expect_count("lines", expected.len(), non_blank_lines(&text).len())?;
    let values = parse_values(&text)?;

    for (i, (value, conversion)) in values.iter().zip(&expected).enumerate() {
        expect_rounded(
            &format!("Line {} ({} C)", i + 1, conversion.celsius),
            conversion.fahrenheit,
            *value,
            CONVERSION_PRECISION,
        )?;
    }

    Ok(Pass::new(format!(
        "All {} Celsius to Fahrenheit conversions are correct",
        expected.len()
    )))
}
