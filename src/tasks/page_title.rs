//! Title of a fetched web page
//!
//! Output: exactly one line, the page title.

use crate::compare::{expect_count, expect_text_ci};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::grammar::{Grammar, LinePattern};
use crate::report::Pass;

use super::{read_task_output, TaskId};

pub fn grammar() -> Grammar {
    Grammar::Uniform(LinePattern::Scalar)
}

pub fn render(title: &str) -> String {
    format!("{title}\n")
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::PageTitle, config)?;
    let lines = grammar().parse(&text)?.into_lines();
    expect_count("title line", 1, lines.len())?;

    let title = lines[0].text();
    expect_text_ci("Page title", &config.page_title.0, title)?;

    Ok(Pass::new(format!("Page title matches: '{title}'")))
}
