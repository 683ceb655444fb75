//! Host operating system name
//!
//! Output: free text naming the OS. It must look like an OS name at all, and
//! one of the spellings of the executing host's platform must appear.

use crate::compare::expect_keyword;
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::fixture::host_platform;
use crate::grammar::Grammar;
use crate::report::Pass;
use crate::utils::truncate_string;

use super::{read_task_output, TaskId};

/// Platform the output is compared against: the configured override, else the probe
pub fn effective_platform(config: &GraderConfig) -> String {
    config
        .host_platform
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_else(host_platform)
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let text = read_task_output(TaskId::OsVersion, config)?;
    let content = Grammar::Prose.parse(&text)?.into_text();
    let shown = truncate_string(&content, 80);

    expect_keyword(
        &content,
        &config.keywords.os_names,
        &format!("Content '{shown}' does not appear to be an OS version"),
    )?;

    let platform = effective_platform(config);
    tracing::debug!(%platform, "host platform resolved");
    let aliases = config
        .keywords
        .os_aliases
        .get(&platform)
        .map(Vec::as_slice)
        .unwrap_or_default();
    expect_keyword(
        &content,
        aliases,
        &format!("OS '{shown}' does not match actual OS '{platform}'"),
    )?;

    Ok(Pass::new(format!("OS version correctly detected: {shown}")))
}
