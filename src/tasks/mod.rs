//! Task verifiers
//!
//! One module per task. Each exposes `verify(&GraderConfig)`, which loads the
//! fixture, derives the expected record, parses the candidate output with the
//! task's grammar and runs the comparators in order, stopping at the first
//! failure. Tasks with a line grammar also expose `grammar()` and a `render`
//! of the canonical well-formed output.

pub mod dir_report;
pub mod haiku;
pub mod log_summary;
pub mod os_version;
pub mod page_title;
pub mod pros_cons;
pub mod py_files;
pub mod sales_summary;
pub mod summary;
pub mod temperatures;

use std::path::Path;

use clap::ValueEnum;

use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::grammar::Grammar;
use crate::report::{Pass, Verdict};

/// Every verifier this crate knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskId {
    /// Fixed Celsius to Fahrenheit conversions
    Temperatures,
    /// INFO/WARN/ERROR counts of a server log
    LogSummary,
    /// Per-product totals of a sales CSV as JSON
    SalesSummary,
    /// Workspace source files and their sizes
    PyFiles,
    /// Title of a fetched web page
    PageTitle,
    /// Non-blank line counts of a configured directory
    DirReport,
    /// 5-7-5 haiku about technology
    Haiku,
    /// One-sentence summary of benefits and challenges
    Summary,
    /// Five pros and five cons as bullet lists
    ProsCons,
    /// Name of the host operating system
    OsVersion,
}

impl TaskId {
    pub const ALL: [TaskId; 10] = [
        TaskId::Temperatures,
        TaskId::LogSummary,
        TaskId::SalesSummary,
        TaskId::PyFiles,
        TaskId::PageTitle,
        TaskId::DirReport,
        TaskId::Haiku,
        TaskId::Summary,
        TaskId::ProsCons,
        TaskId::OsVersion,
    ];

    /// Stable kebab-case name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            TaskId::Temperatures => "temperatures",
            TaskId::LogSummary => "log-summary",
            TaskId::SalesSummary => "sales-summary",
            TaskId::PyFiles => "py-files",
            TaskId::PageTitle => "page-title",
            TaskId::DirReport => "dir-report",
            TaskId::Haiku => "haiku",
            TaskId::Summary => "summary",
            TaskId::ProsCons => "pros-cons",
            TaskId::OsVersion => "os-version",
        }
    }

    /// Workspace-relative location of the candidate output
    pub fn output_path<'a>(&self, config: &'a GraderConfig) -> &'a Path {
        let paths = &config.paths;
        match self {
            TaskId::Temperatures => &paths.temperatures_output,
            TaskId::LogSummary => &paths.log_output,
            TaskId::SalesSummary => &paths.sales_output,
            TaskId::PyFiles => &paths.py_files_output,
            TaskId::PageTitle => &paths.page_title_output,
            TaskId::DirReport => &paths.report_output,
            TaskId::Haiku => &paths.haiku_output,
            TaskId::Summary => &paths.summary_output,
            TaskId::ProsCons => &paths.pros_cons_output,
            TaskId::OsVersion => &paths.os_version_output,
        }
    }

    /// Grammar the candidate output must conform to
    pub fn grammar(&self) -> Grammar {
        match self {
            TaskId::Temperatures => temperatures::grammar(),
            TaskId::LogSummary => log_summary::grammar(),
            TaskId::SalesSummary => Grammar::JsonObject,
            TaskId::PyFiles => py_files::grammar(),
            TaskId::PageTitle => page_title::grammar(),
            TaskId::DirReport => dir_report::grammar(),
            TaskId::Haiku => haiku::grammar(),
            TaskId::Summary | TaskId::OsVersion => Grammar::Prose,
            TaskId::ProsCons => pros_cons::grammar(),
        }
    }

    pub fn verify(&self, config: &GraderConfig) -> Result<Pass, VerifyError> {
        match self {
            TaskId::Temperatures => temperatures::verify(config),
            TaskId::LogSummary => log_summary::verify(config),
            TaskId::SalesSummary => sales_summary::verify(config),
            TaskId::PyFiles => py_files::verify(config),
            TaskId::PageTitle => page_title::verify(config),
            TaskId::DirReport => dir_report::verify(config),
            TaskId::Haiku => haiku::verify(config),
            TaskId::Summary => summary::verify(config),
            TaskId::ProsCons => pros_cons::verify(config),
            TaskId::OsVersion => os_version::verify(config),
        }
    }
}

/// Run one verifier to a verdict
pub fn run(task: TaskId, config: &GraderConfig) -> Verdict {
    let span = tracing::info_span!("verify", task = task.name());
    let _guard = span.enter();

    let verdict = Verdict::from(task.verify(config));
    match &verdict {
        Verdict::Pass(_) => tracing::info!("passed"),
        Verdict::Fail(err) => tracing::info!(kind = ?err.kind(), "failed"),
    }
    verdict
}

/// Read the output of `task`, trimmed
pub(crate) fn read_task_output(task: TaskId, config: &GraderConfig) -> Result<String, VerifyError> {
    let rel = task.output_path(config);
    crate::fixture::read_output(rel, &config.resolve(rel))
}
