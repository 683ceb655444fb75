//! Verdict reporting
//!
//! A run ends in exactly one line on stdout, `PASS: <detail>` or
//! `FAIL: <reason>`, and a boolean that the process maps to its exit status.

use std::io::Write;

use crate::error::VerifyError;

/// Decisive detail of a passing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass(pub String);

impl Pass {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Terminal outcome of one verification run
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass(Pass),
    Fail(VerifyError),
}

impl From<Result<Pass, VerifyError>> for Verdict {
    fn from(result: Result<Pass, VerifyError>) -> Self {
        match result {
            Ok(pass) => Verdict::Pass(pass),
            Err(err) => Verdict::Fail(err),
        }
    }
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass(_))
    }

    /// The single summary line, without trailing newline
    pub fn line(&self) -> String {
        match self {
            Verdict::Pass(Pass(detail)) => format!("PASS: {detail}"),
            Verdict::Fail(err) => format!("FAIL: {err}"),
        }
    }
}

/// Write the summary line and return whether the run passed
pub fn report<W: Write>(verdict: &Verdict, out: &mut W) -> std::io::Result<bool> {
    writeln!(out, "{}", verdict.line())?;
    out.flush()?;
    Ok(verdict.passed())
}
