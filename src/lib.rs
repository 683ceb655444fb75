pub mod compare;
pub mod completions;
pub mod config;
pub mod error;
pub mod fixture;
pub mod grammar;
pub mod logging;
pub mod report;
pub mod tasks;
pub mod truth;
pub mod utils;

pub use config::GraderConfig;
pub use error::{FailureKind, VerifyError};
pub use report::{Pass, Verdict};
pub use tasks::{run, TaskId};
