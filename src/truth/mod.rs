//! Ground-truth derivation
//!
//! Pure functions from fixture content to the expected record of a task.
//! Nothing here touches the candidate output, and every function returns the
//! same record for the same input.

pub mod conversion;
pub mod line_counts;
pub mod log_levels;
pub mod sales;
pub mod syllables;

pub use conversion::{expected_conversions, Conversion, CELSIUS_INPUTS};
pub use line_counts::{count_nonblank_lines, FileLineCount};
pub use log_levels::{count_log_levels, LevelCounts, LogLevel};
pub use sales::{aggregate_sales, ProductTotals, SalesSummary};
pub use syllables::{line_syllables, word_syllables};
