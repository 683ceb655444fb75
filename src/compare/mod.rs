//! Comparators
//!
//! Each check returns `Ok(())` or the `VerifyError` describing the first
//! difference. Verifiers call them in a fixed order (shape, key set, ordering,
//! values, content heuristics) and stop at the first failure with `?`.

pub mod heuristics;
pub mod structure;
pub mod values;

pub use heuristics::{
    expect_keyword, expect_single_sentence, expect_syllable_pattern, expect_word_range,
};
pub use structure::{expect_count, expect_key_set, expect_sequence, expect_sorted};
pub use values::{expect_eq, expect_rounded, expect_text_ci};
