//! Scalar value checks

use std::fmt::Display;

use crate::error::VerifyError;
use crate::utils::{format_float, round_to};

/// Exact equality for integers and other exact scalars
pub fn expect_eq<T: PartialEq + Display>(field: &str, expected: T, actual: T) -> Result<(), VerifyError> {
    if expected == actual {
        Ok(())
    } else {
        Err(VerifyError::value(field, expected, actual))
    }
}

/// Float equality after rounding both sides to `places` decimals
pub fn expect_rounded(field: &str, expected: f64, actual: f64, places: usize) -> Result<(), VerifyError> {
    let expected = round_to(expected, places);
    let actual = round_to(actual, places);
    if expected == actual {
        Ok(())
    } else {
        Err(VerifyError::value(field, format_float(expected), format_float(actual)))
    }
}

/// Case-insensitive string equality
pub fn expect_text_ci(field: &str, expected: &str, actual: &str) -> Result<(), VerifyError> {
    if expected.to_lowercase() == actual.to_lowercase() {
        Ok(())
    } else {
        Err(VerifyError::value(field, format!("'{expected}'"), format!("'{actual}'")))
    }
}
