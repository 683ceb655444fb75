//! Celsius to Fahrenheit acceptance table

use crate::utils::round_to;

/// Inputs the conversion program is expected to process, in output order
pub const CELSIUS_INPUTS: [f64; 5] = [0.0, 100.0, -40.0, 37.0, 22.0];

/// Decimal places the converted values are compared at
pub const CONVERSION_PRECISION: usize = 1;

/// One expected conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub celsius: f64,
    pub fahrenheit: f64,
}

/// Expected conversions, already rounded to [`CONVERSION_PRECISION`]
pub fn expected_conversions() -> Vec<Conversion> {
    CELSIUS_INPUTS
        .iter()
        .map(|&celsius| Conversion {
            celsius,
            fahrenheit: round_to(celsius * 9.0 / 5.0 + 32.0, CONVERSION_PRECISION),
        })
        .collect()
}
