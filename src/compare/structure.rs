//! Shape, key-set and ordering checks

use crate::error::VerifyError;

/// Number of entries must match exactly
pub fn expect_count(what: &str, expected: usize, actual: usize) -> Result<(), VerifyError> {
    if expected == actual {
        Ok(())
    } else {
        Err(VerifyError::count(what, expected, actual))
    }
}

/// The parsed keys must be exactly the expected keys, ignoring order
///
/// Missing keys are listed in expected order, extra keys in parsed order.
pub fn expect_key_set(what: &str, expected: &[String], actual: &[String]) -> Result<(), VerifyError> {
    let missing: Vec<String> = expected
        .iter()
        .filter(|k| !actual.contains(k))
        .cloned()
        .collect();
    let mut extra: Vec<String> = Vec::new();
    for key in actual.iter().filter(|k| !expected.contains(k)) {
        if !extra.contains(key) {
            extra.push(key.clone());
        }
    }

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(VerifyError::KeySetMismatch {
            what: what.to_string(),
            missing,
            extra,
        })
    }
}

/// Keys must already be in ascending (alphabetical) order
pub fn expect_sorted(what: &str, keys: &[String]) -> Result<(), VerifyError> {
    if keys.windows(2).all(|pair| pair[0] <= pair[1]) {
        Ok(())
    } else {
        Err(VerifyError::OrderMismatch {
            what: what.to_string(),
            expected: "alphabetical".to_string(),
            actual: keys.to_vec(),
        })
    }
}

/// Keys must appear in exactly this sequence
pub fn expect_sequence(what: &str, expected: &[&str], actual: &[String]) -> Result<(), VerifyError> {
    let matches = expected.len() == actual.len()
        && expected.iter().zip(actual).all(|(e, a)| *e == a.as_str());
    if matches {
        Ok(())
    } else {
        Err(VerifyError::OrderMismatch {
            what: what.to_string(),
            expected: expected.join(", "),
            actual: actual.to_vec(),
        })
    }
}
