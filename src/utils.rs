//! Small text and number helpers shared by derivers and comparators

/// Round `value` to `places` decimal places
///
/// Goes through the shortest correctly rounded decimal rendering, so exact
/// binary ties round half to even and values that merely print like a tie
/// (e.g. `2.675`) round the way their stored binary value dictates.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Render a float the way the expected values are written: at least one
/// decimal place (`50.0`, `98.6`, `71.25`)
pub fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Case-insensitive search for the first keyword contained in `text`
pub fn find_keyword<'a>(text: &str, keywords: &'a [String]) -> Option<&'a str> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .find(|kw| !kw.is_empty() && lower.contains(&kw.to_lowercase()))
        .map(String::as_str)
}
