//! Line patterns
//!
//! A [`LinePattern`] describes one kind of output line. It compiles to an
//! anchored regex via [`LineMatcher`], and a successful match yields a
//! [`ParsedLine`]. Lines are trimmed before they get here.

use regex::Regex;

/// Which keys a key/value line accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    /// Any non-empty key
    Any,
    /// Exactly this key
    Literal(String),
    /// One key out of a fixed vocabulary
    OneOf(Vec<String>),
}

/// Shape of the value after the colon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinePattern {
    /// `KEY: value`
    KeyValue { key: KeySpec, value: ValueKind },
    /// `name: 12 unit`
    KeyValueUnit { unit: String },
    /// `path: 123 bytes`
    PathSize,
    /// `- point`
    Bullet,
    /// `Name:`; case-insensitive with optional space before the colon
    /// unless `exact`
    SectionHeader { name: String, exact: bool },
    /// A bare value, one per line
    Scalar,
}

/// Structure extracted from one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    KeyValue { key: String, value: String },
    Measured { key: String, amount: u64, unit: String },
    Bullet(String),
    Header(String),
    Scalar(String),
}

impl ParsedLine {
    /// Key of a key/value or measured line
    pub fn key(&self) -> Option<&str> {
        match self {
            ParsedLine::KeyValue { key, .. } | ParsedLine::Measured { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Free text carried by the line (value, bullet point, header or scalar)
    pub fn text(&self) -> &str {
        match self {
            ParsedLine::KeyValue { value, .. } => value,
            ParsedLine::Measured { key, .. } => key,
            ParsedLine::Bullet(text) | ParsedLine::Header(text) | ParsedLine::Scalar(text) => text,
        }
    }

    /// Numeric amount of a measured line
    pub fn amount(&self) -> Option<u64> {
        match self {
            ParsedLine::Measured { amount, .. } => Some(*amount),
            _ => None,
        }
    }
}

impl LinePattern {
    pub fn key_value(key: KeySpec, value: ValueKind) -> Self {
        LinePattern::KeyValue { key, value }
    }

    pub fn key_value_unit(unit: impl Into<String>) -> Self {
        LinePattern::KeyValueUnit { unit: unit.into() }
    }

    pub fn section_header(name: impl Into<String>) -> Self {
        LinePattern::SectionHeader {
            name: name.into(),
            exact: false,
        }
    }

    /// Header that must read exactly `name:`
    pub fn exact_header(name: impl Into<String>) -> Self {
        LinePattern::SectionHeader {
            name: name.into(),
            exact: true,
        }
    }

    /// Human-readable form used in format diagnostics
    pub fn describe(&self) -> String {
        match self {
            LinePattern::KeyValue { key, value } => {
                let key = match key {
                    KeySpec::Any => "<key>".to_string(),
                    KeySpec::Literal(k) => k.clone(),
                    KeySpec::OneOf(keys) => keys.join("|"),
                };
                let value = match value {
                    ValueKind::Text => "<value>",
                    ValueKind::Integer => "<n>",
                };
                format!("'{key}: {value}'")
            }
            LinePattern::KeyValueUnit { unit } => format!("'<name>: <n> {unit}'"),
            LinePattern::PathSize => "'<path>: <n> bytes'".to_string(),
            LinePattern::Bullet => "'- <point>'".to_string(),
            LinePattern::SectionHeader { name, .. } => format!("'{name}:'"),
            LinePattern::Scalar => "'<value>'".to_string(),
        }
    }

    fn regex_source(&self) -> String {
        match self {
            LinePattern::KeyValue { key, value } => {
                let key = match key {
                    KeySpec::Any => "(.+?)".to_string(),
                    KeySpec::Literal(k) => format!("({})", regex::escape(k)),
                    KeySpec::OneOf(keys) => {
                        let alts: Vec<String> = keys.iter().map(|k| regex::escape(k)).collect();
                        format!("({})", alts.join("|"))
                    }
                };
                let value = match value {
                    ValueKind::Text => "(.+)",
                    ValueKind::Integer => r"(\d+)",
                };
                format!(r"^{key}:\s*{value}$")
            }
            LinePattern::KeyValueUnit { unit } => {
                format!(r"^(.+):\s*(\d+)\s+{}$", regex::escape(unit))
            }
            LinePattern::PathSize => r"^(.+):\s*(\d+)\s+bytes$".to_string(),
            LinePattern::Bullet => r"^-+(.*)$".to_string(),
            LinePattern::SectionHeader { name, exact: true } => format!("^({}):$", regex::escape(name)),
            LinePattern::SectionHeader { name, exact: false } => {
                format!(r"(?i)^({})\s*:$", regex::escape(name))
            }
            LinePattern::Scalar => "^(.+)$".to_string(),
        }
    }

    pub fn compile(&self) -> Result<LineMatcher, regex::Error> {
        Ok(LineMatcher {
            pattern: self.clone(),
            regex: Regex::new(&self.regex_source())?,
        })
    }
}

/// A compiled [`LinePattern`]
#[derive(Debug, Clone)]
pub struct LineMatcher {
    pattern: LinePattern,
    regex: Regex,
}

impl LineMatcher {
    pub fn pattern(&self) -> &LinePattern {
        &self.pattern
    }

    /// Match a trimmed line, `None` when it does not conform
    pub fn parse(&self, line: &str) -> Option<ParsedLine> {
        let caps = self.regex.captures(line)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str().trim().to_string());

        match &self.pattern {
            LinePattern::KeyValue { .. } => Some(ParsedLine::KeyValue {
                key: group(1)?,
                value: group(2)?,
            }),
            LinePattern::KeyValueUnit { unit } => Some(ParsedLine::Measured {
                key: group(1)?,
                amount: group(2)?.parse().ok()?,
                unit: unit.clone(),
            }),
            LinePattern::PathSize => Some(ParsedLine::Measured {
                key: group(1)?,
                amount: group(2)?.parse().ok()?,
                unit: "bytes".to_string(),
            }),
            LinePattern::Bullet => Some(ParsedLine::Bullet(group(1)?)),
            LinePattern::SectionHeader { name, .. } => Some(ParsedLine::Header(name.clone())),
            LinePattern::Scalar => Some(ParsedLine::Scalar(group(1)?)),
        }
    }
}
