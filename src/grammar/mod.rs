//! Output grammars
//!
//! A [`Grammar`] describes the whole shape of a candidate document in terms of
//! [`LinePattern`]s. Parsing is total: every input yields either a
//! [`ParsedDocument`] or a `FormatMismatch` naming the offending line and the
//! pattern it was expected to match. No non-blank line is ever skipped.
//!
//! Adding a task grammar means composing existing patterns (or adding a
//! `LinePattern` variant), not writing new matching code.

mod line;

pub use line::{KeySpec, LineMatcher, LinePattern, ParsedLine, ValueKind};

use serde_json::{Map, Value};

use crate::error::VerifyError;

/// Document-level grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grammar {
    /// Every line matches the same pattern
    Uniform(LinePattern),
    /// Fixed leading lines, then a uniform body
    Headed {
        head: Vec<LinePattern>,
        body: LinePattern,
    },
    /// Named section headers, each followed by body lines
    Sectioned {
        sections: Vec<String>,
        body: LinePattern,
    },
    /// Free text with no line structure
    Prose,
    /// A single JSON value whose root must be an object
    JsonObject,
}

/// One section of a [`Grammar::Sectioned`] document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<ParsedLine>,
}

/// Structure extracted from a conforming document
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedDocument {
    Lines(Vec<ParsedLine>),
    Headed {
        head: Vec<ParsedLine>,
        body: Vec<ParsedLine>,
    },
    Sections(Vec<Section>),
    Prose(String),
    /// Object members in document order
    Json(Map<String, Value>),
}

impl ParsedDocument {
    pub fn into_lines(self) -> Vec<ParsedLine> {
        match self {
            ParsedDocument::Lines(lines) => lines,
            ParsedDocument::Headed { head, body } => head.into_iter().chain(body).collect(),
            ParsedDocument::Sections(sections) => {
                sections.into_iter().flat_map(|s| s.entries).collect()
            }
            ParsedDocument::Prose(_) | ParsedDocument::Json(_) => Vec::new(),
        }
    }

    /// Split into fixed head lines and body lines
    ///
    /// Documents without a head yield an empty head.
    pub fn into_headed(self) -> (Vec<ParsedLine>, Vec<ParsedLine>) {
        match self {
            ParsedDocument::Headed { head, body } => (head, body),
            other => (Vec::new(), other.into_lines()),
        }
    }

    /// Whole document as text: prose as-is, line documents re-joined
    pub fn into_text(self) -> String {
        match self {
            ParsedDocument::Prose(text) => text,
            ParsedDocument::Json(map) => Value::Object(map).to_string(),
            other => other
                .into_lines()
                .iter()
                .map(ParsedLine::text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// First section called `name` (case-insensitive), if present
    pub fn section(&self, name: &str) -> Option<&Section> {
        match self {
            ParsedDocument::Sections(sections) => sections
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(name)),
            _ => None,
        }
    }
}

/// Trimmed non-blank lines of a document
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// JSON type name used in diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn compile(pattern: &LinePattern) -> Result<LineMatcher, VerifyError> {
    pattern
        .compile()
        .map_err(|e| VerifyError::format_doc(pattern.describe(), format!("invalid grammar: {e}")))
}

fn parse_line(matcher: &LineMatcher, number: usize, line: &str) -> Result<ParsedLine, VerifyError> {
    matcher
        .parse(line)
        .ok_or_else(|| VerifyError::format_at(number, matcher.pattern().describe(), line))
}

impl LinePattern {
    /// Match line `number` of a document against this pattern alone
    pub fn parse_at(&self, number: usize, line: &str) -> Result<ParsedLine, VerifyError> {
        parse_line(&compile(self)?, number, line)
    }
}

impl Grammar {
    /// Short description for listings
    pub fn describe(&self) -> String {
        match self {
            Grammar::Uniform(pattern) => format!("lines of {}", pattern.describe()),
            Grammar::Headed { head, body } => {
                let head: Vec<String> = head.iter().map(LinePattern::describe).collect();
                format!("{} then lines of {}", head.join(", "), body.describe())
            }
            Grammar::Sectioned { sections, body } => {
                let names: Vec<String> = sections.iter().map(|s| format!("'{s}:'")).collect();
                format!("sections {} of {}", names.join(", "), body.describe())
            }
            Grammar::Prose => "free text".to_string(),
            Grammar::JsonObject => "a JSON object".to_string(),
        }
    }

    /// Parse a whole document (already trimmed)
    pub fn parse(&self, text: &str) -> Result<ParsedDocument, VerifyError> {
        let parsed = match self {
            Grammar::Prose => ParsedDocument::Prose(text.trim().to_string()),
            Grammar::JsonObject => ParsedDocument::Json(parse_json_object(text)?),
            _ => self.parse_lines(&non_blank_lines(text))?,
        };
        tracing::debug!(grammar = ?self, "document parsed");
        Ok(parsed)
    }

    /// Parse pre-split, trimmed, non-blank lines
    ///
    /// Line numbers in diagnostics are 1-based positions in `lines`.
    pub fn parse_lines(&self, lines: &[&str]) -> Result<ParsedDocument, VerifyError> {
        match self {
            Grammar::Uniform(pattern) => {
                let matcher = compile(pattern)?;
                let parsed = lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| parse_line(&matcher, i + 1, line))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ParsedDocument::Lines(parsed))
            }
            Grammar::Headed { head, body } => {
                let mut parsed_head = Vec::with_capacity(head.len());
                for (i, pattern) in head.iter().enumerate() {
                    let matcher = compile(pattern)?;
                    let line = lines.get(i).copied().unwrap_or("");
                    parsed_head.push(parse_line(&matcher, i + 1, line)?);
                }
                let matcher = compile(body)?;
                let parsed_body = lines
                    .iter()
                    .enumerate()
                    .skip(head.len())
                    .map(|(i, line)| parse_line(&matcher, i + 1, line))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ParsedDocument::Headed {
                    head: parsed_head,
                    body: parsed_body,
                })
            }
            Grammar::Sectioned { sections, body } => {
                let headers = sections
                    .iter()
                    .map(|name| compile(&LinePattern::section_header(name.as_str())))
                    .collect::<Result<Vec<_>, _>>()?;
                let body_matcher = compile(body)?;

                let mut parsed: Vec<Section> = Vec::new();
                for (i, line) in lines.iter().enumerate() {
                    if let Some(ParsedLine::Header(name)) =
                        headers.iter().find_map(|h| h.parse(line))
                    {
                        parsed.push(Section {
                            name,
                            entries: Vec::new(),
                        });
                        continue;
                    }
                    match parsed.last_mut() {
                        Some(section) => section.entries.push(parse_line(&body_matcher, i + 1, line)?),
                        None => {
                            let expected = sections
                                .iter()
                                .map(|s| format!("'{s}:'"))
                                .collect::<Vec<_>>()
                                .join(" or ");
                            return Err(VerifyError::format_at(i + 1, expected, *line));
                        }
                    }
                }
                Ok(ParsedDocument::Sections(parsed))
            }
            Grammar::Prose => Ok(ParsedDocument::Prose(lines.join("\n"))),
            Grammar::JsonObject => Ok(ParsedDocument::Json(parse_json_object(&lines.join("\n"))?)),
        }
    }
}

/// Parse a JSON document whose root must be an object
pub fn parse_json_object(text: &str) -> Result<Map<String, Value>, VerifyError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| VerifyError::format_doc("valid JSON", e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(VerifyError::format_doc(
            "a JSON object root",
            format!("got {}", json_type_name(&other)),
        )),
    }
}
