use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Length of a CIEL concept UUID such as `1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA`.
const CONCEPT_UUID_LEN: usize = 36;

/// One raw answer as it arrives from the intake form.
///
/// Forms hand back whatever the question widget produced: a concept code as
/// a number or a string, a checkbox flag, free text, or nothing at all. The
/// mapper never fails on any of these; it only asks for the view it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    #[default]
    Empty,
    Flag(bool),
    Number(f64),
    Text(String),
}

impl Answer {
    /// The answer as an integer concept code, if it is one.
    pub fn concept(&self) -> Option<u32> {
        match self {
            Answer::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX) => {
                Some(*n as u32)
            }
            Answer::Text(s) => parse_concept(s.trim()),
            _ => None,
        }
    }

    /// The answer as a number, if it is numeric.
    pub fn number(&self) -> Option<f64> {
        match self {
            Answer::Number(n) if n.is_finite() => Some(*n),
            Answer::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Checkbox-style truthiness.
    pub fn is_checked(&self) -> bool {
        match self {
            Answer::Empty => false,
            Answer::Flag(b) => *b,
            Answer::Number(n) => *n != 0.0 && !n.is_nan(),
            Answer::Text(s) => !s.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Answer::Empty)
    }
}

fn parse_concept(s: &str) -> Option<u32> {
    if let Ok(code) = s.parse::<u32>() {
        return Some(code);
    }

    // CIEL UUIDs pad the numeric id with 'A' up to 36 characters.
    if s.len() != CONCEPT_UUID_LEN {
        return None;
    }
    let digits = s.trim_end_matches('A');
    if digits.is_empty() || digits.len() == s.len() {
        return None;
    }
    digits.parse().ok()
}

impl From<u32> for Answer {
    fn from(code: u32) -> Self {
        Answer::Number(f64::from(code))
    }
}

impl From<f64> for Answer {
    fn from(n: f64) -> Self {
        Answer::Number(n)
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Answer::Flag(b)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<serde_json::Value> for Answer {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => Answer::Flag(b),
            serde_json::Value::Number(n) => n.as_f64().map(Answer::Number).unwrap_or_default(),
            serde_json::Value::String(s) => Answer::Text(s),
            // Multi-select answers and nested groups carry no single code.
            _ => Answer::Empty,
        }
    }
}
