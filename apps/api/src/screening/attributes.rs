//! Candidate attributes as returned by the extractor, plus the coercions the
//! scorers and the store rely on.
//!
//! Fields stay as raw JSON because the model is free to answer with any shape;
//! every accessor here is total and falls back to an empty/zero value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Extracted candidate profile. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeRecord {
    skills: Vec<Value>,
    experience_years: Value,
    education: Value,
    raw_output: Option<String>,
}

/// The persisted and displayed form of an `AttributeRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAttributes {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
}

impl AttributeRecord {
    /// Builds a record from the fields of a JSON object. Missing or
    /// mistyped fields become empty rather than failing.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let skills = match object.get("skills") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };
        Self {
            skills,
            experience_years: object.get("experience_years").cloned().unwrap_or(Value::Null),
            education: object.get("education").cloned().unwrap_or(Value::Null),
            raw_output: None,
        }
    }

    /// Degraded record used when the model reply could not be parsed.
    pub fn fallback(raw_output: impl Into<String>) -> Self {
        Self {
            skills: Vec::new(),
            experience_years: Value::from(0),
            education: Value::from(""),
            raw_output: Some(raw_output.into()),
        }
    }

    /// Number of skill entries, whatever their type.
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// String skills, trimmed and lower-cased. Non-string entries are skipped.
    pub fn text_skills(&self) -> impl Iterator<Item = String> + '_ {
        self.skills
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_lowercase())
    }

    /// Experience as a non-negative whole number of years.
    pub fn experience_years(&self) -> u32 {
        coerce_years(&self.experience_years)
    }

    /// Education as text; `null` becomes the empty string.
    pub fn education(&self) -> String {
        value_to_text(&self.education)
    }

    pub fn raw_output(&self) -> Option<&str> {
        self.raw_output.as_deref()
    }

    pub fn normalized(&self) -> NormalizedAttributes {
        NormalizedAttributes {
            skills: self.skills.iter().map(value_to_text).collect(),
            experience_years: self.experience_years(),
            education: self.education(),
        }
    }
}

/// Integers pass through, floats truncate toward zero, strings must be an
/// integer literal. Everything else, and anything negative, is 0.
fn coerce_years(value: &Value) -> u32 {
    let years: i64 = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(u) = n.as_u64() {
                i64::try_from(u).unwrap_or(i64::MAX)
            } else {
                match n.as_f64() {
                    // `as` saturates on out-of-range floats
                    Some(f) if f.is_finite() => f.trunc() as i64,
                    _ => 0,
                }
            }
        }
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    u32::try_from(years.max(0)).unwrap_or(u32::MAX)
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
