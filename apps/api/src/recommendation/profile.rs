//! Candidate profile as received from callers.
//!
//! Parsing is deliberately permissive: absent, null or mistyped fields become
//! empty sequences instead of rejecting the request. Skill scalars that are
//! not strings (numbers, booleans) are stringified; location entries that are
//! not strings are dropped.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_locations")]
    pub location_preference: Vec<String>,
}

/// Profile with comparison-ready values: lower-cased and trimmed.
///
/// Blank skills are removed since they can never match a tag. Blank
/// locations are kept: an empty preference is a substring of every location.
#[derive(Debug, Clone, Default)]
pub struct NormalizedProfile {
    pub skills: HashSet<String>,
    pub locations: Vec<String>,
}

impl Profile {
    pub fn normalize(&self) -> NormalizedProfile {
        NormalizedProfile {
            skills: self
                .skills
                .iter()
                .map(|s| normalize_text(s))
                .filter(|s| !s.is_empty())
                .collect(),
            locations: self
                .location_preference
                .iter()
                .map(|l| normalize_text(l))
                .collect(),
        }
    }
}

fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect())
}

fn lenient_locations<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        // A single preference sent without the surrounding list
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}
