use std::collections::BTreeMap;

use serde::Serialize;

/// Sector assigned to postings whose source row carries none.
pub const DEFAULT_SECTOR: &str = "General";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingType {
    Paid,
    Unpaid,
}

impl PostingType {
    /// `Unpaid` when the stipend text mentions "unpaid" in any casing.
    pub fn from_stipend(stipend: &str) -> Self {
        if stipend.to_lowercase().contains("unpaid") {
            PostingType::Unpaid
        } else {
            PostingType::Paid
        }
    }
}

/// One internship opportunity, immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub stipend: String,
    pub duration: String,
    /// Lower-cased, trimmed, de-duplicated skill keywords in source order.
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub posting_type: PostingType,
    pub sector: String,
    /// Source columns outside the canonical set, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Splits a comma-separated skills string into normalized tags.
///
/// Fragments are trimmed and lower-cased; empties and repeats are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for fragment in raw.split(',') {
        let tag = fragment.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
