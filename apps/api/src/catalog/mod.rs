// Internship catalog: loaded once at startup, read-only afterwards.

pub mod loader;
pub mod posting;

use chrono::{DateTime, Utc};

use crate::catalog::posting::Posting;

/// Ordered, immutable collection of postings.
#[derive(Debug, Clone)]
pub struct Catalog {
    postings: Vec<Posting>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(postings: Vec<Posting>, source: impl Into<String>) -> Self {
        Self {
            postings,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    /// Postings in source order.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
