//! Recommendation Engine — scores the head of the catalog against a profile,
//! annotates missing skills with learning resources, and returns the top few.
//!
//! The engine holds no mutable state. Each call reads the shared catalog and
//! allocates its own results, so concurrent calls need no locking.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::posting::Posting;
use crate::catalog::Catalog;
use crate::recommendation::profile::Profile;
use crate::recommendation::scoring::{matched_tags, missing_tags, score_posting, MAX_SCORE};
use crate::resources::{ResourceBundle, ResourceCatalog};

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("internship catalog is not loaded")]
    CatalogUnavailable,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Only the first `candidate_window` postings in catalog order are scored.
    pub candidate_window: usize,
    /// Postings must score strictly above this to be recommended.
    pub inclusion_threshold: f64,
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            candidate_window: 10,
            inclusion_threshold: 20.0,
            max_results: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingSkill {
    pub skill: String,
    pub resources: ResourceBundle,
}

/// A posting plus its score and learning resources for the skills it
/// requires that the candidate lacks.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub posting: Posting,
    pub score: f64,
    pub missing_skills_with_resources: Vec<MissingSkill>,
}

pub struct RecommendationEngine {
    resources: ResourceCatalog,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(resources: ResourceCatalog, config: EngineConfig) -> Self {
        Self { resources, config }
    }

    /// Ranks postings for `profile`.
    ///
    /// Returns `CatalogUnavailable` when no catalog is loaded, which callers
    /// must keep distinct from an empty list of matches.
    pub fn recommend(
        &self,
        catalog: Option<&Catalog>,
        profile: &Profile,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let catalog = catalog.ok_or(RecommendError::CatalogUnavailable)?;
        let candidate = profile.normalize();

        debug!(
            skills = ?candidate.skills,
            locations = ?candidate.locations,
            "Scoring profile"
        );

        let mut recommendations = Vec::new();

        for posting in catalog.postings().iter().take(self.config.candidate_window) {
            let breakdown = score_posting(&candidate, posting);
            let score = breakdown.total();
            debug_assert!(score <= MAX_SCORE);

            let missing = missing_tags(&candidate.skills, &posting.tags);

            debug!(
                posting_id = posting.id,
                title = %posting.title,
                required = ?posting.tags,
                matched = ?matched_tags(&candidate.skills, &posting.tags),
                missing = ?missing,
                location_score = breakdown.location,
                skill_score = breakdown.skills,
                total = score,
                "Scored posting"
            );

            if score > self.config.inclusion_threshold {
                recommendations.push(Recommendation {
                    posting: posting.clone(),
                    score,
                    missing_skills_with_resources: self.resources_for(&missing),
                });
            }
        }

        let qualifying = recommendations.len();

        // Stable: equal scores keep catalog order
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(self.config.max_results);

        info!(
            "Recommendation pass: {} qualifying, {} returned",
            qualifying,
            recommendations.len()
        );

        Ok(recommendations)
    }

    /// Attaches resources to each missing tag that has a catalog entry;
    /// tags without one are skipped.
    fn resources_for(&self, missing: &[&str]) -> Vec<MissingSkill> {
        missing
            .iter()
            .filter_map(|tag| {
                self.resources.lookup(tag).map(|bundle| MissingSkill {
                    skill: capitalize(tag),
                    resources: bundle.clone(),
                })
            })
            .collect()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
