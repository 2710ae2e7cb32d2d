//! Per-posting score components.
//!
//! total = location (0 | 50) + skills (matched / required × 50) + synergy (0 | 25)
//!
//! Synergy is awarded only when both other components are strictly positive,
//! so no posting scores above 125.

use std::collections::HashSet;

use crate::catalog::posting::Posting;
use crate::recommendation::profile::NormalizedProfile;

pub const LOCATION_MATCH_SCORE: f64 = 50.0;
pub const SKILL_MATCH_WEIGHT: f64 = 50.0;
pub const SYNERGY_BONUS: f64 = 25.0;
pub const MAX_SCORE: f64 = LOCATION_MATCH_SCORE + SKILL_MATCH_WEIGHT + SYNERGY_BONUS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub location: f64,
    pub skills: f64,
    pub synergy: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.location + self.skills + self.synergy
    }
}

pub fn score_posting(candidate: &NormalizedProfile, posting: &Posting) -> ScoreBreakdown {
    let location = location_score(&candidate.locations, &posting.location);
    let skills = skill_score(&candidate.skills, &posting.tags);
    let synergy = if location > 0.0 && skills > 0.0 {
        SYNERGY_BONUS
    } else {
        0.0
    };

    ScoreBreakdown {
        location,
        skills,
        synergy,
    }
}

/// 50 when any preference is a substring of the posting's location.
/// `preferences` must already be normalized.
pub fn location_score(preferences: &[String], posting_location: &str) -> f64 {
    let location = posting_location.trim().to_lowercase();
    if preferences.iter().any(|p| location.contains(p.as_str())) {
        LOCATION_MATCH_SCORE
    } else {
        0.0
    }
}

/// Fraction of the posting's tags the candidate has, scaled to 50.
/// Zero when either side is empty.
pub fn skill_score(skills: &HashSet<String>, tags: &[String]) -> f64 {
    if tags.is_empty() || skills.is_empty() {
        return 0.0;
    }
    let matched = matched_tags(skills, tags).len();
    matched as f64 / tags.len() as f64 * SKILL_MATCH_WEIGHT
}

/// Tags the candidate already has, in tag order.
pub fn matched_tags<'a>(skills: &HashSet<String>, tags: &'a [String]) -> Vec<&'a str> {
    tags.iter()
        .filter(|t| skills.contains(t.as_str()))
        .map(String::as_str)
        .collect()
}

/// Tags the candidate lacks, in tag order.
pub fn missing_tags<'a>(skills: &HashSet<String>, tags: &'a [String]) -> Vec<&'a str> {
    tags.iter()
        .filter(|t| !skills.contains(t.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_location_substring_matches() {
        let prefs = strings(&["bangalore"]);
        assert_eq!(location_score(&prefs, "Bangalore Urban"), 50.0);
    }

    #[test]
    fn test_location_requires_full_preference_substring() {
        let prefs = strings(&["bangalor-e"]);
        assert_eq!(location_score(&prefs, "Bangalore Urban"), 0.0);
    }

    #[test]
    fn test_location_any_preference_matches() {
        let prefs = strings(&["delhi", "pune"]);
        assert_eq!(location_score(&prefs, "Pune, Maharashtra"), 50.0);
        assert_eq!(location_score(&[], "Pune"), 0.0);
    }

    #[test]
    fn test_skill_score_ratio() {
        let score = skill_score(&skills(&["react", "python"]), &strings(&["react", "css"]));
        assert!((score - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_skill_score_empty_tags_is_zero() {
        assert_eq!(skill_score(&skills(&["react"]), &[]), 0.0);
    }

    #[test]
    fn test_skill_score_no_candidate_skills_is_zero() {
        assert_eq!(skill_score(&HashSet::new(), &strings(&["react"])), 0.0);
    }

    #[test]
    fn test_synergy_only_when_both_positive() {
        let posting = crate::recommendation::engine::tests::make_posting(
            0,
            "Bangalore Urban",
            &["react", "css"],
        );

        let both = NormalizedProfile {
            skills: skills(&["react"]),
            locations: strings(&["bangalore"]),
        };
        let breakdown = score_posting(&both, &posting);
        assert_eq!(breakdown.synergy, SYNERGY_BONUS);
        assert_eq!(breakdown.total(), 100.0);

        let location_only = NormalizedProfile {
            skills: skills(&["java"]),
            locations: strings(&["bangalore"]),
        };
        let breakdown = score_posting(&location_only, &posting);
        assert_eq!(breakdown.synergy, 0.0);
        assert_eq!(breakdown.total(), 50.0);

        let skills_only = NormalizedProfile {
            skills: skills(&["react"]),
            locations: strings(&["chennai"]),
        };
        let breakdown = score_posting(&skills_only, &posting);
        assert_eq!(breakdown.synergy, 0.0);
        assert_eq!(breakdown.total(), 25.0);
    }

    #[test]
    fn test_full_match_hits_max_score() {
        let posting =
            crate::recommendation::engine::tests::make_posting(0, "Pune", &["sql", "excel"]);
        let candidate = NormalizedProfile {
            skills: skills(&["sql", "excel", "python"]),
            locations: strings(&["pune"]),
        };
        let breakdown = score_posting(&candidate, &posting);
        assert_eq!(breakdown.total(), MAX_SCORE);
        assert!(breakdown.total() <= 125.0);
    }

    #[test]
    fn test_missing_and_matched_preserve_tag_order() {
        let tags = strings(&["sql", "react", "python", "css"]);
        let have = skills(&["react", "css"]);
        assert_eq!(matched_tags(&have, &tags), vec!["react", "css"]);
        assert_eq!(missing_tags(&have, &tags), vec!["sql", "python"]);
    }
}
