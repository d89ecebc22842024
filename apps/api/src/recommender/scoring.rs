//! Keyword scorer and ranker — the rule-based path that always produces an
//! answer when the LLM advisor cannot.
//!
//! Algorithm, per catalog entry:
//! 1. skill term found inside the entry's skills text    → +3
//! 2. interest term found inside the entry's interests   → +2
//! 3. work style found inside the entry's style text     → +1
//!
//! Matching is plain substring containment on lower-cased text, so "java"
//! also matches "javascript". Entries are then stable-sorted by score and
//! the top five returned.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CatalogEntry};
use super::synonyms::normalize_terms;

pub const SKILL_WEIGHT: u32 = 3;
pub const INTEREST_WEIGHT: u32 = 2;
pub const STYLE_WEIGHT: u32 = 1;

/// Maximum number of recommendations returned.
pub const TOP_N: usize = 5;

/// Explanation used when nothing in the profile matched.
pub const GENERAL_MATCH: &str = "General match";

/// A user's stated preferences, as free text. Missing fields deserialize
/// to empty strings and simply score nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Comma-separated skill terms.
    pub skills: String,
    /// Comma-separated interest terms.
    pub interests: String,
    /// Preferred work style.
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub role: String,
    pub description: String,
    pub score: u32,
    /// Up to two matched terms joined with ", ", or [`GENERAL_MATCH`].
    pub explanation: String,
    pub roadmap: String,
}

/// Profile terms after normalization, computed once per call.
struct NormalizedProfile {
    skills: BTreeSet<String>,
    interests: BTreeSet<String>,
    style: String,
}

impl NormalizedProfile {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            skills: normalize_terms(&profile.skills),
            interests: normalize_terms(&profile.interests),
            style: profile.style.trim().to_lowercase(),
        }
    }
}

/// Ranks every catalog entry against `profile` and returns the best
/// [`TOP_N`], highest score first. Entries with equal scores keep catalog
/// order. Zero-score entries are included when they make the cut.
pub fn recommend(profile: &Profile, catalog: &Catalog) -> Vec<Recommendation> {
    let normalized = NormalizedProfile::from_profile(profile);

    let mut ranked: Vec<Recommendation> = catalog
        .entries()
        .iter()
        .map(|entry| score_entry(entry, &normalized))
        .collect();

    // sort_by is stable: ties stay in catalog order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(TOP_N);
    ranked
}

fn score_entry(entry: &CatalogEntry, profile: &NormalizedProfile) -> Recommendation {
    let skills_text = entry.skills_text.to_lowercase();
    let interests_text = entry.interests_text.to_lowercase();
    let style_text = entry.style_text.to_lowercase();

    let mut score = 0;
    let mut matched: Vec<&str> = Vec::new();

    for skill in profile.skills.iter().map(|s| s.trim()) {
        if !skill.is_empty() && skills_text.contains(skill) {
            score += SKILL_WEIGHT;
            matched.push(skill);
        }
    }

    for interest in profile.interests.iter().map(|i| i.trim()) {
        if !interest.is_empty() && interests_text.contains(interest) {
            score += INTEREST_WEIGHT;
            matched.push(interest);
        }
    }

    if !profile.style.is_empty() && style_text.contains(profile.style.as_str()) {
        score += STYLE_WEIGHT;
        matched.push(&profile.style);
    }

    Recommendation {
        role: entry.role.clone(),
        description: entry.description.clone(),
        score,
        explanation: explain(&matched),
        roadmap: entry.roadmap_or_default().to_string(),
    }
}

fn explain(matched: &[&str]) -> String {
    if matched.is_empty() {
        GENERAL_MATCH.to_string()
    } else {
        matched.iter().take(2).copied().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::catalog::NO_ROADMAP;

    fn entry(role: &str, skills: &str, interests: &str, style: &str) -> CatalogEntry {
        CatalogEntry {
            role: role.to_string(),
            skills_text: skills.to_string(),
            interests_text: interests.to_string(),
            style_text: style.to_string(),
            description: format!("{role} description"),
            roadmap: Some(format!("{role} roadmap")),
        }
    }

    fn profile(skills: &str, interests: &str, style: &str) -> Profile {
        Profile {
            skills: skills.to_string(),
            interests: interests.to_string(),
            style: style.to_string(),
        }
    }

    fn catalog(entries: Vec<CatalogEntry>) -> Catalog {
        Catalog::new(entries).unwrap()
    }

    #[test]
    fn test_skill_match_adds_three() {
        let catalog = catalog(vec![entry(
            "Data Analyst",
            "Strong Python and SQL skills",
            "",
            "",
        )]);
        let result = recommend(&profile("python", "", ""), &catalog);

        // "python" matches; its synonym "py" is also a substring of "python".
        assert_eq!(result.len(), 1);
        assert!(result[0].score >= SKILL_WEIGHT);
        assert_eq!(result[0].score, 2 * SKILL_WEIGHT);
        assert_eq!(result[0].explanation, "py, python");
    }

    #[test]
    fn test_interest_and_style_weights() {
        let catalog = catalog(vec![entry("Researcher", "", "Science, Research", "Remote")]);
        let result = recommend(&profile("", "research", " REMOTE "), &catalog);
        assert_eq!(result[0].score, INTEREST_WEIGHT + STYLE_WEIGHT);
        assert_eq!(result[0].explanation, "research, remote");
    }

    #[test]
    fn test_no_match_gives_general_match_and_zero() {
        let catalog = catalog(vec![entry("Chef", "Cooking", "Food", "Team")]);
        let result = recommend(&profile("rust", "astronomy", "solo"), &catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].score, 0);
        assert_eq!(result[0].explanation, GENERAL_MATCH);
    }

    #[test]
    fn test_empty_profile_scores_everything_zero() {
        let catalog = catalog(vec![
            entry("A", "python", "data", "remote"),
            entry("B", "excel", "finance", "office"),
        ]);
        let result = recommend(&Profile::default(), &catalog);
        assert!(result.iter().all(|r| r.score == 0));
        assert!(result.iter().all(|r| r.explanation == GENERAL_MATCH));
    }

    #[test]
    fn test_returns_at_most_five_sorted_descending() {
        let entries = (0..8)
            .map(|i| entry(&format!("Role {i}"), if i % 2 == 0 { "sql" } else { "" }, "", ""))
            .collect();
        let result = recommend(&profile("sql", "", ""), &catalog(entries));

        assert_eq!(result.len(), TOP_N);
        assert!(result.windows(2).all(|w| w[0].score >= w[1].score));
        let roles: Vec<&str> = result.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, ["Role 0", "Role 2", "Role 4", "Role 6", "Role 1"]);
    }

    #[test]
    fn test_small_catalog_returns_every_row() {
        let catalog = catalog(vec![
            entry("A", "", "", ""),
            entry("B", "go", "", ""),
            entry("C", "", "", ""),
        ]);
        let result = recommend(&profile("go", "", ""), &catalog);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].role, "B");
    }

    #[test]
    fn test_ties_keep_catalog_order_across_calls() {
        let catalog = catalog(vec![
            entry("First", "sql", "", ""),
            entry("Second", "", "", ""),
            entry("Third", "sql", "", ""),
            entry("Fourth", "", "", ""),
        ]);
        let p = profile("sql", "", "");

        for _ in 0..3 {
            let roles: Vec<String> = recommend(&p, &catalog)
                .into_iter()
                .map(|r| r.role)
                .collect();
            assert_eq!(roles, ["First", "Third", "Second", "Fourth"]);
        }
    }

    #[test]
    fn test_substring_matching_hits_inside_longer_words() {
        let catalog = catalog(vec![entry("Frontend", "JavaScript, React", "", "")]);
        let result = recommend(&profile("java", "", ""), &catalog);
        assert_eq!(result[0].score, SKILL_WEIGHT);
        assert_eq!(result[0].explanation, "java");
    }

    #[test]
    fn test_synonym_expansion_matches_catalog_wording() {
        let catalog = catalog(vec![entry(
            "ML Engineer",
            "ML, Deep learning, Machine Learning pipelines",
            "",
            "",
        )]);
        // "ml" pulls in "machine learning" and "ai"; "ml" and "machine learning" match.
        let result = recommend(&profile("ML", "", ""), &catalog);
        assert_eq!(result[0].score, 2 * SKILL_WEIGHT);
    }

    #[test]
    fn test_explanation_keeps_first_two_matches() {
        let catalog = catalog(vec![entry("Analyst", "sql, tableau", "finance", "office")]);
        let result = recommend(&profile("tableau, sql", "finance", "office"), &catalog);
        assert_eq!(
            result[0].score,
            2 * SKILL_WEIGHT + INTEREST_WEIGHT + STYLE_WEIGHT
        );
        // Skills are tried in sorted order, before interests and style.
        assert_eq!(result[0].explanation, "sql, tableau");
    }

    #[test]
    fn test_missing_roadmap_defaults() {
        let mut e = entry("Writer", "writing", "", "");
        e.roadmap = None;
        let result = recommend(&profile("writing", "", ""), &catalog(vec![e]));
        assert_eq!(result[0].roadmap, NO_ROADMAP);
        assert_eq!(result[0].description, "Writer description");
    }
}
