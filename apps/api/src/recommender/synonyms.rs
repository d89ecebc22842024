//! Term normalization — expands comma-separated skill/interest text into a
//! canonical set using a fixed synonym table.

use std::collections::BTreeSet;

/// Canonical key → alternate spellings. Any member of a group pulls in the
/// whole group, key included. The table is not closed under expansion
/// ("javascript" expands to "js" only because it is listed under "js").
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("ml", &["machine learning", "ai"]),
    ("excel", &["spreadsheet", "ms excel"]),
    ("js", &["javascript"]),
    ("python", &["py"]),
];

/// Splits `raw` on commas, trims and lower-cases each term, drops empties,
/// then adds every synonym group the term belongs to.
///
/// Input terms are never dropped, only supplemented. Empty input yields an
/// empty set.
pub fn normalize_terms(raw: &str) -> BTreeSet<String> {
    let mut normalized = BTreeSet::new();

    for term in raw
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
    {
        for (key, synonyms) in SYNONYMS {
            if term == *key || synonyms.contains(&term.as_str()) {
                normalized.insert(key.to_string());
                normalized.extend(synonyms.iter().map(|s| s.to_string()));
            }
        }
        normalized.insert(term);
    }

    normalized
}

/// Every term that appears in the synonym table, keys first within a group.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    SYNONYMS
        .iter()
        .flat_map(|(key, synonyms)| std::iter::once(*key).chain(synonyms.iter().copied()))
}
