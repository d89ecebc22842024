// Rule-based career recommender.
// Pure and synchronous: normalizes profile terms, scores every catalog row by
// keyword overlap, returns the top matches. No I/O after the catalog load.

pub mod catalog;
pub mod scoring;
pub mod synonyms;

pub use catalog::Catalog;
pub use scoring::{recommend, Profile, Recommendation};
