//! Career catalog — the immutable table of roles the fallback recommender
//! ranks. Loaded once at startup from CSV and shared read-only afterwards.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Shown when a catalog row has no roadmap.
pub const NO_ROADMAP: &str = "No roadmap available";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file {} is missing", path.display())]
    Missing { path: PathBuf },

    #[error("catalog file {} is empty", path.display())]
    Empty { path: PathBuf },

    #[error("catalog contains no career rows")]
    NoRows,

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One career role. Field names follow the CSV header
/// (`role, skills, interests, style, description, roadmap`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub role: String,
    #[serde(rename = "skills", default)]
    pub skills_text: String,
    #[serde(rename = "interests", default)]
    pub interests_text: String,
    #[serde(rename = "style", default)]
    pub style_text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roadmap: Option<String>,
}

impl CatalogEntry {
    /// The roadmap text, or [`NO_ROADMAP`] when the cell is absent or blank.
    pub fn roadmap_or_default(&self) -> &str {
        self.roadmap
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(NO_ROADMAP)
    }
}

/// Ordered, read-only list of career roles. Iteration order is file order,
/// which is also the tie-break order when ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Loads the catalog from a CSV file. Fails if the file does not exist,
    /// has zero bytes, or holds a header but no rows.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::Missing {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(CatalogError::Io(e)),
        };

        if metadata.len() == 0 {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        Self::from_reader(std::fs::File::open(path)?)
    }

    /// Parses catalog rows from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = reader
            .deserialize::<CatalogEntry>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::NoRows);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Never zero; construction rejects empty catalogs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
