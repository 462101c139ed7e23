//! Flavor texts - the flat corpus of narrative snippets.
//!
//! Same entry format as the card corpus (blank-line separated, marker
//! entries skipped), with two leftover markup characters (`|` and a
//! backtick) stripped from each entry on load.

use std::path::Path;

use crate::error::GenError;

use super::entries;

/// Provides the flat list of flavor texts.
pub trait FlavorCorpus {
    /// All flavor texts, in corpus order.
    fn texts(&self) -> &[String];
}

/// In-memory flavor database.
///
/// ## Example
///
/// ```
/// use cardsmith::corpus::{FlavorCorpus, FlavorDatabase};
///
/// let db = FlavorDatabase::from_text("the |sky| burned `red`\n\nquiet pond").unwrap();
/// assert_eq!(db.texts()[0], "the sky burned red");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlavorDatabase {
    texts: Vec<String>,
}

impl FlavorDatabase {
    /// Load a database from corpus text.
    pub fn from_text(text: &str) -> Result<Self, GenError> {
        let texts: Vec<String> = entries(text)
            .map(|entry| entry.replace('|', "").replace('`', ""))
            .collect();
        tracing::debug!(flavors = texts.len(), "loaded flavor corpus");
        Ok(Self { texts })
    }

    /// Load a database from a corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GenError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Number of flavor texts loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the database holds no flavor texts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl FlavorCorpus for FlavorDatabase {
    fn texts(&self) -> &[String] {
        &self.texts
    }
}
