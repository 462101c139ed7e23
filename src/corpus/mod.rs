//! Corpus loading: template cards and flavor texts.
//!
//! Both corpora share a line-oriented text format: entries separated by
//! blank lines, with separator entries marked by a run of tildes. The
//! provider traits (`CardCorpus`, `FlavorCorpus`) are what the rest of the
//! crate consumes, so tests can inject hand-built doubles instead of
//! loading files.

pub mod card;
pub mod flavor;

pub use card::{CardCorpus, CardDatabase, CorpusCard};
pub use flavor::{FlavorCorpus, FlavorDatabase};

/// Marker token identifying a non-card separator entry in corpus files.
pub const ENTRY_MARKER: &str = "~~~~~~~~";

/// Split a corpus blob into surviving entries.
///
/// Entries are separated by blank lines; marker entries and whitespace-only
/// entries (for example a trailing newline run at end of file) are skipped.
fn entries(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n")
        .filter(|entry| !entry.contains(ENTRY_MARKER))
        .filter(|entry| !entry.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_skip_markers_and_blanks() {
        let text = "one\n\n~~~~~~~~ set marker ~~~~~~~~\n\ntwo\nstill two\n\n\n";
        let found: Vec<_> = entries(text).collect();
        assert_eq!(found, vec!["one", "two\nstill two"]);
    }

    #[test]
    fn test_entries_of_empty_text() {
        assert_eq!(entries("").count(), 0);
        assert_eq!(entries("\n\n\n\n").count(), 0);
    }
}
