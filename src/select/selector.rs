//! Label-aware selection of a template card for a chosen color.
//!
//! Candidates are the cards keyed under the chosen color's name. Every
//! (candidate, label) pair where the label is a substring of the card name
//! records the candidate's index; a card matching three labels appears
//! three times and is three times as likely to be picked. With no matches
//! at all, the pick is uniform over every candidate for the color.

use crate::color::ColorCategory;
use crate::core::GenRng;
use crate::corpus::{CardCorpus, CorpusCard};
use crate::error::GenError;

/// Selects a template card from a corpus.
pub struct CardSelector<'a> {
    corpus: &'a dyn CardCorpus,
}

impl<'a> CardSelector<'a> {
    /// Create a selector over the given corpus.
    #[must_use]
    pub fn new(corpus: &'a dyn CardCorpus) -> Self {
        Self { corpus }
    }

    /// Select a template card for the chosen color and labels.
    ///
    /// A `None` color has no color key and therefore no candidates; like an
    /// unknown or empty key it fails with `NoCandidates` rather than
    /// defaulting to some other color.
    pub fn select(
        &self,
        color: Option<ColorCategory>,
        labels: &[String],
        rng: &mut GenRng,
    ) -> Result<CorpusCard, GenError> {
        let key = match color {
            Some(color) => color.name().to_string(),
            None => "None".to_string(),
        };
        let candidates = match color {
            Some(_) => self.corpus.candidates(&key),
            None => &[],
        };
        if candidates.is_empty() {
            return Err(GenError::NoCandidates { key });
        }

        let mut matched: Vec<usize> = Vec::new();
        for (index, card) in candidates.iter().enumerate() {
            for label in labels {
                if card.name.contains(label.as_str()) {
                    tracing::debug!(label = %label, name = %card.name, "label matched card name");
                    matched.push(index);
                }
            }
        }

        let index = if matched.is_empty() {
            rng.gen_range_usize(0..candidates.len())
        } else {
            matched[rng.gen_range_usize(0..matched.len())]
        };
        Ok(candidates[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CardDatabase;

    fn labels(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// Ten red cards, one of them named "Shadow Dragon".
    fn red_corpus() -> CardDatabase {
        let mut entries = vec!["Shadow Dragon {4}{R}{R}\ncreature dragon\nflying\n5/5".to_string()];
        for i in 0..9 {
            entries.push(format!("Ember Rat {i} {{R}}\ncreature rat\n1/1"));
        }
        CardDatabase::from_text(&entries.join("\n\n")).unwrap()
    }

    #[test]
    fn test_unique_label_match_always_wins() {
        let corpus = red_corpus();
        let selector = CardSelector::new(&corpus);

        for seed in 0..50 {
            let mut rng = GenRng::new(seed);
            let card = selector
                .select(Some(ColorCategory::Red), &labels(&["Dragon"]), &mut rng)
                .unwrap();
            assert_eq!(card.name, "Shadow Dragon");
        }
    }

    #[test]
    fn test_label_match_is_substring_and_case_sensitive() {
        let corpus = red_corpus();
        let selector = CardSelector::new(&corpus);
        let mut rng = GenRng::new(42);

        // "dragon" (lowercase) matches nothing; the pick is uniform, so it
        // must merely be a red candidate.
        let card = selector
            .select(Some(ColorCategory::Red), &labels(&["dragon"]), &mut rng)
            .unwrap();
        assert!(corpus.candidates("Red").contains(&card));
    }

    #[test]
    fn test_multiple_matching_labels_still_pick_the_card() {
        let corpus = red_corpus();
        let selector = CardSelector::new(&corpus);
        let mut rng = GenRng::new(42);

        // Both labels match only "Shadow Dragon"; its index is recorded
        // twice, the pick is still certain.
        let card = selector
            .select(
                Some(ColorCategory::Red),
                &labels(&["Shadow", "Dragon"]),
                &mut rng,
            )
            .unwrap();
        assert_eq!(card.name, "Shadow Dragon");
    }

    #[test]
    fn test_no_labels_picks_any_candidate() {
        let corpus = red_corpus();
        let selector = CardSelector::new(&corpus);
        let mut rng = GenRng::new(42);

        let card = selector
            .select(Some(ColorCategory::Red), &[], &mut rng)
            .unwrap();
        assert!(corpus.candidates("Red").contains(&card));
    }

    #[test]
    fn test_empty_color_key_fails() {
        let corpus = red_corpus();
        let selector = CardSelector::new(&corpus);
        let mut rng = GenRng::new(42);

        let err = selector
            .select(Some(ColorCategory::Blue), &labels(&["Dragon"]), &mut rng)
            .unwrap_err();
        match err {
            GenError::NoCandidates { key } => assert_eq!(key, "Blue"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_color_fails() {
        let corpus = red_corpus();
        let selector = CardSelector::new(&corpus);
        let mut rng = GenRng::new(42);

        let err = selector.select(None, &labels(&["Dragon"]), &mut rng).unwrap_err();
        match err {
            GenError::NoCandidates { key } => assert_eq!(key, "None"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
