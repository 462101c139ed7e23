//! Bag-of-words semantic flavor matching.
//!
//! Every flavor text and the joined label text are reduced to lowercase
//! term-frequency bags with a small stopword set removed. Corpus entries
//! are ranked by cosine similarity against the label bag (stable sort, so
//! equal scores keep corpus order), and the final pick is uniform among
//! the top-ranked shortlist to keep generation from always landing on the
//! single best match.

use rustc_hash::FxHashMap;

use crate::core::config::DEFAULT_FLAVOR_SHORTLIST;
use crate::core::GenRng;
use crate::corpus::FlavorCorpus;
use crate::error::GenError;

use super::matcher::FlavorMatcher;

/// Words carrying no flavor signal, excluded from the index.
const STOPWORDS: [&str; 7] = ["for", "a", "of", "the", "and", "to", "in"];

/// Lowercased, stopword-filtered term-frequency bag.
fn bag(text: &str) -> FxHashMap<String, f64> {
    let mut counts = FxHashMap::default();
    for word in text.to_lowercase().split_whitespace() {
        if STOPWORDS.contains(&word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

fn cosine(a: &FxHashMap<String, f64>, b: &FxHashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(word, wa)| b.get(word).map(|wb| wa * wb))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Similarity-ranked flavor selection.
///
/// ## Example
///
/// ```
/// use cardsmith::core::GenRng;
/// use cardsmith::corpus::FlavorDatabase;
/// use cardsmith::flavor::{FlavorMatcher, SemanticMatcher};
///
/// let db = FlavorDatabase::from_text(
///     "the dragon burned the valley\n\na quiet pond\n\nmarket day in the city",
/// )
/// .unwrap();
///
/// let matcher = SemanticMatcher::new(1);
/// let mut rng = GenRng::new(42);
/// let pick = matcher
///     .pick(&["dragon".to_string()], &db, &mut rng)
///     .unwrap();
/// assert_eq!(pick, "the dragon burned the valley");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SemanticMatcher {
    shortlist: usize,
}

impl Default for SemanticMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FLAVOR_SHORTLIST)
    }
}

impl SemanticMatcher {
    /// Create a matcher that picks among the `shortlist` best matches.
    #[must_use]
    pub fn new(shortlist: usize) -> Self {
        // A zero shortlist would never pick anything.
        Self {
            shortlist: shortlist.max(1),
        }
    }
}

impl FlavorMatcher for SemanticMatcher {
    fn pick(
        &self,
        labels: &[String],
        corpus: &dyn FlavorCorpus,
        rng: &mut GenRng,
    ) -> Result<String, GenError> {
        let texts = corpus.texts();
        if texts.is_empty() {
            return Err(GenError::EmptyFlavorCorpus);
        }

        let query = bag(&labels.join(" "));
        let mut ranked: Vec<(usize, f64)> = texts
            .iter()
            .enumerate()
            .map(|(index, text)| (index, cosine(&query, &bag(text))))
            .collect();
        // stable descending sort: equal scores keep corpus order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(self.shortlist);

        tracing::debug!(shortlist = ?ranked, "flavor similarity shortlist");

        let &(index, score) = rng.choose(&ranked).ok_or(GenError::EmptyFlavorCorpus)?;
        tracing::debug!(index, score, "flavor chosen");
        Ok(texts[index].clone())
    }
}
