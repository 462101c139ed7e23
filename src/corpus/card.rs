//! Template cards - parsing and the color-keyed card database.
//!
//! A card entry looks like:
//!
//! ```text
//! Shadow Dragon {4}{R}{R}
//! creature dragon
//! flying
//! 5/5
//! ```
//!
//! First line: name tokens with a trailing mana-cost token. Second line:
//! type line. If the type line contains `creature` (case-sensitive), the
//! last line is power/toughness and the lines in between are rules text;
//! otherwise every remaining line is rules text.
//!
//! Cards are indexed under a color-combination key derived from the mana
//! cost: the letters B, G, R, U, W are checked in that (sorted) order and
//! matched color names are comma-joined, so a card costing `{B}{R}` keys
//! under `Black,Red`.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::GenError;

use super::entries;

/// Mana-cost letters in sorted order, with the color names they key.
const COLOR_LETTERS: [(char, &str); 5] = [
    ('B', "Black"),
    ('G', "Green"),
    ('R', "Red"),
    ('U', "Blue"),
    ('W', "White"),
];

/// A template card parsed from the card corpus. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusCard {
    /// Card name (first-line tokens minus the mana cost).
    pub name: String,

    /// Mana cost, e.g. `{4}{R}{R}`.
    pub mana_cost: String,

    /// Type line, verbatim.
    pub type_line: String,

    /// Rules text, one line per ability.
    pub rules_text: SmallVec<[String; 4]>,

    /// Power/toughness, present only for creature entries.
    pub power_toughness: Option<String>,
}

impl CorpusCard {
    /// Parse one corpus entry.
    ///
    /// Fails with `CorpusParse` naming the entry when the first line has no
    /// tokens, the type line is missing, or a creature entry has no
    /// power/toughness line left.
    pub fn parse(entry: &str) -> Result<Self, GenError> {
        let lines: Vec<&str> = entry.lines().collect();
        let first = lines.first().copied().unwrap_or("");

        let parse_err = |reason: &str| GenError::CorpusParse {
            entry: first.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = first.split_whitespace().collect();
        let Some((&mana_cost, name_tokens)) = tokens.split_last() else {
            return Err(parse_err("first line has no mana cost token"));
        };
        let name = name_tokens.join(" ");

        let Some(&type_line) = lines.get(1) else {
            return Err(parse_err("missing type line"));
        };

        let rest = &lines[2..];
        let (rules, power_toughness) = if type_line.contains("creature") {
            let Some((&pt, rules)) = rest.split_last() else {
                return Err(parse_err("creature entry has no power/toughness line"));
            };
            (rules, Some(pt.to_string()))
        } else {
            (rest, None)
        };

        Ok(Self {
            name,
            mana_cost: mana_cost.to_string(),
            type_line: type_line.to_string(),
            rules_text: rules.iter().map(|line| line.to_string()).collect(),
            power_toughness,
        })
    }

    /// The color-combination key this card indexes under.
    ///
    /// Comma-joined color names for each mana-cost letter present, in the
    /// fixed sorted letter order B, G, R, U, W. Colorless cards key under
    /// the empty string.
    #[must_use]
    pub fn color_key(&self) -> String {
        let names: Vec<&str> = COLOR_LETTERS
            .iter()
            .filter(|(letter, _)| self.mana_cost.contains(*letter))
            .map(|&(_, name)| name)
            .collect();
        names.join(",")
    }

    /// Whether the type line marks this entry as a creature.
    ///
    /// Case-sensitive on purpose: the corpus is lowercased text and a
    /// capitalized `Creature` is not recognized.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.type_line.contains("creature")
    }
}

/// Provides template cards grouped by color-combination key.
///
/// The selector only ever sees this trait, so tests inject hand-built
/// corpora without touching the filesystem.
pub trait CardCorpus {
    /// All candidate cards for a color key, in corpus order.
    ///
    /// Unknown keys yield an empty slice.
    fn candidates(&self, key: &str) -> &[CorpusCard];
}

/// In-memory card database, indexed by color-combination key.
///
/// ## Example
///
/// ```
/// use cardsmith::corpus::{CardCorpus, CardDatabase};
///
/// let text = "Shadow Dragon {4}{R}{R}\ncreature dragon\nflying\n5/5";
/// let db = CardDatabase::from_text(text).unwrap();
///
/// assert_eq!(db.candidates("Red").len(), 1);
/// assert!(db.candidates("Blue").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardDatabase {
    by_color: FxHashMap<String, Vec<CorpusCard>>,
    len: usize,
}

impl CardDatabase {
    /// Load a database from corpus text.
    ///
    /// Fails fast on the first malformed entry.
    pub fn from_text(text: &str) -> Result<Self, GenError> {
        let mut by_color: FxHashMap<String, Vec<CorpusCard>> = FxHashMap::default();
        let mut len = 0;
        for entry in entries(text) {
            let card = CorpusCard::parse(entry)?;
            by_color.entry(card.color_key()).or_default().push(card);
            len += 1;
        }
        tracing::debug!(cards = len, keys = by_color.len(), "loaded card corpus");
        Ok(Self { by_color, len })
    }

    /// Load a database from a corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GenError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Total number of cards loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the database holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the color keys present in the corpus.
    pub fn color_keys(&self) -> impl Iterator<Item = &str> {
        self.by_color.keys().map(String::as_str)
    }
}

impl CardCorpus for CardDatabase {
    fn candidates(&self, key: &str) -> &[CorpusCard] {
        self.by_color.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAGON: &str = "Shadow Dragon {4}{R}{R}\ncreature dragon\nflying\n5/5";

    #[test]
    fn test_parse_creature_entry() {
        let card = CorpusCard::parse(DRAGON).unwrap();
        assert_eq!(card.name, "Shadow Dragon");
        assert_eq!(card.mana_cost, "{4}{R}{R}");
        assert_eq!(card.type_line, "creature dragon");
        assert_eq!(card.rules_text.as_slice(), ["flying".to_string()]);
        assert_eq!(card.power_toughness.as_deref(), Some("5/5"));
        assert!(card.is_creature());
    }

    #[test]
    fn test_parse_noncreature_entry() {
        let card =
            CorpusCard::parse("Fireball {X}{R}\nsorcery\ndeal X damage to any target").unwrap();
        assert_eq!(card.name, "Fireball");
        assert_eq!(
            card.rules_text.as_slice(),
            ["deal X damage to any target".to_string()]
        );
        assert_eq!(card.power_toughness, None);
        assert!(!card.is_creature());
    }

    #[test]
    fn test_parse_vanilla_creature_has_empty_rules() {
        let card = CorpusCard::parse("Grizzly {1}{G}\ncreature bear\n2/2").unwrap();
        assert!(card.rules_text.is_empty());
        assert_eq!(card.power_toughness.as_deref(), Some("2/2"));
    }

    #[test]
    fn test_creature_check_is_case_sensitive() {
        // Capitalized "Creature" is not recognized; the last line stays
        // rules text.
        let card = CorpusCard::parse("Grizzly {1}{G}\nCreature Bear\n2/2").unwrap();
        assert!(!card.is_creature());
        assert_eq!(card.power_toughness, None);
        assert_eq!(card.rules_text.as_slice(), ["2/2".to_string()]);
    }

    #[test]
    fn test_parse_missing_type_line_fails() {
        let err = CorpusCard::parse("Lonely Card {1}").unwrap_err();
        match err {
            GenError::CorpusParse { entry, reason } => {
                assert_eq!(entry, "Lonely Card {1}");
                assert!(reason.contains("type line"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_creature_without_power_toughness_fails() {
        let err = CorpusCard::parse("Grizzly {1}{G}\ncreature bear").unwrap_err();
        assert!(matches!(err, GenError::CorpusParse { .. }));
    }

    #[test]
    fn test_parse_blank_first_line_fails() {
        let err = CorpusCard::parse("\ncreature bear\n2/2").unwrap_err();
        assert!(matches!(err, GenError::CorpusParse { .. }));
    }

    #[test]
    fn test_color_key_single() {
        let card = CorpusCard::parse(DRAGON).unwrap();
        assert_eq!(card.color_key(), "Red");
    }

    #[test]
    fn test_color_key_multicolor_follows_letter_sort_order() {
        let card = CorpusCard::parse("Bolt of Ruin {B}{R}\nsorcery\ndestroy").unwrap();
        assert_eq!(card.color_key(), "Black,Red");

        // U sorts before W, so Blue precedes White.
        let card = CorpusCard::parse("Court Herald {W}{U}\ncreature advisor\n1/1").unwrap();
        assert_eq!(card.color_key(), "Blue,White");
    }

    #[test]
    fn test_color_key_colorless_is_empty() {
        let card = CorpusCard::parse("Juggernaut {4}\ncreature juggernaut\n5/3").unwrap();
        assert_eq!(card.color_key(), "");
    }

    #[test]
    fn test_database_groups_by_color_key() {
        let text = format!("{DRAGON}\n\nFireball {{X}}{{R}}\nsorcery\ndamage\n\nPearl Guard {{W}}\ncreature soldier\n1/1\n\n");
        let db = CardDatabase::from_text(&text).unwrap();

        assert_eq!(db.len(), 3);
        assert_eq!(db.candidates("Red").len(), 2);
        assert_eq!(db.candidates("White").len(), 1);
        assert!(db.candidates("Green").is_empty());

        let mut keys: Vec<_> = db.color_keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Red", "White"]);
    }

    #[test]
    fn test_database_skips_marker_entries() {
        let text = format!("~~~~~~~~ set one ~~~~~~~~\n\n{DRAGON}");
        let db = CardDatabase::from_text(&text).unwrap();
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_database_fails_fast_on_malformed_entry() {
        let text = format!("{DRAGON}\n\nBroken {{1}}");
        let err = CardDatabase::from_text(&text).unwrap_err();
        assert!(matches!(err, GenError::CorpusParse { .. }));
    }

    #[test]
    fn test_database_from_missing_path_is_io_error() {
        let err = CardDatabase::from_path("/nonexistent/cards.db").unwrap_err();
        assert!(matches!(err, GenError::CorpusIo(_)));
    }

    #[test]
    fn test_card_serde_round_trip() {
        let card = CorpusCard::parse(DRAGON).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let back: CorpusCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
