//! Generator configuration.
//!
//! All tunable knobs live here so callers configure a generation pass in
//! one place instead of threading constants through each component.

use serde::{Deserialize, Serialize};

/// Default classification distance threshold.
///
/// A sample further than this from every reference color is classified as
/// no category. The value is admittedly arbitrary; it only needs to reject
/// colors that are not close to anything.
pub const DEFAULT_CLASSIFY_THRESHOLD: f64 = 100.0;

/// Default size of the flavor shortlist the semantic matcher picks from.
pub const DEFAULT_FLAVOR_SHORTLIST: usize = 10;

/// Configuration for a generation pass.
///
/// ## Example
///
/// ```
/// use cardsmith::core::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_seed(42)
///     .with_flavor_shortlist(5);
///
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum reference-color distance that still counts as a match.
    pub classify_threshold: f64,

    /// How many top-ranked flavor texts the semantic matcher picks from.
    pub flavor_shortlist: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            classify_threshold: DEFAULT_CLASSIFY_THRESHOLD,
            flavor_shortlist: DEFAULT_FLAVOR_SHORTLIST,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set the classification distance threshold.
    #[must_use]
    pub fn with_classify_threshold(mut self, threshold: f64) -> Self {
        self.classify_threshold = threshold;
        self
    }

    /// Set the flavor shortlist size.
    #[must_use]
    pub fn with_flavor_shortlist(mut self, shortlist: usize) -> Self {
        self.flavor_shortlist = shortlist;
        self
    }

    /// Set the RNG seed for reproducible generation.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.classify_threshold, DEFAULT_CLASSIFY_THRESHOLD);
        assert_eq!(config.flavor_shortlist, DEFAULT_FLAVOR_SHORTLIST);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::default()
            .with_classify_threshold(50.0)
            .with_flavor_shortlist(3)
            .with_seed(7);

        assert_eq!(config.classify_threshold, 50.0);
        assert_eq!(config.flavor_shortlist, 3);
        assert_eq!(config.seed, Some(7));
    }
}
