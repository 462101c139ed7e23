//! The flavor-matching capability trait and the uniform fallback.

use crate::core::GenRng;
use crate::corpus::FlavorCorpus;
use crate::error::GenError;

/// Picks a flavor text for a set of image labels.
///
/// Implementations may return `GenError::CapabilityUnavailable` to signal
/// that their backing engine is absent; the generator recovers from that
/// with [`RandomFlavorMatcher`]. Any other error is propagated.
pub trait FlavorMatcher {
    /// Pick one flavor text from the corpus.
    fn pick(
        &self,
        labels: &[String],
        corpus: &dyn FlavorCorpus,
        rng: &mut GenRng,
    ) -> Result<String, GenError>;
}

/// Uniform random flavor selection over the whole corpus.
///
/// The mandatory fallback tier: it never fails on a non-empty corpus and
/// ignores the labels entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomFlavorMatcher;

impl FlavorMatcher for RandomFlavorMatcher {
    fn pick(
        &self,
        _labels: &[String],
        corpus: &dyn FlavorCorpus,
        rng: &mut GenRng,
    ) -> Result<String, GenError> {
        rng.choose(corpus.texts())
            .cloned()
            .ok_or(GenError::EmptyFlavorCorpus)
    }
}
