//! Weighted color voting over dominant-color samples.
//!
//! Each sample casts a vote for its classified category, weighted by
//! `pixel_fraction * score`. Samples that classify to no category vote in
//! a "none" bucket that competes with the real colors and can win, which
//! keeps washed-out images from being forced into a color.

use rustc_hash::FxHashMap;

use crate::core::ColorSample;

use super::classify::{ColorCategory, ColorClassifier};

/// Bucket order used to break exact weight ties: on equal accumulated
/// weight, the later bucket wins.
const BUCKET_ORDER: [Option<ColorCategory>; 6] = [
    Some(ColorCategory::Red),
    Some(ColorCategory::Blue),
    Some(ColorCategory::Green),
    Some(ColorCategory::Black),
    Some(ColorCategory::White),
    None,
];

/// Aggregates color samples into one dominant color decision.
///
/// ## Example
///
/// ```
/// use cardsmith::color::{ColorCategory, ColorVoter};
/// use cardsmith::core::ColorSample;
///
/// let voter = ColorVoter::default();
/// let samples = vec![
///     ColorSample::new(255, 0, 0, 0.7, 1.0),
///     ColorSample::new(0, 0, 255, 0.3, 1.0),
/// ];
/// assert_eq!(voter.vote(&samples), Some(ColorCategory::Red));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorVoter {
    classifier: ColorClassifier,
}

impl ColorVoter {
    /// Create a voter using the given classifier.
    #[must_use]
    pub fn new(classifier: ColorClassifier) -> Self {
        Self { classifier }
    }

    /// Decide the dominant color of a set of samples.
    ///
    /// Returns `None` when no confident decision exists: either fewer than
    /// two distinct vote buckets accumulated (a single sample never
    /// decides), or the no-category bucket itself won the vote.
    #[must_use]
    pub fn vote(&self, samples: &[ColorSample]) -> Option<ColorCategory> {
        let mut votes: FxHashMap<Option<ColorCategory>, f64> = FxHashMap::default();
        for sample in samples {
            let bucket = self
                .classifier
                .classify(sample.red, sample.green, sample.blue);
            *votes.entry(bucket).or_insert(0.0) += sample.weight();
        }

        tracing::debug!(tallies = ?votes, "color vote tallies");

        // A lone bucket is not a decision, no matter its weight.
        if votes.len() < 2 {
            return None;
        }

        let mut winner = None;
        let mut best = f64::NEG_INFINITY;
        for bucket in BUCKET_ORDER {
            if let Some(&weight) = votes.get(&bucket) {
                // >= pins exact ties to the later bucket
                if weight >= best {
                    best = weight;
                    winner = bucket;
                }
            }
        }

        tracing::debug!(winner = ?winner, weight = best, "color vote decided");
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(pixel_fraction: f64, score: f64) -> ColorSample {
        ColorSample::new(255, 0, 0, pixel_fraction, score)
    }

    fn blue(pixel_fraction: f64, score: f64) -> ColorSample {
        ColorSample::new(0, 0, 255, pixel_fraction, score)
    }

    /// Mid-gray is far from every reference, so it votes in the none bucket.
    fn gray(pixel_fraction: f64, score: f64) -> ColorSample {
        ColorSample::new(128, 128, 128, pixel_fraction, score)
    }

    #[test]
    fn test_no_samples_is_no_decision() {
        assert_eq!(ColorVoter::default().vote(&[]), None);
    }

    #[test]
    fn test_single_sample_is_no_decision() {
        // Regression: a lone fully-saturated red sample must not decide.
        assert_eq!(ColorVoter::default().vote(&[red(1.0, 1.0)]), None);
    }

    #[test]
    fn test_single_bucket_is_no_decision() {
        // Two samples, but both red: still only one bucket.
        let samples = [red(0.6, 1.0), red(0.4, 1.0)];
        assert_eq!(ColorVoter::default().vote(&samples), None);
    }

    #[test]
    fn test_heavier_bucket_wins() {
        let samples = [red(0.6, 1.0), blue(0.4, 1.0)];
        assert_eq!(
            ColorVoter::default().vote(&samples),
            Some(ColorCategory::Red)
        );
    }

    #[test]
    fn test_weight_is_fraction_times_score() {
        // red: 0.5 * 0.5 = 0.25, blue: 1.0 * 0.3 = 0.3
        let samples = [red(0.5, 0.5), blue(1.0, 0.3)];
        assert_eq!(
            ColorVoter::default().vote(&samples),
            Some(ColorCategory::Blue)
        );
    }

    #[test]
    fn test_exact_tie_goes_to_later_bucket() {
        let samples = [red(0.5, 1.0), blue(0.5, 1.0)];
        // Red and Blue tie; Blue is later in the bucket order.
        assert_eq!(
            ColorVoter::default().vote(&samples),
            Some(ColorCategory::Blue)
        );
    }

    #[test]
    fn test_none_bucket_can_win() {
        let samples = [gray(0.9, 1.0), red(0.1, 1.0)];
        assert_eq!(ColorVoter::default().vote(&samples), None);
    }

    #[test]
    fn test_none_bucket_can_lose() {
        let samples = [gray(0.1, 1.0), red(0.9, 1.0)];
        assert_eq!(
            ColorVoter::default().vote(&samples),
            Some(ColorCategory::Red)
        );
    }

    #[test]
    fn test_repeated_samples_accumulate() {
        // Three small blue votes outweigh one larger red vote.
        let samples = [blue(0.2, 1.0), blue(0.2, 1.0), blue(0.2, 1.0), red(0.5, 1.0)];
        assert_eq!(
            ColorVoter::default().vote(&samples),
            Some(ColorCategory::Blue)
        );
    }
}
