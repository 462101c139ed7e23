//! Color samples - dominant-color observations from image analysis.
//!
//! A `ColorSample` is one dominant color reported by the upstream image
//! analysis: an RGB triple plus how much of the image it covers and how
//! confident the analysis was. Samples are read-only inputs; the voter
//! weighs them but never mutates them.

use serde::{Deserialize, Serialize};

/// One dominant-color observation.
///
/// `pixel_fraction` and `score` are both in `[0, 1]`; their product is the
/// weight the sample contributes to the color vote.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Red channel, 0-255.
    pub red: u8,
    /// Green channel, 0-255.
    pub green: u8,
    /// Blue channel, 0-255.
    pub blue: u8,
    /// Fraction of the image covered by this color, in `[0, 1]`.
    pub pixel_fraction: f64,
    /// Confidence score from the image analysis, in `[0, 1]`.
    pub score: f64,
}

impl ColorSample {
    /// Create a new color sample.
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8, pixel_fraction: f64, score: f64) -> Self {
        Self {
            red,
            green,
            blue,
            pixel_fraction,
            score,
        }
    }

    /// The weight this sample contributes to a color vote.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.pixel_fraction * self.score
    }
}
