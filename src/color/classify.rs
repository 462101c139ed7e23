//! RGB color classification against a fixed reference palette.
//!
//! The input is converted to YCbCr (luma/chroma), compared against five
//! reference colors with a luma-weighted distance, and assigned to the
//! nearest reference if it is close enough. Anything too far from every
//! reference gets no category at all.

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_CLASSIFY_THRESHOLD;

/// A discrete card color.
///
/// "No category" is expressed as `Option<ColorCategory>::None` everywhere;
/// it is a real outcome that competes in voting, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCategory {
    Red,
    Blue,
    Green,
    Black,
    White,
}

impl ColorCategory {
    /// All categories, in classification comparison order.
    pub const ALL: [ColorCategory; 5] = [
        ColorCategory::Red,
        ColorCategory::Blue,
        ColorCategory::Green,
        ColorCategory::Black,
        ColorCategory::White,
    ];

    /// Human-readable name, as used in color-combination keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorCategory::Red => "Red",
            ColorCategory::Blue => "Blue",
            ColorCategory::Green => "Green",
            ColorCategory::Black => "Black",
            ColorCategory::White => "White",
        }
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Luma/chroma representation of an RGB triple.
#[derive(Clone, Copy, Debug)]
struct Ycc {
    y: f64,
    cb: f64,
    cr: f64,
}

fn ycc(r: u8, g: u8, b: u8) -> Ycc {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    Ycc {
        y: 0.299 * r + 0.587 * g + 0.114 * b,
        cb: 128.0 - 0.168736 * r - 0.331364 * g + 0.5 * b,
        cr: 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
    }
}

/// Luma-weighted euclidean distance between two YCbCr points.
fn distance(a: Ycc, b: Ycc) -> f64 {
    let dy = a.y - b.y;
    let dcb = a.cb - b.cb;
    let dcr = a.cr - b.cr;
    (1.4 * dy * dy + 0.8 * dcb * dcb + 0.8 * dcr * dcr).sqrt()
}

/// The reference palette, in comparison order.
///
/// The green reference is (0, 0, 150), not canonical green (0, 255, 0).
/// Suspect, but kept as-is: pure green classifies as no category under
/// the default threshold, and downstream corpora were built against that
/// behavior.
const REFERENCES: [(ColorCategory, (u8, u8, u8)); 5] = [
    (ColorCategory::Red, (255, 0, 0)),
    (ColorCategory::Blue, (0, 0, 255)),
    (ColorCategory::Green, (0, 0, 150)),
    (ColorCategory::Black, (0, 0, 0)),
    (ColorCategory::White, (255, 255, 255)),
];

/// Classifies RGB triples against the reference palette.
///
/// Pure; the only side effect is a debug-level trace event per call.
///
/// ## Example
///
/// ```
/// use cardsmith::color::{ColorCategory, ColorClassifier};
///
/// let classifier = ColorClassifier::default();
/// assert_eq!(classifier.classify(255, 0, 0), Some(ColorCategory::Red));
/// assert_eq!(classifier.classify(0, 255, 0), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColorClassifier {
    threshold: f64,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFY_THRESHOLD)
    }
}

impl ColorClassifier {
    /// Create a classifier with a custom distance threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Classify an RGB triple.
    ///
    /// Returns the nearest reference's category if its distance is below
    /// the threshold, otherwise `None`. Ties go to the reference compared
    /// first (red, blue, green, black, white).
    #[must_use]
    pub fn classify(&self, r: u8, g: u8, b: u8) -> Option<ColorCategory> {
        let input = ycc(r, g, b);

        let mut best = REFERENCES[0].0;
        let mut best_distance = f64::INFINITY;
        for (category, (rr, rg, rb)) in REFERENCES {
            let d = distance(input, ycc(rr, rg, rb));
            // strict < keeps the first minimum on exact ties
            if d < best_distance {
                best = category;
                best_distance = d;
            }
        }

        let result = (best_distance < self.threshold).then_some(best);
        tracing::debug!(
            r,
            g,
            b,
            nearest = %best,
            distance = best_distance,
            category = ?result,
            "classified color sample"
        );
        result
    }
}
