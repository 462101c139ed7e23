//! Flavor text selection.
//!
//! `FlavorMatcher` is a capability seam: the generator is handed one
//! implementation at construction time. `SemanticMatcher` ranks the corpus
//! against the image labels by bag-of-words cosine similarity and picks
//! from a shortlist; `RandomFlavorMatcher` is the uniform fallback. A
//! matcher that reports the capability as unavailable is degraded to the
//! uniform fallback by the generator, never surfaced as a hard failure.

pub mod matcher;
pub mod semantic;

pub use matcher::{FlavorMatcher, RandomFlavorMatcher};
pub use semantic::SemanticMatcher;
