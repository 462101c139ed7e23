//! # cardsmith
//!
//! Generates a themed trading-card description (color, name, rules text,
//! flavor text) from image-derived labels and dominant color samples.
//!
//! ## Pipeline
//!
//! One generation pass is three decisions in fixed order:
//!
//! 1. **Color**: each dominant-color sample is classified against a fixed
//!    reference palette in YCbCr space and casts a weighted vote; the
//!    heaviest bucket wins.
//! 2. **Template**: a pre-existing card is selected from the corpus keyed
//!    by the winning color, preferring cards whose names contain one of
//!    the image labels.
//! 3. **Flavor**: a flavor text is picked by bag-of-words similarity
//!    against the labels, degrading to a uniform random pick when the
//!    similarity capability is unavailable.
//!
//! Everything is single-threaded and synchronous; a pass is bounded by a
//! few linear scans over the in-memory corpora.
//!
//! ## Modules
//!
//! - `core`: color samples, configuration, deterministic RNG
//! - `color`: RGB classification and weighted voting
//! - `corpus`: card and flavor corpus parsing, provider traits
//! - `select`: label-aware template selection
//! - `flavor`: the flavor-matching capability and its implementations
//! - `generate`: the orchestrator and the generated card record
//! - `error`: the error taxonomy

pub mod color;
pub mod core;
pub mod corpus;
pub mod error;
pub mod flavor;
pub mod generate;
pub mod select;

// Re-export commonly used types
pub use crate::color::{ColorCategory, ColorClassifier, ColorVoter};
pub use crate::core::{ColorSample, GenRng, GeneratorConfig};
pub use crate::corpus::{
    CardCorpus, CardDatabase, CorpusCard, FlavorCorpus, FlavorDatabase, ENTRY_MARKER,
};
pub use crate::error::GenError;
pub use crate::flavor::{FlavorMatcher, RandomFlavorMatcher, SemanticMatcher};
pub use crate::generate::{CardGenerator, GeneratedCard, GenerationPhase};
pub use crate::select::CardSelector;
