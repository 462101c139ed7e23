//! Color classification and voting.
//!
//! - `classify`: maps one RGB triple to a discrete color category (or none)
//!   by nearest-reference distance in YCbCr space.
//! - `vote`: aggregates many weighted samples into a single dominant color
//!   decision.

pub mod classify;
pub mod vote;

pub use classify::{ColorCategory, ColorClassifier};
pub use vote::ColorVoter;
