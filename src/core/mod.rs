//! Core types: color samples, generator configuration, RNG.
//!
//! These are the building blocks shared by every other module. Nothing in
//! here knows about corpora or card templates.

pub mod config;
pub mod rng;
pub mod sample;

pub use config::GeneratorConfig;
pub use rng::GenRng;
pub use sample::ColorSample;
