//! Error taxonomy for card generation.
//!
//! Errors that abort a generation pass (`NoCandidates`, `CorpusParse`,
//! `CorpusIo`, `EmptyFlavorCorpus`) are propagated to the caller.
//! `CapabilityUnavailable` is recovered inside the orchestrator by falling
//! back to random flavor selection; it only escapes when a custom matcher
//! is invoked directly. `NotGenerated` guards access to a card before
//! `generate()` has completed.

use thiserror::Error;

/// Errors produced while generating a card or loading a corpus.
#[derive(Error, Debug)]
pub enum GenError {
    /// The chosen color key has zero template cards in the corpus.
    ///
    /// Never defaulted to another color; the caller decides what to do.
    #[error("no template cards for color key '{key}'")]
    NoCandidates {
        /// The color-combination key that had no candidates.
        key: String,
    },

    /// The generated card was requested before `generate()` completed.
    #[error("card has not been generated yet, call generate() first")]
    NotGenerated,

    /// The semantic-similarity capability is not available.
    ///
    /// Recovered locally with a uniform random pick and a warn-level notice.
    #[error("semantic similarity capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// A corpus entry could not be parsed into a card.
    #[error("malformed corpus entry '{entry}': {reason}")]
    CorpusParse {
        /// First line of the offending entry.
        entry: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The corpus file could not be read.
    #[error("failed to read corpus: {0}")]
    CorpusIo(#[from] std::io::Error),

    /// A flavor pick was requested against an empty flavor corpus.
    #[error("flavor corpus is empty")]
    EmptyFlavorCorpus,
}
