//! Template card selection.

pub mod selector;

pub use selector::CardSelector;
