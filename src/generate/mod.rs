//! Card generation orchestration.
//!
//! `CardGenerator` sequences the three decisions (dominant color, template
//! card, flavor text) over injected corpora and assembles the final
//! `GeneratedCard`. A linear phase machine gates access: the card is only
//! readable and renderable once every step has completed.

pub mod card;
pub mod generator;

pub use card::GeneratedCard;
pub use generator::{CardGenerator, GenerationPhase};
