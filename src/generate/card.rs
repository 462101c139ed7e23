//! The generated card record and its human-readable rendering.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::ColorCategory;
use crate::corpus::CorpusCard;

/// The output of one generation pass.
///
/// Every field is populated during assembly; `power_toughness` is
/// explicitly absent for non-creature templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCard {
    /// Dominant color decided by the vote; `None` when no color won.
    pub color: Option<ColorCategory>,

    /// Card name, taken from the template.
    pub name: String,

    /// Mana cost, taken from the template.
    pub mana_cost: String,

    /// Type line, taken from the template.
    pub type_line: String,

    /// Rules text lines, taken from the template.
    pub rules_text: SmallVec<[String; 4]>,

    /// Power/toughness for creature templates.
    pub power_toughness: Option<String>,

    /// Flavor text chosen for the labels.
    pub flavor_text: String,
}

impl GeneratedCard {
    /// Assemble a card from a template, decided color, and flavor text.
    #[must_use]
    pub fn assemble(
        color: Option<ColorCategory>,
        template: CorpusCard,
        flavor_text: String,
    ) -> Self {
        Self {
            color,
            name: template.name,
            mana_cost: template.mana_cost,
            type_line: template.type_line,
            rules_text: template.rules_text,
            power_toughness: template.power_toughness,
            flavor_text,
        }
    }
}

impl std::fmt::Display for GeneratedCard {
    /// One attribute per line: Color, Name, Rules, Flavor, Mana cost, Type,
    /// then Power/Toughness when present.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let color = self.color.map_or("None", ColorCategory::name);
        write!(f, "Color: {color}")?;
        write!(f, "\nName: {}", self.name)?;
        write!(f, "\nRules: {}", self.rules_text.join("\n"))?;
        write!(f, "\nFlavor: {}", self.flavor_text)?;
        write!(f, "\nMana cost: {}", self.mana_cost)?;
        write!(f, "\nType: {}", self.type_line)?;
        if let Some(pt) = &self.power_toughness {
            write!(f, "\nPower/Toughness: {pt}")?;
        }
        Ok(())
    }
}
