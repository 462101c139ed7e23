//! The generation orchestrator.

use crate::color::{ColorCategory, ColorClassifier, ColorVoter};
use crate::core::{ColorSample, GenRng, GeneratorConfig};
use crate::corpus::{CardCorpus, CorpusCard, FlavorCorpus};
use crate::error::GenError;
use crate::flavor::{FlavorMatcher, RandomFlavorMatcher, SemanticMatcher};
use crate::select::CardSelector;

/// Where a generation pass currently stands.
///
/// The machine is linear and never branches back:
/// `Uninitialized -> ColorChosen -> TemplateChosen -> FlavorChosen ->
/// Generated`. Only `Generated` unlocks the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationPhase {
    Uninitialized,
    ColorChosen,
    TemplateChosen,
    FlavorChosen,
    Generated,
}

/// Generates one card from image labels and color samples.
///
/// Corpora are injected as trait objects; the flavor matcher is a
/// capability chosen at construction (semantic by default). One generator
/// performs one pass.
///
/// ## Example
///
/// ```
/// use cardsmith::core::{ColorSample, GeneratorConfig};
/// use cardsmith::corpus::{CardDatabase, FlavorDatabase};
/// use cardsmith::generate::CardGenerator;
///
/// let cards = CardDatabase::from_text(
///     "Shadow Dragon {4}{R}{R}\ncreature dragon\nflying\n5/5",
/// )
/// .unwrap();
/// let flavors = FlavorDatabase::from_text("the sky burned").unwrap();
///
/// let samples = vec![
///     ColorSample::new(255, 0, 0, 0.8, 1.0),
///     ColorSample::new(0, 0, 255, 0.2, 1.0),
/// ];
/// let labels = vec!["Dragon".to_string()];
///
/// let mut generator = CardGenerator::with_config(
///     labels,
///     samples,
///     &cards,
///     &flavors,
///     GeneratorConfig::default().with_seed(42),
/// );
/// let card = generator.generate().unwrap();
/// assert_eq!(card.name, "Shadow Dragon");
/// ```
pub struct CardGenerator<'a> {
    labels: Vec<String>,
    samples: Vec<ColorSample>,
    cards: &'a dyn CardCorpus,
    flavors: &'a dyn FlavorCorpus,
    matcher: Box<dyn FlavorMatcher>,
    config: GeneratorConfig,
    rng: GenRng,
    phase: GenerationPhase,
    color: Option<ColorCategory>,
    template: Option<CorpusCard>,
    flavor: Option<String>,
    card: Option<super::GeneratedCard>,
}

impl<'a> CardGenerator<'a> {
    /// Create a generator with the default configuration.
    #[must_use]
    pub fn new(
        labels: Vec<String>,
        samples: Vec<ColorSample>,
        cards: &'a dyn CardCorpus,
        flavors: &'a dyn FlavorCorpus,
    ) -> Self {
        Self::with_config(labels, samples, cards, flavors, GeneratorConfig::default())
    }

    /// Create a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(
        labels: Vec<String>,
        samples: Vec<ColorSample>,
        cards: &'a dyn CardCorpus,
        flavors: &'a dyn FlavorCorpus,
        config: GeneratorConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => GenRng::new(seed),
            None => GenRng::from_entropy(),
        };
        Self {
            labels,
            samples,
            cards,
            flavors,
            matcher: Box::new(SemanticMatcher::new(config.flavor_shortlist)),
            config,
            rng,
            phase: GenerationPhase::Uninitialized,
            color: None,
            template: None,
            flavor: None,
            card: None,
        }
    }

    /// Replace the flavor-matching capability.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn FlavorMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Current phase of the pass.
    #[must_use]
    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// The color decided so far, if `choose_color` has run.
    #[must_use]
    pub fn color(&self) -> Option<ColorCategory> {
        self.color
    }

    /// Step 1: decide the dominant color from the samples.
    pub fn choose_color(&mut self) {
        let voter = ColorVoter::new(ColorClassifier::new(self.config.classify_threshold));
        self.color = voter.vote(&self.samples);
        self.phase = GenerationPhase::ColorChosen;
        tracing::debug!(color = ?self.color, "color chosen");
    }

    /// Step 2: select a template card for the decided color.
    pub fn choose_template(&mut self) -> Result<(), GenError> {
        let selector = CardSelector::new(self.cards);
        let mut rng = self.rng.for_context("template");
        let template = selector.select(self.color, &self.labels, &mut rng)?;
        tracing::debug!(name = %template.name, "template chosen");
        self.template = Some(template);
        self.phase = GenerationPhase::TemplateChosen;
        Ok(())
    }

    /// Step 3: pick a flavor text for the labels.
    ///
    /// If the configured matcher reports its capability as unavailable, the
    /// pick degrades to a uniform random choice with a warn-level notice.
    pub fn choose_flavor(&mut self) -> Result<(), GenError> {
        let mut rng = self.rng.for_context("flavor");
        let flavor = match self.matcher.pick(&self.labels, self.flavors, &mut rng) {
            Ok(flavor) => flavor,
            Err(GenError::CapabilityUnavailable(reason)) => {
                tracing::warn!(%reason, "semantic flavor matching skipped, picking at random");
                RandomFlavorMatcher.pick(&self.labels, self.flavors, &mut rng)?
            }
            Err(err) => return Err(err),
        };
        self.flavor = Some(flavor);
        self.phase = GenerationPhase::FlavorChosen;
        Ok(())
    }

    /// Run the full pass: color, template, flavor, then assemble.
    ///
    /// On error the card stays unreadable and [`CardGenerator::card`] keeps
    /// failing with `NotGenerated`.
    pub fn generate(&mut self) -> Result<&super::GeneratedCard, GenError> {
        self.choose_color();
        self.choose_template()?;
        self.choose_flavor()?;

        let (Some(template), Some(flavor)) = (self.template.take(), self.flavor.take()) else {
            return Err(GenError::NotGenerated);
        };
        self.card = Some(super::GeneratedCard::assemble(self.color, template, flavor));
        self.phase = GenerationPhase::Generated;
        self.card()
    }

    /// The generated card, once `generate()` has completed.
    pub fn card(&self) -> Result<&super::GeneratedCard, GenError> {
        if self.phase != GenerationPhase::Generated {
            return Err(GenError::NotGenerated);
        }
        self.card.as_ref().ok_or(GenError::NotGenerated)
    }

    /// Render the generated card as multi-line text.
    pub fn render(&self) -> Result<String, GenError> {
        Ok(self.card()?.to_string())
    }
}
