//! View state: the current fact and the rotating background hue.

use rand::Rng;

use crate::color::{Rgb, BACKGROUND_SATURATION, BACKGROUND_VALUE};
use crate::facts::{Fact, FactDeck};
use crate::select::pick_fact;

/// Degrees the background hue moves per activation.
pub const HUE_STEP: f32 = 45.0;

/// The screen's state: one fact and one hue angle.
///
/// The hue stays in [0, 360); the fact is always drawn from the deck
/// (or the sentinel when the deck is empty). Colors are derived on
/// read, never stored.
#[derive(Debug, Clone)]
pub struct FactBoard {
    deck: FactDeck,
    current: Fact,
    hue: f32,
}

impl FactBoard {
    /// Create a board over `deck` with a random initial fact and hue 0.
    pub fn new(deck: FactDeck) -> Self {
        Self::with_rng(deck, &mut rand::thread_rng())
    }

    /// Create with a specific RNG (useful for testing).
    pub fn with_rng<R: Rng>(deck: FactDeck, rng: &mut R) -> Self {
        let current = pick_fact(&deck, None, rng);
        FactBoard {
            deck,
            current,
            hue: 0.0,
        }
    }

    /// Swap in a new fact and rotate the hue one step.
    pub fn advance(&mut self) {
        self.advance_with_rng(&mut rand::thread_rng());
    }

    /// Advance with a specific RNG (useful for testing).
    pub fn advance_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.current = pick_fact(&self.deck, Some(&self.current), rng);
        self.hue = (self.hue + HUE_STEP) % 360.0;
    }

    pub fn current_fact(&self) -> &Fact {
        &self.current
    }

    /// Background hue in degrees, always in [0, 360).
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Background color derived from the current hue.
    pub fn background(&self) -> Rgb {
        Rgb::from_hsv(self.hue, BACKGROUND_SATURATION, BACKGROUND_VALUE)
    }

    /// Readable text color for the current background.
    pub fn text_color(&self) -> Rgb {
        self.background().contrast_text()
    }

    pub fn deck(&self) -> &FactDeck {
        &self.deck
    }
}
