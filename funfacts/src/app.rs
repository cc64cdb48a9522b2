//! Main application state and logic

use funfacts_core::{FactBoard, FactDeck};
use rand::Rng;

use crate::ui::theme::FactTheme;

/// Main application state
pub struct App {
    /// The screen's fact/hue state
    pub board: FactBoard,

    // UI state
    pub theme: FactTheme,
    pub show_help: bool,
    pub should_quit: bool,

    /// How many times the New Fact control has been activated
    pub activations: u32,
}

impl App {
    /// Create a new application over a fact deck
    pub fn new(deck: FactDeck) -> Self {
        Self::build(FactBoard::new(deck))
    }

    /// Create with a specific RNG (useful for testing)
    pub fn with_rng<R: Rng>(deck: FactDeck, rng: &mut R) -> Self {
        Self::build(FactBoard::with_rng(deck, rng))
    }

    fn build(board: FactBoard) -> Self {
        App {
            board,
            theme: FactTheme::default(),
            show_help: false,
            should_quit: false,
            activations: 0,
        }
    }

    /// The New Fact control: swap the fact and rotate the hue
    pub fn new_fact(&mut self) {
        self.board.advance();
        self.activations = self.activations.wrapping_add(1);
    }

    /// Deterministic variant for tests
    pub fn new_fact_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.board.advance_with_rng(rng);
        self.activations = self.activations.wrapping_add(1);
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Request shutdown on the next loop iteration
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use funfacts_core::HUE_STEP;
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn activation_scenario() {
        let mut rng = StepRng::new(0, 1);
        let mut app = App::with_rng(FactDeck::builtin(), &mut rng);

        let f0 = app.board.current_fact().clone();
        assert_eq!(app.board.hue(), 0.0);

        app.new_fact_with_rng(&mut rng);
        let f1 = app.board.current_fact().clone();
        assert_ne!(f1, f0);
        assert_eq!(app.board.hue(), HUE_STEP);

        app.new_fact_with_rng(&mut rng);
        let f2 = app.board.current_fact().clone();
        assert_ne!(f2, f1);
        assert_eq!(app.board.hue(), 2.0 * HUE_STEP);

        for _ in 2..8 {
            app.new_fact_with_rng(&mut rng);
        }
        assert_eq!(app.board.hue(), 0.0);
        assert_eq!(app.activations, 8);
    }

    #[test]
    fn help_toggles_on_and_off() {
        let mut app = App::new(FactDeck::builtin());
        assert!(!app.show_help);
        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);
    }

    #[test]
    fn quit_is_sticky() {
        let mut app = App::new(FactDeck::builtin());
        app.quit();
        assert!(app.should_quit);
    }
}
