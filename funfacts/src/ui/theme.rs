//! Color theme and styling for the fun facts TUI

use funfacts_core::Rgb;
use ratatui::style::{Color, Modifier, Style};

/// The New Fact button keeps this blue regardless of the background hue.
pub const BUTTON_BLUE: Rgb = Rgb::new(0x19, 0x76, 0xD2);

/// Fixed (hue-independent) styling for the screen chrome.
#[derive(Debug, Clone)]
pub struct FactTheme {
    pub button_background: Rgb,
    pub button_text: Rgb,
    pub border: Color,
}

impl Default for FactTheme {
    fn default() -> Self {
        FactTheme {
            button_background: BUTTON_BLUE,
            button_text: Rgb::WHITE,
            border: Color::DarkGray,
        }
    }
}

impl FactTheme {
    /// Style for the New Fact button label
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(to_color(self.button_text))
            .bg(to_color(self.button_background))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the fact text over the current background
    pub fn fact_style(&self, background: Rgb) -> Style {
        Style::default()
            .fg(to_color(background.contrast_text()))
            .bg(to_color(background))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the whole-screen background fill
    pub fn background_style(&self, background: Rgb) -> Style {
        Style::default().bg(to_color(background))
    }

    /// Style for key hints and status text over the background
    pub fn hint_style(&self, background: Rgb) -> Style {
        Style::default()
            .fg(to_color(background.contrast_text()))
            .bg(to_color(background))
            .add_modifier(Modifier::DIM)
    }

    /// Border style for overlays
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// Map a core color onto the terminal palette.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_blue_is_fixed() {
        assert_eq!(BUTTON_BLUE.to_string(), "#1976D2");
        let theme = FactTheme::default();
        assert_eq!(theme.button_background, BUTTON_BLUE);
        assert_eq!(theme.button_text, Rgb::WHITE);
    }

    #[test]
    fn core_colors_map_to_rgb_cells() {
        assert_eq!(to_color(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
