//! New Fact button widget

use funfacts_core::Rgb;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::FactTheme;

/// The New Fact button, centered on its own row.
///
/// The button's colors are fixed; only the padding around it picks up
/// the rotating background.
pub struct ActionBarWidget<'a> {
    background: Rgb,
    theme: &'a FactTheme,
}

impl<'a> ActionBarWidget<'a> {
    pub fn new(background: Rgb, theme: &'a FactTheme) -> Self {
        Self { background, theme }
    }
}

impl Widget for ActionBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = Line::from(Span::styled("  New Fact  ", self.theme.button_style()));

        Paragraph::new(line)
            .style(self.theme.background_style(self.background))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
