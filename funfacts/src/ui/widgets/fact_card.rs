//! Fact display widget

use funfacts_core::Rgb;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::theme::FactTheme;

/// Centered fact text over the rotating background.
pub struct FactCardWidget<'a> {
    text: &'a str,
    background: Rgb,
    theme: &'a FactTheme,
}

impl<'a> FactCardWidget<'a> {
    pub fn new(text: &'a str, background: Rgb, theme: &'a FactTheme) -> Self {
        Self {
            text,
            background,
            theme,
        }
    }
}

impl Widget for FactCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 5 || area.height == 0 {
            return;
        }

        let inner = Rect {
            x: area.x + 2,
            y: area.y,
            width: area.width - 4,
            height: area.height,
        };

        // Rough wrapped-height estimate to center the text vertically
        let width = inner.width as usize;
        let est_lines: u16 = self
            .text
            .lines()
            .map(|line| (line.chars().count() / width + 1) as u16)
            .sum();
        let offset = inner.height.saturating_sub(est_lines) / 2;
        let text_area = Rect {
            y: inner.y + offset,
            height: inner.height - offset,
            ..inner
        };

        Paragraph::new(self.text.to_string())
            .style(self.theme.fact_style(self.background))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
