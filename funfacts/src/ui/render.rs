//! Render orchestration for the fun facts TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::layout::centered_rect_fixed;
use crate::ui::widgets::{ActionBarWidget, FactCardWidget};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let background = app.board.background();

    // Whole-screen fill first; everything else draws over it
    frame.render_widget(
        Block::default().style(app.theme.background_style(background)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // fact text
            Constraint::Length(1), // button
            Constraint::Length(1), // spacer
            Constraint::Length(1), // status line
        ])
        .split(area);

    frame.render_widget(
        FactCardWidget::new(app.board.current_fact().text(), background, &app.theme),
        layout[0],
    );

    frame.render_widget(ActionBarWidget::new(background, &app.theme), layout[1]);

    render_status_line(frame, app, layout[3]);

    // Render overlay if present
    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

/// Render the status line
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let background = app.board.background();
    let text = format!(
        " Enter/Space/n: new fact  ?: help  q: quit  |  hue {:.0}  |  {} shown ",
        app.board.hue(),
        app.activations
    );

    let line = Line::from(Span::styled(text, app.theme.hint_style(background)));
    frame.render_widget(
        Paragraph::new(line).style(app.theme.background_style(background)),
        area,
    );
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(46, 12, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Fun Facts - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Enter/Space/n   New fact"),
        Line::from("  ? or F1         Toggle this help"),
        Line::from("  q or Esc        Quit"),
        Line::from(""),
        Line::from("Every new fact rotates the background hue"),
        Line::from("by 45 degrees; eight presses come full circle."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
