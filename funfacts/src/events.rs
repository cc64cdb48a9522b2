//! Event handling for the fun facts TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcut (always works)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Overlay swallows everything except its close keys
    if app.show_help {
        return handle_help_key(app, key);
    }

    match key.code {
        // The one actionable control
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
            app.new_fact();
            EventResult::NeedsRedraw
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,

        _ => EventResult::Continue,
    }
}

/// Handle key when the help overlay is open
fn handle_help_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use funfacts_core::{FactDeck, HUE_STEP};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_activates_the_control() {
        let mut app = App::new(FactDeck::builtin());
        let result = handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(app.activations, 1);
        assert_eq!(app.board.hue(), HUE_STEP);
    }

    #[test]
    fn space_and_n_also_activate() {
        let mut app = App::new(FactDeck::builtin());
        handle_event(&mut app, key(KeyCode::Char(' ')));
        handle_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.activations, 2);
    }

    #[test]
    fn q_and_esc_quit() {
        let mut app = App::new(FactDeck::builtin());
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);
        assert_eq!(handle_event(&mut app, key(KeyCode::Esc)), EventResult::Quit);
    }

    #[test]
    fn ctrl_c_quits_even_with_help_open() {
        let mut app = App::new(FactDeck::builtin());
        app.toggle_help();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ev), EventResult::Quit);
    }

    #[test]
    fn help_overlay_swallows_activation() {
        let mut app = App::new(FactDeck::builtin());
        handle_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.activations, 0);

        handle_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn resize_requests_redraw() {
        let mut app = App::new(FactDeck::builtin());
        assert_eq!(
            handle_event(&mut app, Event::Resize(80, 24)),
            EventResult::NeedsRedraw
        );
    }
}
