//! Fun facts TUI application.
//!
//! A single-screen terminal app: one fact at a time, on a background
//! that rotates its hue with every press of the New Fact control.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! automated testing:
//!
//! ```bash
//! cargo run -p funfacts -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use funfacts_core::FactDeck;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --headless mode
    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless().map_err(Into::into);
    }

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(FactDeck::builtin()));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with a timeout so resizes stay responsive
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Fun Facts - a hue-rotating fact screen for the terminal");
    println!();
    println!("USAGE:");
    println!("  funfacts [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (text-only, no TUI)");
    println!();
    println!("KEYS (TUI mode):");
    println!("  Enter/Space/n    New fact (rotates the background hue)");
    println!("  ? or F1          Toggle help");
    println!("  q/Esc            Quit");
    println!();
    println!("EXAMPLES:");
    println!("  funfacts              # Interactive TUI mode");
    println!("  funfacts --headless   # Line-oriented mode for scripts");
}
