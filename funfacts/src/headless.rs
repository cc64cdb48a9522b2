//! Headless mode for the fun facts app.
//!
//! This module provides a simple line-oriented interface for running
//! the screen without a TUI. It's designed for automated testing and
//! scripts.

use std::io::{self, BufRead, Write};

use funfacts_core::{FactBoard, FactDeck, Rgb};

/// Run the app in headless mode.
///
/// This provides a simple line-oriented protocol:
/// - An empty line, `n`, or `next` advances to a new fact
/// - Lines starting with `#` are commands (status, contrast, help, quit)
pub fn run_headless() -> io::Result<()> {
    let mut board = FactBoard::new(FactDeck::builtin());

    println!("=== Fun Facts Headless Mode ===");
    print_state(&board);
    println!();
    println!("Commands:");
    print_command_help();
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        // Handle commands
        if let Some(cmd) = line.strip_prefix('#') {
            let parts: Vec<&str> = cmd.split_whitespace().collect();
            match parts.first().copied() {
                Some("quit") | Some("exit") => {
                    println!("Goodbye!");
                    break;
                }
                Some("status") => {
                    println!("[STATUS]");
                    print_state(&board);
                }
                Some("contrast") => {
                    if let Some(hex) = parts.get(1) {
                        match hex.parse::<Rgb>() {
                            Ok(color) => println!(
                                "[CONTRAST] text on {} is {}",
                                color,
                                color.contrast_text()
                            ),
                            Err(e) => println!("[ERROR] {e}"),
                        }
                    } else {
                        println!("[ERROR] Usage: #contrast <hex>");
                    }
                }
                Some("help") => {
                    println!("[HELP]");
                    print_command_help();
                }
                _ => {
                    println!("[ERROR] Unknown command. Type #help for help.");
                }
            }
            stdout.flush().ok();
            continue;
        }

        match line {
            "" | "n" | "next" => {
                board.advance();
                print_state(&board);
            }
            _ => {
                println!("[ERROR] Empty line (or n/next) for a new fact, #help for help.");
            }
        }
        stdout.flush().ok();
    }

    Ok(())
}

fn print_state(board: &FactBoard) {
    println!("[FACT] {}", board.current_fact());
    println!(
        "[COLOR] hue={:.0} background={} text={}",
        board.hue(),
        board.background(),
        board.text_color()
    );
}

fn print_command_help() {
    println!("  (empty)/n/next   - Show a new fact");
    println!("  #status          - Show the current fact and colors");
    println!("  #contrast <hex>  - Show the readable text color for a background");
    println!("  #help            - Show this help");
    println!("  #quit            - Exit");
}
