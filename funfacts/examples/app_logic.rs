//! Exercise the screen logic without a TUI

use funfacts_core::{pick, FactBoard, FactDeck, HUE_STEP};

fn main() {
    println!("=== Testing screen logic ===\n");

    test_selection();
    test_hue_cycle();

    println!("\n=== Tests complete! ===");
}

fn test_selection() {
    println!("1. Testing that selection never repeats the current fact...");

    let deck = FactDeck::builtin();
    let current = pick(&deck, None);
    for i in 0..5 {
        let next = pick(&deck, Some(&current));
        let status = if next != current { "OK" } else { "FAIL" };
        println!("   {status} - draw {i}: {}", shorten(next.text()));
    }
}

fn test_hue_cycle() {
    println!("\n2. Testing the 45-degree hue rotation...");

    let mut board = FactBoard::new(FactDeck::builtin());
    for n in 1..=8u32 {
        board.advance();
        let expected = (HUE_STEP * n as f32) % 360.0;
        let status = if board.hue() == expected { "OK" } else { "FAIL" };
        println!(
            "   {status} - after {n} presses: hue={} background={}",
            board.hue(),
            board.background()
        );
    }
}

fn shorten(s: &str) -> String {
    if s.chars().count() > 40 {
        let prefix: String = s.chars().take(40).collect();
        format!("{prefix}...")
    } else {
        s.to_string()
    }
}
