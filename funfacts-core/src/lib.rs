//! Fact deck, selection, and color model for the fun facts screen.
//!
//! This crate provides:
//! - A fixed deck of facts with uniform, exclusion-aware selection
//! - HSV-based background color derivation and contrast-aware text color
//! - The screen's view state and its single transition
//!
//! # Quick Start
//!
//! ```
//! use funfacts_core::{FactBoard, FactDeck};
//!
//! let mut board = FactBoard::new(FactDeck::builtin());
//! println!("{}", board.current_fact());
//!
//! board.advance();
//! assert!((0.0..360.0).contains(&board.hue()));
//! ```

pub mod board;
pub mod color;
pub mod facts;
pub mod select;

// Primary public API
pub use board::{FactBoard, HUE_STEP};
pub use color::{ColorError, Rgb, BACKGROUND_SATURATION, BACKGROUND_VALUE};
pub use facts::{Fact, FactDeck, NO_FACTS};
pub use select::{pick, pick_fact};
