//! TUI widgets for the fun facts screen

pub mod action_bar;
pub mod fact_card;

pub use action_bar::ActionBarWidget;
pub use fact_card::FactCardWidget;
