//! draw-poker: four-card draw poker against the computer
//!
//! Goals:
//! - Deterministic, pure hand evaluation for 4-card hands from a 32-card deck
//! - One owning [`round::Round`] per table; front-ends send intents and render snapshots
//! - No panics for invalid actions; rejected intents return an error and change nothing
//!
//! ## Quick start: play a seeded round
//! ```
//! use draw_poker::config::RoundConfig;
//! use draw_poker::round::{Phase, Round};
//! use std::time::Duration;
//!
//! let mut round = Round::new(RoundConfig::default().with_seed(7));
//! round.start_game().unwrap();
//! round.toggle_card_selection(1).unwrap();
//! round.drop_selected_cards().unwrap();
//! assert_eq!(round.exchanges_used(), 1);
//!
//! round.handle_reveal().unwrap();
//! round.advance(Duration::from_secs(4));
//! assert_eq!(round.phase(), Phase::Resolved);
//! assert!(round.winner().is_some());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod cards;
pub mod config;
pub mod deal;
pub mod deck;
pub mod evaluator;
pub mod exchange;
pub mod hand;
pub mod logging;
pub mod reveal;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
