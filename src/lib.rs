//! poker-showdown: rank-only five-card hand comparison
//!
//! Goals:
//! - Deterministic comparison of two five-symbol hands such as `"AAKK2"`
//! - Small, pure API usable from any thread
//! - No panics for odd input; use `Result` for recoverable errors
//!
//! Hands carry ranks only (`23456789TJQKA`), no suits. Straights and flushes
//! are not recognised, and a single pair is ranked as [`Category::TwoPair`].
//!
//! ## Quick start
//! ```
//! use poker_showdown::evaluator::{classify_hand, showdown, Category};
//!
//! assert_eq!(classify_hand("AAKK2").unwrap(), Category::TwoPair);
//! assert_eq!(showdown("AAAA2", "KKKKQ").unwrap(), "KKKKQ");
//! assert_eq!(showdown("23456", "23456").unwrap(), "tie");
//! ```
//!
//! ## Console
//! Run the interactive console with:
//! ```sh
//! cargo run --bin poker-showdown
//! ```
//!
//! [`Category::TwoPair`]: evaluator::Category::TwoPair

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
