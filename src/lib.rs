//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns one 52-card [`Deck`] and the
//! player's and dealer's [`Hand`]s, and exposes the three player actions:
//! new game, hit and stand.
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.new_game().unwrap();
//! while game.is_active() && game.player_hand().value() < 17 {
//!     game.hit().unwrap();
//! }
//! if game.is_active() {
//!     game.stand().unwrap();
//! }
//! assert!(!game.is_active());
//! println!("{}", game.message());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, CardError, DealError, DeckError, HandError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Prompt, RoundOutcome};
