//! Error types for deck, hand and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is outside `1..=13`.
    #[error("card rank {0} is outside 1..=13")]
    InvalidRank(u8),
}

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card has already been dealt since the last shuffle.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur when building a deck from an explicit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The order does not contain exactly 52 cards.
    #[error("a deck needs exactly 52 cards, got {len}")]
    WrongSize {
        /// Number of cards supplied.
        len: usize,
    },
    /// A card has a rank outside `1..=13`.
    #[error("invalid card rank in {0:?}")]
    InvalidCard(Card),
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur when reading a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The requested position is not in `0..len`.
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::Exhausted => Self::NoCards,
        }
    }
}
