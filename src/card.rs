//! Card types.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Each suit has a stable index in `0..=3`, exposed through [`Suit::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades (index 0).
    Spades,
    /// Hearts (index 1).
    Hearts,
    /// Diamonds (index 2).
    Diamonds,
    /// Clubs (index 3).
    Clubs,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit's index in `0..=3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit with the given index, or `None` if it is not in `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// Lowest valid rank (Ace).
pub const ACE: u8 = 1;
/// Highest valid rank (King).
pub const KING: u8 = 13;

/// A playing card.
///
/// Cards are plain values: once built, neither field changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand and are rejected
    /// by [`Deck::from_order`](crate::Deck::from_order). Use
    /// [`Card::try_new`] for ranks that come from outside the crate.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, rejecting ranks outside `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for a rank outside `1..=13`.
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        let card = Self::new(suit, rank);
        if card.is_valid() {
            Ok(card)
        } else {
            Err(CardError::InvalidRank(rank))
        }
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the rank is in `1..=13`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= ACE && self.rank <= KING
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether the card is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        self.rank > 10 && self.rank <= KING
    }

    /// Iterates over the 52 distinct cards, suit by suit in index order and
    /// Ace through King within each suit.
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| (ACE..=KING).map(move |rank| Self::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => f.write_str("A")?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn suit_indices_round_trip() {
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            assert_eq!(suit.index() as usize, i);
            assert_eq!(Suit::from_index(suit.index()), Some(suit));
        }
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn universe_has_52_distinct_cards() {
        let cards: Vec<Card> = Card::all().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        for (i, a) in cards.iter().enumerate() {
            assert!(a.is_valid());
            assert!(cards[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn display_uses_short_rank_names() {
        assert_eq!(Card::new(Suit::Spades, 1).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Clubs, 13).to_string(), "K♣");
    }

    #[test]
    fn face_and_ace_classification() {
        assert!(Card::new(Suit::Diamonds, 1).is_ace());
        assert!(!Card::new(Suit::Diamonds, 1).is_face());
        assert!(Card::new(Suit::Diamonds, 11).is_face());
        assert!(!Card::new(Suit::Diamonds, 10).is_face());
        assert!(!Card::new(Suit::Diamonds, 0).is_valid());
        assert!(!Card::new(Suit::Diamonds, 14).is_valid());
    }

    #[test]
    fn try_new_rejects_out_of_range_ranks() {
        assert_eq!(
            Card::try_new(Suit::Hearts, 1),
            Ok(Card::new(Suit::Hearts, 1))
        );
        assert_eq!(
            Card::try_new(Suit::Clubs, 13),
            Ok(Card::new(Suit::Clubs, 13))
        );
        assert_eq!(
            Card::try_new(Suit::Spades, 0),
            Err(CardError::InvalidRank(0))
        );
        assert_eq!(
            Card::try_new(Suit::Spades, 14),
            Err(CardError::InvalidRank(14))
        );
    }
}
