//! A single 52-card deck with a deal cursor.

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::{DealError, DeckError};

/// An ordered deck of the 52 distinct cards plus a cursor marking the next
/// card to deal.
///
/// Dealing never removes a card from the underlying sequence; it only moves
/// the cursor. Cards before the cursor have been dealt, cards from the cursor
/// on are still available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    next: usize,
}

impl Deck {
    /// Creates an unshuffled deck in [`Card::all`] order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::new(Suit::Spades, 1); DECK_SIZE];
        for (slot, card) in cards.iter_mut().zip(Card::all()) {
            *slot = card;
        }
        Self { cards, next: 0 }
    }

    /// Creates a deck that deals `order` front to back.
    ///
    /// # Errors
    ///
    /// Returns an error unless `order` is a permutation of the 52 distinct
    /// cards.
    pub fn from_order(order: &[Card]) -> Result<Self, DeckError> {
        if order.len() != DECK_SIZE {
            return Err(DeckError::WrongSize { len: order.len() });
        }

        let mut seen = [false; DECK_SIZE];
        for card in order {
            if !card.is_valid() {
                return Err(DeckError::InvalidCard(*card));
            }
            let slot = usize::from(card.suit().index()) * 13 + usize::from(card.rank() - 1);
            if seen[slot] {
                return Err(DeckError::DuplicateCard(*card));
            }
            seen[slot] = true;
        }

        let mut cards = [Card::new(Suit::Spades, 1); DECK_SIZE];
        cards.copy_from_slice(order);
        Ok(Self { cards, next: 0 })
    }

    /// Creates a deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Regenerates the 52 cards in a uniformly random order and resets the
    /// deal cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (slot, card) in self.cards.iter_mut().zip(Card::all()) {
            *slot = card;
        }
        self.cards.shuffle(rng);
        self.next = 0;
        debug!("deck shuffled");
    }

    /// Deals the card at the cursor and advances it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if every card has been dealt.
    pub fn deal_card(&mut self) -> Result<Card, DealError> {
        let card = *self.cards.get(self.next).ok_or(DealError::Exhausted)?;
        self.next += 1;
        trace!("dealt {card} ({} left)", self.remaining());
        Ok(card)
    }

    /// Returns the number of cards that can still be dealt.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.next
    }

    /// Returns the cards not yet dealt, next card first.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Returns the cards dealt since the last shuffle, in deal order.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.next]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn sorted(cards: &[Card]) -> Vec<(u8, u8)> {
        let mut keys: Vec<_> = cards.iter().map(|c| (c.suit().index(), c.rank())).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn shuffle_is_a_permutation_and_resets_cursor() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::new();
        deck.deal_card().unwrap();
        deck.deal_card().unwrap();

        deck.shuffle(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert!(deck.dealt().is_empty());
        assert_eq!(sorted(deck.undealt()), sorted(Deck::new().undealt()));
    }

    #[test]
    fn deals_in_sequence_until_exhausted() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::shuffled(&mut rng);
        let order: Vec<Card> = deck.undealt().to_vec();

        for expected in &order {
            assert_eq!(deck.deal_card(), Ok(*expected));
        }
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.deal_card(), Err(DealError::Exhausted));
        assert_eq!(deck.dealt(), order.as_slice());
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        let c = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn from_order_validates_permutation() {
        let mut order: Vec<Card> = Card::all().collect();
        order.reverse();
        let mut deck = Deck::from_order(&order).unwrap();
        assert_eq!(deck.deal_card(), Ok(Card::new(Suit::Clubs, 13)));

        assert_eq!(
            Deck::from_order(&order[1..]),
            Err(DeckError::WrongSize { len: 51 })
        );

        let dup = order[1];
        order[0] = dup;
        assert_eq!(Deck::from_order(&order), Err(DeckError::DuplicateCard(dup)));

        order[0] = Card::new(Suit::Hearts, 0);
        assert_eq!(
            Deck::from_order(&order),
            Err(DeckError::InvalidCard(Card::new(Suit::Hearts, 0)))
        );
    }
}
