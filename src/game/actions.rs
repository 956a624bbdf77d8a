use alloc::vec::Vec;
use log::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::RoundOutcome;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            warn!("action rejected: no round in progress");
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Starts a new round: reshuffles the deck, clears both hands and deals
    /// two cards to the dealer, then two to the player.
    ///
    /// A dealer natural ends the round as a loss; otherwise a player natural
    /// ends it as a win. Valid from any state.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCards`] if the deck runs out while dealing,
    /// which a freshly shuffled deck never does.
    pub fn new_game(&mut self) -> Result<(), ActionError> {
        self.deck.shuffle(&mut self.rng);
        self.deal_round()
    }

    /// Starts a new round dealing from `deck` as given, without shuffling.
    ///
    /// Useful for replaying a recorded shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCards`] if `deck` has fewer than four cards
    /// left.
    pub fn new_game_with_deck(&mut self, deck: Deck) -> Result<(), ActionError> {
        self.deck = deck;
        self.deal_round()
    }

    fn deal_round(&mut self) -> Result<(), ActionError> {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.state = GameState::Idle;

        for _ in 0..2 {
            let card = self.deck.deal_card()?;
            self.dealer.add_card(card);
        }
        for _ in 0..2 {
            let card = self.deck.deal_card()?;
            self.player.add_card(card);
        }

        debug!(
            "new round: player {} ({}), dealer shows {:?}",
            self.player.value(),
            self.player.len(),
            self.dealer.cards().get(1),
        );

        if self.options.natural_blackjack_ends_round {
            if self.dealer.value() == BLACKJACK {
                self.finish(RoundOutcome::DealerBlackjack);
                return Ok(());
            }
            if self.player.value() == BLACKJACK {
                self.finish(RoundOutcome::PlayerBlackjack);
                return Ok(());
            }
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round as a loss.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn,
    /// leaving the game untouched, or [`ActionError::NoCards`] if the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal_card()?;
        self.player.add_card(card);

        let player = self.player.value();
        if player > BLACKJACK {
            self.finish(RoundOutcome::PlayerBust { player });
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Ends the player's turn, lets the dealer draw and settles the round.
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn,
    /// leaving the game untouched, or [`ActionError::NoCards`] if the deck
    /// runs out while the dealer must draw.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn()?;

        // The player's turn is over before the dealer draws.
        self.state = GameState::Idle;

        let drawn = self.dealer_play()?;
        let outcome = self.compare_hands();
        self.finish(outcome);

        Ok(drawn)
    }
}
