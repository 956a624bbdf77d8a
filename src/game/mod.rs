//! Game engine and state management.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Prompt, RoundOutcome};

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack game: one deck, the player's hand and the
/// dealer's hand.
///
/// Every action runs to completion on `&mut self`. The prompt and the
/// round outcome are derived from the hands and the state and cannot be set
/// directly.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards for the current round.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// How the last round ended, if it has ended.
    outcome: Option<RoundOutcome>,
    /// Amount the player entered as a bet. Recorded, never settled.
    wager: Option<u32>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts [`GameState::Idle`] with empty hands; call
    /// [`Game::new_game`] to deal the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            state: GameState::Idle,
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
            wager: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the rule options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the player may still act this round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == GameState::PlayerTurn
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's cards as they should be shown on the table.
    ///
    /// While the round is active the first card is the face-down hole card
    /// and comes back as `None`.
    #[must_use]
    pub fn dealer_table_cards(&self) -> Vec<Option<Card>> {
        let hide_hole = self.is_active();
        self.dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| (!(hide_hole && i == 0)).then_some(*card))
            .collect()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards that can still be dealt this round.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns how the last round ended, or `None` while a round is active
    /// or before the first deal.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the prompt for the current state.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        match (self.state, self.outcome) {
            (GameState::PlayerTurn, _) => Prompt::HitOrStand {
                player: self.player.value(),
            },
            (GameState::Idle, Some(outcome)) => Prompt::Finished(outcome),
            (GameState::Idle, None) if self.player.is_empty() => Prompt::NotStarted,
            // Cards are on the table but no outcome was reached.
            (GameState::Idle, None) => Prompt::Unsettled,
        }
    }

    /// Returns the prompt text for the current state.
    #[must_use]
    pub fn message(&self) -> String {
        self.prompt().to_string()
    }

    /// Returns the recorded wager.
    #[must_use]
    pub const fn wager(&self) -> Option<u32> {
        self.wager
    }

    /// Records the player's wager for the next round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] while a round is in progress.
    pub fn set_wager(&mut self, amount: u32) -> Result<(), ActionError> {
        if self.state != GameState::Idle {
            return Err(ActionError::InvalidState);
        }
        self.wager = Some(amount);
        Ok(())
    }

    /// Ends the round with `outcome`.
    fn finish(&mut self, outcome: RoundOutcome) {
        self.state = GameState::Idle;
        self.outcome = Some(outcome);
        info!("round over: {outcome}");
    }
}
