use alloc::vec::Vec;
use log::debug;

use crate::card::Card;
use crate::error::DealError;
use crate::hand::BLACKJACK;
use crate::result::RoundOutcome;

use super::Game;

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while the hand is worth less than
    /// [`GameOptions::dealer_stands_on`](crate::GameOptions::dealer_stands_on),
    /// with no special case for soft totals. Returns the cards drawn.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, DealError> {
        let mut drawn_cards = Vec::new();

        while self.dealer.value() < u32::from(self.options.dealer_stands_on) {
            let card = self.deck.deal_card()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        debug!(
            "dealer stands on {} after drawing {}",
            self.dealer.value(),
            drawn_cards.len()
        );

        Ok(drawn_cards)
    }

    /// Compares the final hands. Ties go to the dealer.
    pub(super) fn compare_hands(&self) -> RoundOutcome {
        let player = self.player.value();
        let dealer = self.dealer.value();

        if dealer > BLACKJACK {
            RoundOutcome::DealerBust { player, dealer }
        } else if dealer == player {
            RoundOutcome::Tie { value: dealer }
        } else if dealer < player {
            RoundOutcome::PlayerWins { player, dealer }
        } else {
            RoundOutcome::DealerWins { player, dealer }
        }
    }
}
