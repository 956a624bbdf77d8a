//! Round outcomes and the prompt text derived from them.

use core::fmt;

/// How a round ended.
///
/// Values are the final hand totals at the moment the round was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Dealer was dealt 21. Checked before the player's natural.
    DealerBlackjack,
    /// Player was dealt 21 and the dealer was not.
    PlayerBlackjack,
    /// Player went over 21 while hitting.
    PlayerBust {
        /// Player's total.
        player: u32,
    },
    /// Dealer went over 21 while drawing.
    DealerBust {
        /// Player's total.
        player: u32,
        /// Dealer's total.
        dealer: u32,
    },
    /// Player finished closer to 21.
    PlayerWins {
        /// Player's total.
        player: u32,
        /// Dealer's total.
        dealer: u32,
    },
    /// Dealer finished closer to 21.
    DealerWins {
        /// Player's total.
        player: u32,
        /// Dealer's total.
        dealer: u32,
    },
    /// Equal totals; the house wins ties.
    Tie {
        /// The shared total.
        value: u32,
    },
}

impl RoundOutcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(&self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust { .. } | Self::PlayerWins { .. }
        )
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DealerBlackjack => f.write_str("The dealer has 21! You lose!"),
            Self::PlayerBlackjack => f.write_str("You have 21! You win!"),
            Self::PlayerBust { player } => write!(f, "You have {player}. You lose!"),
            Self::DealerBust { .. } => f.write_str("Dealer went over 21. You win!"),
            Self::PlayerWins { player, dealer } => {
                write!(f, "You have {player}. The dealer has {dealer}. You win!")
            }
            Self::DealerWins { player, dealer } => {
                write!(f, "You have {player}. The dealer has {dealer}. You lose!")
            }
            Self::Tie { value } => write!(
                f,
                "You have {value}. The dealer has {value}. Dealer wins on ties! You lose!"
            ),
        }
    }
}

/// The message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// No round has been dealt yet.
    NotStarted,
    /// The player may hit or stand.
    HitOrStand {
        /// Player's current total.
        player: u32,
    },
    /// The round is over.
    Finished(RoundOutcome),
    /// The deck ran out before the round could be settled.
    Unsettled,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("Press New Game to start."),
            Self::HitOrStand { player } => write!(f, "You have {player}. Hit or Stand?"),
            Self::Finished(outcome) => fmt::Display::fmt(outcome, f),
            Self::Unsettled => f.write_str("The deck ran out. Press New Game to start."),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_report_totals() {
        assert_eq!(
            Prompt::HitOrStand { player: 15 }.to_string(),
            "You have 15. Hit or Stand?"
        );
        assert_eq!(
            Prompt::Finished(RoundOutcome::Tie { value: 18 }).to_string(),
            "You have 18. The dealer has 18. Dealer wins on ties! You lose!"
        );
        assert_eq!(
            RoundOutcome::DealerWins {
                player: 17,
                dealer: 19
            }
            .to_string(),
            "You have 17. The dealer has 19. You lose!"
        );
    }

    #[test]
    fn ties_are_losses() {
        assert!(!RoundOutcome::Tie { value: 20 }.player_won());
        assert!(RoundOutcome::DealerBust {
            player: 12,
            dealer: 25
        }
        .player_won());
    }
}
