//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_natural_blackjack_ends_round(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// The dealer keeps drawing while its hand is worth less than this.
    pub dealer_stands_on: u8,
    /// Whether a natural 21 on the opening deal settles the round at once.
    pub natural_blackjack_ends_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 16,
            natural_blackjack_ends_round: true,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(17);
    /// assert_eq!(options.dealer_stands_on, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets whether naturals on the opening deal end the round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_natural_blackjack_ends_round(false);
    /// assert!(!options.natural_blackjack_ends_round);
    /// ```
    #[must_use]
    pub const fn with_natural_blackjack_ends_round(mut self, ends_round: bool) -> Self {
        self.natural_blackjack_ends_round = ends_round;
        self
    }
}
