//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round in progress; only a new game can be started.
    #[default]
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
}
