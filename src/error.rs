//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when reading a player's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// No active player has that name.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when playing a turn.
///
/// Both variants mean the operation is not valid in the current phase of
/// the game; the state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has no players.
    #[error("no players have joined the game")]
    NoPlayers,
    /// There is no current turn, or it names a player who is not in the game.
    #[error("no player holds the current turn")]
    NoCurrentTurn,
}

/// Error returned when parsing an unknown dreidel symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown dreidel symbol")]
pub struct ParseSymbolError;

/// Errors raised by a [`Store`](crate::Store) or by the persistence codec.
///
/// These never abort an engine operation: the in-memory state is updated
/// regardless and the failure is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The store could not be read or written.
    #[error("persistence store unavailable: {0}")]
    Unavailable(String),
    /// The stored record could not be decoded or violates a game invariant.
    #[error("stored game state is corrupt: {0}")]
    Corrupt(String),
    /// The state could not be encoded.
    #[error("game state could not be encoded: {0}")]
    Encode(String),
}
