//! Events emitted by the engine for the presentation layer.

use alloc::string::String;

/// Something notable that happened during an engine operation.
///
/// Every call that produces events ends with a [`GameEvent::TurnResolved`]
/// carrying the combined human-readable summary of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player joined the game.
    PlayerJoined {
        /// The new player's name.
        name: String,
    },
    /// A player ran out of points and left the game.
    PlayerEliminated {
        /// The eliminated player's name.
        name: String,
    },
    /// Only one player remains.
    GameOver {
        /// The winner's name.
        winner: String,
    },
    /// Summary of everything that happened in one call, one line per step.
    TurnResolved {
        /// Lines joined with `\n`.
        message: String,
    },
}

impl GameEvent {
    /// Returns the combined summary if this is a [`GameEvent::TurnResolved`].
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::TurnResolved { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
