//! Game state and its persistence record.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::player::Player;

/// The complete state of one dreidel game.
///
/// Serialized as a camelCase JSON record:
///
/// ```json
/// {"potCount":5,"players":[{"name":"Avi","score":4,"turnOrder":1}],"nextTurn":"Avi"}
/// ```
///
/// `winner` is omitted while the game is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Points in the shared pot.
    pub pot_count: u32,
    /// Active players in join order.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Name of the player whose turn it is.
    #[serde(default)]
    pub next_turn: Option<String>,
    /// Name of the winner once the game has ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl GameState {
    /// Creates an empty game with the given pot.
    #[must_use]
    pub const fn new(starting_pot: u32) -> Self {
        Self {
            pot_count: starting_pot,
            players: Vec::new(),
            next_turn: None,
            winner: None,
        }
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub(crate) fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Moves one point from `name` into the pot.
    ///
    /// Returns `false` if the player is unknown or has no points left.
    pub(crate) fn pay_into_pot(&mut self, name: &str) -> bool {
        let Some(player) = self.player_mut(name) else {
            return false;
        };
        if player.is_broke() {
            return false;
        }
        player.score -= 1;
        self.pot_count = self.pot_count.saturating_add(1);
        true
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.next_turn.as_deref().and_then(|name| self.player(name))
    }

    /// Returns whether the game has ended with a winner.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the sum of all scores plus the pot.
    #[must_use]
    pub fn total_points(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.score)).sum::<u64>() + u64::from(self.pot_count)
    }

    /// Encodes the state as a JSON record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        serde_json::to_vec(self).map_err(|err| PersistenceError::Encode(err.to_string()))
    }

    /// Decodes and validates a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] if the bytes are not a valid
    /// record or the record breaks a game invariant.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let state: Self = serde_json::from_slice(bytes)
            .map_err(|err| PersistenceError::Corrupt(err.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Checks the invariants a restored record must satisfy.
    ///
    /// Zero scores are accepted; the turn logic eliminates such players the
    /// next time they act.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] describing the first violation.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        let mut names = BTreeSet::new();
        let mut orders = BTreeSet::new();
        for player in &self.players {
            if player.name.is_empty() {
                return Err(corrupt("player with an empty name"));
            }
            if !names.insert(player.name.as_str()) {
                return Err(corrupt(&format!("duplicate player `{}`", player.name)));
            }
            if player.turn_order == 0 || !orders.insert(player.turn_order) {
                return Err(corrupt(&format!(
                    "invalid turn order {} for `{}`",
                    player.turn_order, player.name
                )));
            }
        }

        if let Some(next) = &self.next_turn {
            if self.player(next).is_none() {
                return Err(corrupt(&format!("current turn names unknown player `{next}`")));
            }
        }

        if let Some(winner) = &self.winner {
            let sole_survivor = self.players.len() == 1 && self.players[0].name == *winner;
            if !sole_survivor || self.next_turn.is_some() {
                return Err(corrupt(&format!("inconsistent winner `{winner}`")));
            }
        }

        Ok(())
    }
}

fn corrupt(reason: &str) -> PersistenceError {
    PersistenceError::Corrupt(String::from(reason))
}
