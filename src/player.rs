//! Player representation.

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// A player seated in the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique name of the player.
    pub name: String,
    /// Current point total.
    pub score: u32,
    /// Position in the turn ring. Assigned on join and never reused.
    pub turn_order: u32,
}

impl Player {
    /// Creates a new player.
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32, turn_order: u32) -> Self {
        Self {
            name: name.into(),
            score,
            turn_order,
        }
    }

    /// Returns whether the player has run out of points.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.score == 0
    }
}

/// Returns the turn order a newly joining player receives.
pub(crate) fn next_turn_order(players: &[Player]) -> u32 {
    players
        .iter()
        .map(|p| p.turn_order)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

/// Returns the player whose turn follows `after` in the ring.
///
/// Picks the smallest turn order strictly greater than `after`, wrapping to
/// the smallest turn order overall. `after` does not need to belong to a
/// player still in `players`, so the ring stays correct across gaps left by
/// eliminated players.
pub(crate) fn next_in_ring(players: &[Player], after: u32) -> Option<&Player> {
    players
        .iter()
        .filter(|p| p.turn_order > after)
        .min_by_key(|p| p.turn_order)
        .or_else(|| players.iter().min_by_key(|p| p.turn_order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(orders: &[u32]) -> alloc::vec::Vec<Player> {
        orders
            .iter()
            .map(|&order| Player::new(alloc::format!("p{order}"), 1, order))
            .collect()
    }

    #[test]
    fn next_turn_order_follows_the_maximum() {
        assert_eq!(next_turn_order(&[]), 1);
        assert_eq!(next_turn_order(&ring(&[1, 2, 4])), 5);
        assert_eq!(next_turn_order(&ring(&[3, 1])), 4);
    }

    #[test]
    fn ring_skips_gaps_and_wraps() {
        let players = ring(&[1, 2, 4]);
        assert_eq!(next_in_ring(&players, 2).map(|p| p.turn_order), Some(4));
        assert_eq!(next_in_ring(&players, 4).map(|p| p.turn_order), Some(1));
        assert_eq!(next_in_ring(&players, 3).map(|p| p.turn_order), Some(4));
    }

    #[test]
    fn ring_ignores_insertion_order() {
        let players = ring(&[5, 2, 9]);
        assert_eq!(next_in_ring(&players, 2).map(|p| p.turn_order), Some(5));
        assert_eq!(next_in_ring(&players, 9).map(|p| p.turn_order), Some(2));
    }

    #[test]
    fn ring_of_one_returns_to_the_same_player() {
        let players = ring(&[3]);
        assert_eq!(next_in_ring(&players, 3).map(|p| p.turn_order), Some(3));
        assert!(next_in_ring(&[], 3).is_none());
    }
}
