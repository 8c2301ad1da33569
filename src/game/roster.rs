//! Joining the game.

use alloc::format;
use alloc::string::String;
use alloc::vec;

use log::debug;

use crate::event::GameEvent;
use crate::player::{Player, next_turn_order};

use super::{GameState, Transition};

/// Seats a new player at the end of the turn ring.
///
/// Returns `None`, leaving the state untouched, when the name is blank or
/// already taken, or when the game is over.
#[must_use]
pub fn add_player(state: &GameState, name: &str, starting_score: u32) -> Option<Transition> {
    if name.trim().is_empty() || state.player(name).is_some() || state.is_over() {
        debug!("ignoring join request for {name:?}");
        return None;
    }

    let mut next = state.clone();
    let turn_order = next_turn_order(&next.players);
    next.players.push(Player::new(name, starting_score, turn_order));
    if next.next_turn.is_none() {
        next.next_turn = Some(String::from(name));
    }
    debug!("{name} joined with {starting_score} point(s) at turn order {turn_order}");

    Some(Transition {
        state: next,
        events: vec![
            GameEvent::PlayerJoined {
                name: String::from(name),
            },
            GameEvent::TurnResolved {
                message: format!("{name} joined the game."),
            },
        ],
    })
}
