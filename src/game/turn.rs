//! Turn resolution: symbol effects, elimination, pot refill, and rotation.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};

use crate::error::TurnError;
use crate::event::GameEvent;
use crate::player::next_in_ring;
use crate::symbol::Symbol;

use super::{GameState, Transition};

/// Resolves one spin for the player holding the current turn.
///
/// Returns `Ok(None)` without touching the state once the game is over.
///
/// # Errors
///
/// Returns an error if there are no players or no current turn.
pub fn play_turn(state: &GameState, symbol: Symbol) -> Result<Option<Transition>, TurnError> {
    if state.is_over() {
        return Ok(None);
    }
    if state.players.is_empty() {
        return Err(TurnError::NoPlayers);
    }
    let actor = state.current_player().ok_or(TurnError::NoCurrentTurn)?;
    let name = actor.name.clone();
    let turn_order = actor.turn_order;
    let score_before = actor.score;

    let mut turn = TurnResolver::new(state.clone());
    turn.apply_symbol(&name, symbol);
    // Only a score that fell to zero this turn, or a Shin with nothing left
    // to give, knocks the player out.
    if score_before > 0 || symbol == Symbol::Shin {
        turn.eliminate_if_broke(&name);
    }
    if !turn.is_over() && turn.state.pot_count == 0 {
        turn.refill_empty_pot();
    }
    if !turn.is_over() {
        turn.rotate(turn_order);
    }

    Ok(Some(turn.finish()))
}

struct TurnResolver {
    state: GameState,
    events: Vec<GameEvent>,
    lines: Vec<String>,
}

impl TurnResolver {
    const fn new(state: GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
            lines: Vec::new(),
        }
    }

    const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    fn apply_symbol(&mut self, name: &str, symbol: Symbol) {
        let pot = self.state.pot_count;
        let Some(player) = self.state.player_mut(name) else {
            return;
        };
        debug!("{name} spun {symbol} with {} point(s), pot {pot}", player.score);

        match symbol {
            Symbol::Nun => {
                self.lines
                    .push(format!("{name} landed on Nun. Nothing happens."));
            }
            Symbol::Gimmel => {
                player.score = player.score.saturating_add(pot);
                self.state.pot_count = 0;
                self.lines.push(format!(
                    "{name} landed on Gimmel and gets all {pot} point(s) from the pot!"
                ));
            }
            Symbol::Hay => {
                let half = pot.div_ceil(2);
                player.score = player.score.saturating_add(half);
                self.state.pot_count = pot - half;
                self.lines.push(format!(
                    "{name} landed on Hay and gets half the pot. That's {half} point(s)."
                ));
            }
            Symbol::Shin => {
                // A player already at zero has nothing left to give.
                if self.state.pay_into_pot(name) {
                    self.lines
                        .push(format!("{name} landed on Shin and loses one point."));
                }
            }
        }
    }

    /// Removes `name` if their score is zero, declaring a winner when one
    /// player is left.
    fn eliminate_if_broke(&mut self, name: &str) {
        let Some(index) = self
            .state
            .players
            .iter()
            .position(|p| p.name == name && p.is_broke())
        else {
            return;
        };

        let player = self.state.players.remove(index);
        info!("{} has been eliminated", player.name);
        self.lines.push(format!(
            "{} has no more points and is out of the game!",
            player.name
        ));
        self.events
            .push(GameEvent::PlayerEliminated { name: player.name });

        if let [survivor] = self.state.players.as_slice() {
            let winner = survivor.name.clone();
            info!("{winner} wins the game");
            self.state.next_turn = None;
            self.state.winner = Some(winner.clone());
            self.lines.push(format!("{winner} is the winner!"));
            self.events.push(GameEvent::GameOver { winner });
        }
    }

    /// Every remaining player pays one point into the pot, in join order.
    ///
    /// Players already at zero cannot pay and sit the refill out.
    fn refill_empty_pot(&mut self) {
        self.lines
            .push(String::from("The pot is empty! Everyone puts in one point."));

        let names: Vec<String> = self.state.players.iter().map(|p| p.name.clone()).collect();
        for name in names {
            if self.is_over() {
                break;
            }
            if self.state.pay_into_pot(&name) {
                self.eliminate_if_broke(&name);
            }
        }
    }

    fn rotate(&mut self, after: u32) {
        self.state.next_turn = next_in_ring(&self.state.players, after).map(|p| p.name.clone());
        debug!("next turn: {:?}", self.state.next_turn);
    }

    fn finish(mut self) -> Transition {
        self.events.push(GameEvent::TurnResolved {
            message: self.lines.join("\n"),
        });
        Transition {
            state: self.state,
            events: self.events,
        }
    }
}
