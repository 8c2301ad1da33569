//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use log::{debug, warn};

use crate::error::{PersistenceError, ScoreError, TurnError};
use crate::event::GameEvent;
use crate::options::GameOptions;
use crate::player::Player;
use crate::store::{MemoryStore, Store};
use crate::symbol::Symbol;

pub mod roster;
pub mod state;
pub mod turn;

pub use state::GameState;

/// The result of applying one operation to a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the operation.
    pub state: GameState,
    /// Events produced by the operation, in the order they happened.
    pub events: Vec<GameEvent>,
}

type Subscriber = Box<dyn FnMut(&GameEvent)>;

/// A dreidel game engine with one-step undo and persistence.
///
/// Every mutating operation snapshots the current state for
/// [`undo_last_turn`](Self::undo_last_turn), applies a pure [`Transition`],
/// saves the result to the [`Store`], and hands the emitted events to every
/// subscriber before returning them.
pub struct Game<S: Store = MemoryStore> {
    /// Game options.
    options: GameOptions,
    /// Where the state is saved after each operation.
    store: S,
    /// Current game state.
    current: GameState,
    /// Snapshot taken before the last mutating operation.
    previous: Option<GameState>,
    /// Event callbacks.
    subscribers: Vec<Subscriber>,
    /// Outcome of the most recent persistence attempt.
    persistence_error: Option<PersistenceError>,
}

impl<S: Store> Game<S> {
    /// Creates a game, restoring any state saved under the configured key.
    ///
    /// A missing record starts an empty game. An unreadable or corrupt
    /// record is logged and also starts an empty game; the failure is kept
    /// in [`persistence_error`](Self::persistence_error).
    ///
    /// # Example
    ///
    /// ```
    /// use dreidel::{Game, GameOptions, MemoryStore};
    ///
    /// let game = Game::new(GameOptions::default(), MemoryStore::new());
    /// assert_eq!(game.pot_count(), 5);
    /// assert!(game.player_names().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, store: S) -> Self {
        let restored = store
            .load(&options.storage_key)
            .and_then(|bytes| bytes.map(|b| GameState::from_bytes(&b)).transpose());

        let (current, persistence_error) = match restored {
            Ok(Some(state)) => {
                debug!(
                    "restored game with {} player(s) from `{}`",
                    state.players.len(),
                    options.storage_key
                );
                (state, None)
            }
            Ok(None) => (GameState::new(options.starting_pot), None),
            Err(err) => {
                warn!("discarding saved game `{}`: {err}", options.storage_key);
                (GameState::new(options.starting_pot), Some(err))
            }
        };

        Self {
            options,
            store,
            current,
            previous: None,
            subscribers: Vec::new(),
            persistence_error,
        }
    }

    /// Registers a callback invoked synchronously for every emitted event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Adds a player with the configured starting score.
    ///
    /// Blank or duplicate names are silently ignored, as are joins after
    /// the game has been won. Returns the emitted events.
    pub fn add_player(&mut self, name: &str) -> Vec<GameEvent> {
        match roster::add_player(&self.current, name, self.options.starting_score) {
            Some(transition) => self.commit(transition),
            None => Vec::new(),
        }
    }

    /// Plays a turn for the current player with the drawn symbol.
    ///
    /// Does nothing and returns no events once the game has a winner.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players or no current turn. The
    /// state is not modified in that case.
    pub fn play_turn(&mut self, symbol: Symbol) -> Result<Vec<GameEvent>, TurnError> {
        Ok(match turn::play_turn(&self.current, symbol)? {
            Some(transition) => self.commit(transition),
            None => Vec::new(),
        })
    }

    /// Swaps the current state with the one saved before the last operation.
    ///
    /// Calling it twice in a row returns to where it started. Returns
    /// `false` if nothing has happened yet that could be undone.
    pub fn undo_last_turn(&mut self) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };
        self.previous = Some(mem::replace(&mut self.current, previous));
        debug!("undid last operation");
        self.persist();
        true
    }

    /// Resets to an empty game and removes the saved record.
    ///
    /// The cleared state can still be brought back with
    /// [`undo_last_turn`](Self::undo_last_turn).
    pub fn clear_game(&mut self) {
        let empty = GameState::new(self.options.starting_pot);
        self.previous = Some(mem::replace(&mut self.current, empty));
        debug!("cleared game");

        self.persistence_error = self.store.remove(&self.options.storage_key).err();
        if let Some(err) = &self.persistence_error {
            warn!("failed to remove saved game `{}`: {err}", self.options.storage_key);
        }
    }

    /// Returns the names of all players in join order.
    pub fn player_names(&self) -> Vec<&str> {
        self.current.players.iter().map(|p| p.name.as_str()).collect()
    }

    /// Returns the score of the named player.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::PlayerNotFound`] if no player has that name.
    pub fn score(&self, name: &str) -> Result<u32, ScoreError> {
        self.current
            .player(name)
            .map(|p| p.score)
            .ok_or(ScoreError::PlayerNotFound)
    }

    /// Returns the number of points in the pot.
    pub const fn pot_count(&self) -> u32 {
        self.current.pot_count
    }

    /// Returns the name of the player whose turn it is.
    pub fn current_turn(&self) -> Option<&str> {
        self.current.next_turn.as_deref()
    }

    /// Returns the winner's name once the game is over.
    pub fn winner(&self) -> Option<&str> {
        self.current.winner.as_deref()
    }

    /// Returns the players in join order.
    pub fn players(&self) -> &[Player] {
        &self.current.players
    }

    /// Returns the number of players still in the game.
    pub fn player_count(&self) -> usize {
        self.current.players.len()
    }

    /// Returns the current state.
    pub const fn state(&self) -> &GameState {
        &self.current
    }

    /// Returns the state [`undo_last_turn`](Self::undo_last_turn) would restore.
    pub const fn previous_state(&self) -> Option<&GameState> {
        self.previous.as_ref()
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the game and returns the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the failure of the most recent load, save, or remove, if it
    /// failed.
    pub const fn persistence_error(&self) -> Option<&PersistenceError> {
        self.persistence_error.as_ref()
    }

    fn commit(&mut self, transition: Transition) -> Vec<GameEvent> {
        self.previous = Some(mem::replace(&mut self.current, transition.state));
        self.persist();

        for event in &transition.events {
            for subscriber in &mut self.subscribers {
                subscriber(event);
            }
        }
        transition.events
    }

    fn persist(&mut self) {
        let saved = self
            .current
            .to_bytes()
            .and_then(|bytes| self.store.save(&self.options.storage_key, &bytes));

        self.persistence_error = saved.err();
        if let Some(err) = &self.persistence_error {
            warn!("failed to save game `{}`: {err}", self.options.storage_key);
        }
    }
}

impl<S: Store + fmt::Debug> fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("store", &self.store)
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("subscribers", &self.subscribers.len())
            .field("persistence_error", &self.persistence_error)
            .finish()
    }
}
