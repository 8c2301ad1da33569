//! A dreidel rules engine with one-step undo and optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the game state: players,
//! turn order, the shared pot, elimination, and win detection. The spin
//! outcome is always supplied by the caller; [`Spinner`] is a seeded helper
//! for hosts that want one.
//!
//! # Example
//!
//! ```
//! use dreidel::{Game, GameOptions, MemoryStore, Symbol};
//!
//! let mut game = Game::new(GameOptions::default(), MemoryStore::new());
//! game.add_player("Avi");
//! game.add_player("Batya");
//!
//! game.play_turn(Symbol::Gimmel).unwrap();
//! assert_eq!(game.score("Avi"), Ok(8));
//! assert_eq!(game.pot_count(), 2);
//! assert_eq!(game.current_turn(), Some("Batya"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod spin;
pub mod store;
pub mod symbol;

// Re-export main types
pub use error::{ParseSymbolError, PersistenceError, ScoreError, TurnError};
pub use event::GameEvent;
pub use game::{Game, GameState, Transition};
pub use options::GameOptions;
pub use player::Player;
pub use spin::Spinner;
#[cfg(feature = "std")]
pub use store::FileStore;
pub use store::{MemoryStore, Store};
pub use symbol::{SYMBOLS, Symbol};
