//! Game integration tests.

use std::sync::mpsc;

use dreidel::{
    FileStore, Game, GameEvent, GameOptions, GameState, MemoryStore, PersistenceError, Player,
    ScoreError, Store, Symbol, TurnError,
};

const KEY: &str = "game-state";

fn two_player_game() -> Game {
    let mut game = Game::new(GameOptions::default(), MemoryStore::new());
    game.add_player("A");
    game.add_player("B");
    game
}

fn game_from(state: &GameState) -> Game {
    let mut store = MemoryStore::new();
    store.save(KEY, &state.to_bytes().unwrap()).unwrap();
    let game = Game::new(GameOptions::default(), store);
    assert_eq!(game.state(), state);
    game
}

fn state(pot: u32, players: &[(&str, u32, u32)], next: &str) -> GameState {
    GameState {
        pot_count: pot,
        players: players
            .iter()
            .map(|&(name, score, order)| Player::new(name, score, order))
            .collect(),
        next_turn: Some(next.to_string()),
        winner: None,
    }
}

/// A store whose writes always fail.
#[derive(Debug, Default)]
struct BrokenStore;

impl Store for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Err(PersistenceError::Unavailable("offline".into()))
    }

    fn save(&mut self, _key: &str, _bytes: &[u8]) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("quota exceeded".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("offline".into()))
    }
}

#[test]
fn new_game_starts_empty() {
    let game = Game::new(GameOptions::default(), MemoryStore::new());
    assert_eq!(game.pot_count(), 5);
    assert!(game.player_names().is_empty());
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.winner(), None);
    assert!(game.persistence_error().is_none());
}

#[test]
fn players_join_in_order_with_starting_score() {
    let mut game = two_player_game();
    let events = game.add_player("C");

    assert_eq!(game.player_names(), ["A", "B", "C"]);
    assert_eq!(game.player_count(), 3);
    assert_eq!(game.score("C"), Ok(4));
    assert_eq!(game.players()[2].turn_order, 3);
    assert_eq!(game.current_turn(), Some("A"));
    assert_eq!(
        events[0],
        GameEvent::PlayerJoined {
            name: "C".to_string()
        }
    );
}

#[test]
fn duplicate_and_empty_names_are_ignored() {
    let mut game = two_player_game();
    let before = game.state().clone();

    assert!(game.add_player("A").is_empty());
    assert!(game.add_player("").is_empty());
    assert_eq!(game.state(), &before);
}

#[test]
fn score_of_unknown_player_is_an_error() {
    let game = two_player_game();
    assert_eq!(game.score("Z"), Err(ScoreError::PlayerNotFound));
}

#[test]
fn two_player_scenario() {
    let mut game = two_player_game();

    game.play_turn(Symbol::Gimmel).unwrap();
    assert_eq!(game.score("A"), Ok(8));
    assert_eq!(game.score("B"), Ok(3));
    assert_eq!(game.pot_count(), 2);
    assert_eq!(game.current_turn(), Some("B"));

    game.play_turn(Symbol::Shin).unwrap();
    assert_eq!(game.score("B"), Ok(2));
    assert_eq!(game.pot_count(), 3);
    assert_eq!(game.current_turn(), Some("A"));
}

#[test]
fn nun_changes_only_the_turn() {
    let mut game = two_player_game();
    let events = game.play_turn(Symbol::Nun).unwrap();

    assert_eq!(game.score("A"), Ok(4));
    assert_eq!(game.pot_count(), 5);
    assert_eq!(game.current_turn(), Some("B"));
    assert_eq!(
        events,
        [GameEvent::TurnResolved {
            message: "A landed on Nun. Nothing happens.".to_string()
        }]
    );
}

#[test]
fn hay_splits_the_pot_rounding_up() {
    let mut game = two_player_game();
    game.play_turn(Symbol::Hay).unwrap();
    assert_eq!(game.score("A"), Ok(7));
    assert_eq!(game.pot_count(), 2);

    game.play_turn(Symbol::Hay).unwrap();
    assert_eq!(game.score("B"), Ok(5));
    assert_eq!(game.pot_count(), 1);
}

#[test]
fn rotation_skips_gaps_and_wraps() {
    let mut game = game_from(&state(5, &[("A", 4, 1), ("B", 4, 2), ("D", 4, 4)], "B"));

    game.play_turn(Symbol::Nun).unwrap();
    assert_eq!(game.current_turn(), Some("D"));

    game.play_turn(Symbol::Nun).unwrap();
    assert_eq!(game.current_turn(), Some("A"));
}

#[test]
fn gap_left_by_an_elimination_is_skipped() {
    let mut game = Game::new(GameOptions::default(), MemoryStore::new());
    for name in ["A", "B", "C", "D"] {
        game.add_player(name);
    }
    game.play_turn(Symbol::Nun).unwrap();
    game.play_turn(Symbol::Nun).unwrap();
    assert_eq!(game.current_turn(), Some("C"));

    for _ in 0..4 {
        // C gives away points until eliminated; the others spin nun.
        while game.current_turn() != Some("C") {
            game.play_turn(Symbol::Nun).unwrap();
        }
        game.play_turn(Symbol::Shin).unwrap();
    }

    assert_eq!(game.player_names(), ["A", "B", "D"]);
    assert_eq!(game.current_turn(), Some("D"));
    game.play_turn(Symbol::Nun).unwrap();
    assert_eq!(game.current_turn(), Some("A"));

    game.add_player("E");
    assert_eq!(game.players()[3].turn_order, 5);
}

#[test]
fn last_shin_ends_the_game() {
    let mut game = game_from(&state(5, &[("A", 4, 1), ("B", 1, 2)], "B"));

    let events = game.play_turn(Symbol::Shin).unwrap();
    assert_eq!(game.winner(), Some("A"));
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.player_names(), ["A"]);
    assert_eq!(game.pot_count(), 6);
    assert_eq!(
        events,
        [
            GameEvent::PlayerEliminated {
                name: "B".to_string()
            },
            GameEvent::GameOver {
                winner: "A".to_string()
            },
            GameEvent::TurnResolved {
                message: "B landed on Shin and loses one point.\n\
                          B has no more points and is out of the game!\n\
                          A is the winner!"
                    .to_string()
            },
        ]
    );

    let finished = game.state().clone();
    assert_eq!(game.play_turn(Symbol::Gimmel), Ok(Vec::new()));
    assert_eq!(game.state(), &finished);
    assert!(game.add_player("C").is_empty());
}

#[test]
fn empty_pot_cascade_eliminates_several_players() {
    let mut game = game_from(&state(
        2,
        &[("A", 1, 1), ("B", 1, 2), ("C", 5, 3), ("D", 1, 4)],
        "C",
    ));

    let events = game.play_turn(Symbol::Gimmel).unwrap();
    let eliminated: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::PlayerEliminated { .. }))
        .collect();

    assert_eq!(eliminated.len(), 3);
    assert_eq!(game.winner(), Some("C"));
    // C pays into the pot too before D is knocked out.
    assert_eq!(game.score("C"), Ok(6));
    assert_eq!(game.pot_count(), 4);
    assert_eq!(game.state().total_points(), 10);
}

#[test]
fn single_player_elimination_has_no_winner() {
    let options = GameOptions::default().with_starting_score(1);
    let mut game = Game::new(options, MemoryStore::new());
    game.add_player("C");

    game.play_turn(Symbol::Shin).unwrap();
    assert!(game.player_names().is_empty());
    assert_eq!(game.winner(), None);
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.pot_count(), 6);

    assert_eq!(game.play_turn(Symbol::Nun), Err(TurnError::NoPlayers));
}

#[test]
fn playing_without_players_is_rejected() {
    let mut game = Game::new(GameOptions::default(), MemoryStore::new());
    assert_eq!(game.play_turn(Symbol::Hay), Err(TurnError::NoPlayers));
    assert!(!game.undo_last_turn());
}

#[test]
fn undo_toggles_between_the_last_two_states() {
    let mut game = two_player_game();
    game.play_turn(Symbol::Nun).unwrap();
    let before = game.state().clone();

    game.play_turn(Symbol::Gimmel).unwrap();
    let after = game.state().clone();

    assert!(game.undo_last_turn());
    assert_eq!(game.state(), &before);
    assert!(game.undo_last_turn());
    assert_eq!(game.state(), &after);
    assert!(game.undo_last_turn());
    assert_eq!(game.state(), &before);
}

#[test]
fn undo_brings_back_a_finished_game() {
    let mut game = game_from(&state(5, &[("A", 4, 1), ("B", 1, 2)], "B"));
    let before = game.state().clone();

    game.play_turn(Symbol::Shin).unwrap();
    assert!(game.undo_last_turn());
    assert_eq!(game.state(), &before);
    assert_eq!(game.winner(), None);
}

#[test]
fn clear_game_resets_and_can_be_undone() {
    let mut game = two_player_game();
    game.play_turn(Symbol::Hay).unwrap();
    let played = game.state().clone();

    game.clear_game();
    assert_eq!(game.state(), &GameState::new(5));
    assert!(game.store().is_empty());

    assert!(game.undo_last_turn());
    assert_eq!(game.state(), &played);
    assert!(game.store().get(KEY).is_some());
}

#[test]
fn every_operation_is_saved() {
    let mut game = two_player_game();
    game.play_turn(Symbol::Gimmel).unwrap();
    let state = game.state().clone();

    let restored = Game::new(GameOptions::default(), game.into_store());
    assert_eq!(restored.state(), &state);
    assert_eq!(restored.current_turn(), Some("B"));
}

#[test]
fn storage_key_is_configurable() {
    let options = GameOptions::default().with_storage_key("other");
    let mut game = Game::new(options, MemoryStore::new());
    game.add_player("A");

    assert!(game.store().get("other").is_some());
    assert!(game.store().get(KEY).is_none());
}

#[test]
fn corrupt_record_falls_back_to_an_empty_game() {
    let mut store = MemoryStore::new();
    store
        .save(KEY, br#"{"potCount":3,"players":[],"nextTurn":"ghost"}"#)
        .unwrap();

    let game = Game::new(GameOptions::default(), store);
    assert_eq!(game.state(), &GameState::new(5));
    assert!(matches!(
        game.persistence_error(),
        Some(PersistenceError::Corrupt(_))
    ));
}

#[test]
fn broken_store_does_not_block_the_game() {
    let mut game = Game::new(GameOptions::default(), BrokenStore);
    assert!(game.persistence_error().is_some());

    game.add_player("A");
    game.add_player("B");
    game.play_turn(Symbol::Gimmel).unwrap();

    assert_eq!(game.score("A"), Ok(8));
    assert_eq!(
        game.persistence_error(),
        Some(&PersistenceError::Unavailable("quota exceeded".into()))
    );

    game.clear_game();
    assert!(game.player_names().is_empty());
}

#[test]
fn subscribers_see_events_in_order() {
    let (tx, rx) = mpsc::channel();
    let mut game = Game::new(GameOptions::default(), MemoryStore::new());
    game.subscribe(move |event| {
        let _ = tx.send(event.clone());
    });

    game.add_player("A");
    game.add_player("B");
    let returned = game.play_turn(Symbol::Gimmel).unwrap();

    let seen: Vec<GameEvent> = rx.try_iter().collect();
    assert_eq!(seen.len(), 5);
    assert_eq!(&seen[4..], returned.as_slice());
    assert_eq!(
        seen[4].message(),
        Some(
            "A landed on Gimmel and gets all 5 point(s) from the pot!\n\
             The pot is empty! Everyone puts in one point."
        )
    );
}

#[test]
fn pot_only_variant_uses_options() {
    let options = GameOptions::default()
        .with_starting_pot(12)
        .with_starting_score(2);
    let mut game = Game::new(options, MemoryStore::new());
    game.add_player("A");

    assert_eq!(game.pot_count(), 12);
    assert_eq!(game.score("A"), Ok(2));
    game.clear_game();
    assert_eq!(game.pot_count(), 12);
}

#[test]
fn zero_starting_score_keeps_players_until_they_give_a_point() {
    let options = GameOptions::default().with_starting_score(0);
    let mut game = Game::new(options, MemoryStore::new());
    for name in ["A", "B", "C"] {
        game.add_player(name);
    }

    game.play_turn(Symbol::Nun).unwrap();
    game.play_turn(Symbol::Nun).unwrap();
    assert_eq!(game.player_names(), ["A", "B", "C"]);
    assert_eq!(game.current_turn(), Some("C"));

    // Only C can refill the empty pot.
    let events = game.play_turn(Symbol::Gimmel).unwrap();
    assert_eq!(game.score("C"), Ok(4));
    assert_eq!(game.score("A"), Ok(0));
    assert_eq!(game.pot_count(), 1);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerEliminated { .. }))
    );

    // A takes the last point, then pays it back in the refill and is out.
    game.play_turn(Symbol::Hay).unwrap();
    assert_eq!(game.player_names(), ["B", "C"]);
    assert_eq!(game.score("C"), Ok(3));
    assert_eq!(game.pot_count(), 2);
    assert_eq!(game.current_turn(), Some("B"));
    assert_eq!(game.state().total_points(), 5);

    // B has nothing to give on Shin and is out.
    game.play_turn(Symbol::Shin).unwrap();
    assert_eq!(game.winner(), Some("C"));
}

#[test]
fn file_store_persists_between_sessions() {
    let dir = std::env::temp_dir().join(format!("dreidel-test-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let mut game = Game::new(GameOptions::default(), FileStore::new(&dir));
    game.add_player("A");
    game.add_player("B");
    game.play_turn(Symbol::Hay).unwrap();
    let state = game.state().clone();

    let restored = Game::new(GameOptions::default(), FileStore::new(&dir));
    assert_eq!(restored.state(), &state);

    let mut cleared = restored;
    cleared.clear_game();
    assert!(!cleared.store().path_for(KEY).exists());
    assert!(cleared.persistence_error().is_none());

    let _ = std::fs::remove_dir_all(&dir);
}
