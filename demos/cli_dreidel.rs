//! CLI dreidel example.
//!
//! Saves the game in `.dreidel/` (or `$DREIDEL_SAVE_DIR`) so it survives
//! restarts. Set `RUST_LOG=debug` to watch the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use dreidel::{FileStore, Game, GameEvent, GameOptions, Spinner, Symbol};

fn main() {
    env_logger::init();
    println!("Dreidel CLI example (type 'help' for commands, 'q' to quit)");

    let dir = std::env::var("DREIDEL_SAVE_DIR").unwrap_or_else(|_| String::from(".dreidel"));
    let mut game = Game::new(GameOptions::default(), FileStore::new(dir));
    if let Some(err) = game.persistence_error() {
        println!("Could not load the saved game: {err}");
    }
    game.subscribe(|event| {
        if let GameEvent::TurnResolved { message } = event {
            println!("{message}");
        }
    });

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut spinner = Spinner::new(seed);

    loop {
        print_table(&game);
        let input = prompt_line("> ");
        let (command, arg) = input.split_once(' ').unwrap_or((input.as_str(), ""));

        match command {
            "" => {}
            "q" | "quit" => break,
            "help" => print_help(),
            "add" => {
                let name = arg.trim();
                if game.add_player(name).is_empty() {
                    println!("Cannot add {name:?}.");
                }
            }
            "spin" | "s" => play(&mut game, spinner.spin()),
            "undo" | "u" => {
                if !game.undo_last_turn() {
                    println!("Nothing to undo.");
                }
            }
            "clear" => {
                game.clear_game();
                println!("Game cleared.");
            }
            other => match other.parse::<Symbol>() {
                Ok(symbol) => play(&mut game, symbol),
                Err(_) => println!("Unknown command."),
            },
        }

        if let Some(err) = game.persistence_error() {
            println!("Warning: {err}");
        }
    }
}

fn play(game: &mut Game<FileStore>, symbol: Symbol) {
    if game.player_count() < 2 && game.winner().is_none() {
        println!("Add at least two players first.");
        return;
    }
    if let Err(err) = game.play_turn(symbol) {
        println!("Turn error: {err}");
    }
}

fn print_help() {
    println!("  add <name>     add a player");
    println!("  spin           spin the dreidel");
    println!("  nun | gimmel | hay | shin");
    println!("                 play a turn with a known result");
    println!("  undo           undo the last action");
    println!("  clear          start over");
}

fn print_table(game: &Game<FileStore>) {
    println!("\nPot: {}", game.pot_count());
    for player in game.players() {
        let marker = if game.current_turn() == Some(player.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<12} {:>3}", player.name, player.score);
    }
    if let Some(winner) = game.winner() {
        println!("{winner} has won. Type 'clear' to play again.");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    if input.is_empty() {
        // EOF
        return String::from("q");
    }
    input.trim().to_string()
}
