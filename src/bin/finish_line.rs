//! Interactive console front end for the race engine.
//!
//! Reads marker choices from stdin and prints the board after every
//! turn. Player names come from the command line (default: one
//! "Player 1"). All game rules live in the library; this binary only
//! prompts, validates raw input at its own boundary, and renders.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use finish_line::render::board_to_string;
use finish_line::{Game, GameConfig, MarkerChoice, PlayerId, TurnContext};

/// Parse a marker number (1-3) into a 0-based index.
fn parse_choice(line: &str) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=3).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Prompts on stdout and reads a marker number (1-3) from stdin,
/// re-requesting until the input parses and is in range. A game
/// cannot continue without a chooser, so a closed stdin ends the
/// process.
struct StdinChoice {
    input: io::Stdin,
}

impl MarkerChoice for StdinChoice {
    fn choose_marker(&mut self, ctx: &TurnContext<'_>) -> usize {
        loop {
            println!(
                "{}: Red {}  Black {}  Stop Value {}",
                ctx.player_name, ctx.red_value, ctx.black_value, ctx.stop_value
            );
            print!("Choose marker (1-3) for the {} die: ", ctx.die);
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.input.lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    println!("No more input; ending the game.");
                    std::process::exit(0);
                }
                Ok(_) => {}
            }

            match parse_choice(&line) {
                Some(index) => return index,
                None => println!("Please enter 1, 2, or 3."),
            }
        }
    }
}

fn main() {
    let mut player_names: Vec<String> = std::env::args().skip(1).collect();
    if player_names.is_empty() {
        player_names.push("Player 1".to_string());
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let config = GameConfig::standard(player_names);
    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("cannot start game: {err}");
            std::process::exit(1);
        }
    };

    let mut provider = StdinChoice { input: io::stdin() };
    println!("{}", board_to_string(game.board(), game.players()));

    let winner = loop {
        let mut finished = None;
        for id in PlayerId::all(game.players().len()) {
            println!("{}'s turn", game.player(id).name());
            match game.play_turn(id, &mut provider) {
                Ok(_) => println!("{}", board_to_string(game.board(), game.players())),
                Err(err) => {
                    eprintln!("turn failed: {err}");
                    std::process::exit(1);
                }
            }
            if game.winner() == Some(id) {
                finished = Some(id);
                break;
            }
        }
        if let Some(id) = finished {
            break id;
        }
    };

    println!("{} wins!", game.player(winner).name());
}
