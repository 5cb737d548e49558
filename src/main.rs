use std::io::{self, BufRead, Lines, StdinLock};

use anyhow::Context;
use log::{debug, info};
use pawns_chess::{utils::Command, Game, GameState};

type Input<'a> = Lines<StdinLock<'a>>;

fn read_line(input: &mut Input) -> anyhow::Result<Option<String>> {
    input
        .next()
        .transpose()
        .context("failed to read from stdin")
}

fn ask_name(input: &mut Input, prompt: &str) -> anyhow::Result<String> {
    println!("{prompt}");
    let name = read_line(input)?.context("stdin closed before a name was given")?;
    Ok(name.trim().to_owned())
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    println!("Pawns-Only Chess");
    let white = ask_name(&mut input, "First Player's name:")?;
    let black = ask_name(&mut input, "Second Player's name:")?;
    info!("New game: {white} (White) vs {black} (Black)");

    let mut game = Game::new();
    print!("{}", game.board());

    loop {
        let player = match game.state() {
            GameState::WhiteToMove => &white,
            GameState::BlackToMove => &black,
            _ => break,
        };
        println!("{player}'s turn:");
        let Some(line) = read_line(&mut input)? else {
            debug!("stdin closed, leaving");
            break;
        };
        let (state, start) = match Command::parse(&line) {
            Command::Exit => break,
            Command::Move(from, to) => (game.submit_move(from, to), Some(from)),
            Command::Invalid => (game.reject_input(), None),
        };
        match state {
            GameState::WhiteToMove | GameState::BlackToMove => print!("{}", game.board()),
            GameState::InvalidInput => {
                println!("Invalid Input");
                game.undo();
            }
            GameState::NoWhiteFigureAtSquare | GameState::NoBlackFigureAtSquare => {
                let color = if state == GameState::NoWhiteFigureAtSquare {
                    "white"
                } else {
                    "black"
                };
                match start {
                    Some(square) => println!("No {color} pawn at {square}"),
                    None => println!("No {color} pawn"),
                }
                game.undo();
            }
            GameState::WhiteWins | GameState::BlackWins | GameState::Stalemate => {
                print!("{}", game.board());
                println!(
                    "{}",
                    match state {
                        GameState::WhiteWins => "White Wins!",
                        GameState::BlackWins => "Black Wins!",
                        _ => "Stalemate!",
                    }
                );
                game.reject_input();
            }
            GameState::EndGame => (),
        }
    }

    info!("Session closed in {:?}", game.state());
    println!("Bye!");
    Ok(())
}
