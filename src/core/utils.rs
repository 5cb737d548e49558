use anyhow::bail;

use crate::core::definitions::GameState;
use crate::core::engine::Square;
use crate::core::game::Game;

pub fn file_from_letter(letter: char) -> anyhow::Result<u8> {
    match letter {
        'a'..='h' => Ok(letter as u8 - b'a'),
        _ => bail!("unknown file: expected within 'a'..='h', got '{letter}'"),
    }
}

pub fn rank_from_digit(digit: char) -> anyhow::Result<u8> {
    match digit {
        '1'..='8' => Ok(digit as u8 - b'1'),
        _ => bail!("unknown rank: expected within '1'..='8', got '{digit}'"),
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let mut chars = square.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("unknown square: should be two-char, got '{square}'");
        };
        match Square::new(rank_from_digit(rank)?, file_from_letter(file)?) {
            Some(square) => Ok(square),
            None => bail!("square '{square}' is off the board"),
        }
    }
}

/// Parses a `[a-h][1-8][a-h][1-8]` token such as `e2e4`.
pub fn parse_move(token: &str) -> anyhow::Result<(Square, Square)> {
    if token.len() != 4 || !token.is_ascii() {
        bail!("unknown move: should be four ascii chars, got '{token}'");
    }
    let (from, to) = token.split_at(2);
    Ok((Square::try_from(from)?, Square::try_from(to)?))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Exit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        if line == "exit" {
            return Command::Exit;
        }
        match parse_move(line) {
            Ok((from, to)) => Command::Move(from, to),
            Err(_) => Command::Invalid,
        }
    }
}

/// Leaf count of the legal move tree. A game that ends before `depth`
/// counts as a single leaf.
pub fn perft(game: &Game, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len();
    }
    moves
        .into_iter()
        .map(|_move| {
            let mut game = game.clone();
            match game.submit_move(_move.from, _move.to) {
                GameState::WhiteToMove | GameState::BlackToMove => perft(&game, depth - 1),
                _ => 1,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).unwrap()
    }

    #[test]
    fn square_notation() {
        assert_eq!(Square::try_from("a1").unwrap(), sq(0, 0));
        assert_eq!(Square::try_from("e4").unwrap(), sq(3, 4));
        assert_eq!(Square::try_from("h8").unwrap(), sq(7, 7));
        assert_eq!(sq(3, 4).to_string(), "e4");
    }

    #[test]
    fn invalid_letters_do_not_alias() {
        assert!(file_from_letter('i').is_err());
        assert!(file_from_letter('H').is_err());
        assert!(rank_from_digit('0').is_err());
        assert!(rank_from_digit('9').is_err());
        assert!(Square::try_from("z1").is_err());
        assert!(Square::try_from("e").is_err());
        assert!(Square::try_from("e44").is_err());
    }

    #[test]
    fn move_tokens() {
        assert_eq!(parse_move("e2e4").unwrap(), (sq(1, 4), sq(3, 4)));
        assert_eq!(parse_move("h7h5").unwrap(), (sq(6, 7), sq(4, 7)));
        for token in ["", "e2e", "e2e4e", "i2i4", "e0e4", "E2E4", "é2e4", "e2 e4"] {
            assert!(parse_move(token).is_err(), "{token} should be rejected");
        }
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("a2a3"), Command::Move(sq(1, 0), sq(2, 0)));
        assert_eq!(Command::parse("Exit"), Command::Invalid);
        assert_eq!(Command::parse("a9a3"), Command::Invalid);
        // lines are matched as typed
        assert_eq!(Command::parse("e2e4 "), Command::Invalid);
        assert_eq!(Command::parse(" exit"), Command::Invalid);
    }

    #[test]
    fn perft_from_start() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 16);
        assert_eq!(perft(&game, 2), 256);
    }
}
