use serde::{Deserialize, Serialize};

use crate::core::engine::{Color, Move, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pawn(Color),
}

/// Flat view of a game session, one value per message a front end can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    WhiteToMove,
    BlackToMove,
    InvalidInput,
    NoWhiteFigureAtSquare,
    NoBlackFigureAtSquare,
    WhiteWins,
    BlackWins,
    Stalemate,
    EndGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Malformed token or a move that breaks the pawn rules.
    InvalidInput,
    /// Start square holds no pawn of the side to move.
    NoFigureAtSquare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win(Color),
    Stalemate,
}

/// Session phase. Whose turn it is and what the last action did are kept
/// apart, so a rejection carries the side it returns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress { side: Color },
    Rejected { reason: Rejection, restore: Color },
    Finished { result: GameResult },
    Closed,
}

impl Outcome {
    pub fn state(&self) -> GameState {
        match *self {
            Outcome::InProgress { side: Color::White } => GameState::WhiteToMove,
            Outcome::InProgress { side: Color::Black } => GameState::BlackToMove,
            Outcome::Rejected {
                reason: Rejection::InvalidInput,
                ..
            } => GameState::InvalidInput,
            Outcome::Rejected {
                reason: Rejection::NoFigureAtSquare,
                restore: Color::White,
            } => GameState::NoWhiteFigureAtSquare,
            Outcome::Rejected {
                reason: Rejection::NoFigureAtSquare,
                restore: Color::Black,
            } => GameState::NoBlackFigureAtSquare,
            Outcome::Finished {
                result: GameResult::Win(Color::White),
            } => GameState::WhiteWins,
            Outcome::Finished {
                result: GameResult::Win(Color::Black),
            } => GameState::BlackWins,
            Outcome::Finished {
                result: GameResult::Stalemate,
            } => GameState::Stalemate,
            Outcome::Closed => GameState::EndGame,
        }
    }
}

pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, rank: usize, file: usize) -> Option<Cell>;
    fn possible_moves(&self, rank: usize, file: usize) -> Option<Vec<Move>>;
    fn execute_move(&mut self, from: Square, to: Square) -> GameState;
    fn undo_turn(&mut self) -> GameState;
    // info
    fn current_player(&self) -> Option<Color>;
    fn game_ended(&self) -> bool;
}
