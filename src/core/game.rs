use log::{debug, trace};

use crate::core::definitions::{Cell, GameResult, GameState, MatchInterface, Outcome, Rejection};
use crate::core::engine::{Board, Color, Move, Square};
use crate::core::history::History;
use crate::core::rules;

pub fn ui_board(board: &Board) -> Vec<Vec<Cell>> {
    (0..8)
        .map(|rank| {
            (0..8)
                .filter_map(|file| Square::new(rank, file))
                .map(|square| match board.figure_at(square) {
                    Some(color) => Cell::Pawn(color),
                    None => Cell::Empty,
                })
                .collect()
        })
        .collect()
}

fn square_at(rank: usize, file: usize) -> Option<Square> {
    Square::new(u8::try_from(rank).ok()?, u8::try_from(file).ok()?)
}

/// One game session. Board, history and phase are owned together, so
/// sessions never share state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: History,
    outcome: Outcome,
}

impl Game {
    pub fn new() -> Game {
        Game::with_position(Board::default(), Color::White)
    }

    pub fn with_position(board: Board, player: Color) -> Game {
        Game {
            board,
            history: History::new(),
            outcome: Outcome::InProgress { side: player },
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn state(&self) -> GameState {
        self.outcome.state()
    }

    /// Side whose move is awaited, `None` outside live states.
    pub fn side_to_move(&self) -> Option<Color> {
        match self.outcome {
            Outcome::InProgress { side } => Some(side),
            _ => None,
        }
    }

    pub fn occupancy(&self, square: Square) -> Cell {
        match self.board.figure_at(square) {
            Some(color) => Cell::Pawn(color),
            None => Cell::Empty,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        match self.side_to_move() {
            Some(side) => {
                rules::possible_moves(&self.board, self.history.previous_board(), side)
            }
            None => Vec::new(),
        }
    }

    pub fn possible_moves_from(&self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|_move| _move.from == square)
            .collect()
    }

    pub fn submit_move(&mut self, from: Square, to: Square) -> GameState {
        match self.outcome {
            Outcome::InProgress { side } => self.make_turn(side, from, to),
            Outcome::Finished { result } => self.close(result),
            Outcome::Rejected { .. } | Outcome::Closed => {
                trace!("Ignoring {from}{to} in {:?}", self.outcome);
            }
        }
        self.state()
    }

    /// Input that names no squares at all.
    pub fn reject_input(&mut self) -> GameState {
        match self.outcome {
            Outcome::InProgress { side } => {
                debug!("Malformed input from {side}");
                self.outcome = Outcome::Rejected {
                    reason: Rejection::InvalidInput,
                    restore: side,
                };
            }
            Outcome::Finished { result } => self.close(result),
            Outcome::Rejected { .. } | Outcome::Closed => (),
        }
        self.state()
    }

    pub fn undo(&mut self) -> GameState {
        if let Outcome::Rejected { reason, restore } = self.outcome {
            trace!("Undo {reason:?}, back to {restore}");
            self.outcome = Outcome::InProgress { side: restore };
        }
        self.state()
    }

    fn close(&mut self, result: GameResult) {
        debug!("Game closed after {result:?}");
        self.outcome = Outcome::Closed;
    }

    fn make_turn(&mut self, side: Color, from: Square, to: Square) {
        if !self.board.is_figure(side, from) {
            debug!("No {side} pawn at {from}");
            self.outcome = Outcome::Rejected {
                reason: Rejection::NoFigureAtSquare,
                restore: side,
            };
            return;
        }
        let kind = rules::classify(&self.board, self.history.previous_board(), side, from, to);
        let Some(kind) = kind else {
            debug!("Illegal {side} move {from}{to}");
            self.outcome = Outcome::Rejected {
                reason: Rejection::InvalidInput,
                restore: side,
            };
            return;
        };
        let _move = Move { from, to, kind };
        self.history.push(self.board.clone(), side);
        trace!("Recorded ply #{}", self.history.len());
        self.board.execute(side, &_move);

        let opponent = side.opposite();
        let previous = self.history.previous_board();
        self.outcome = if rules::is_stalemate(&self.board, previous, opponent) {
            debug!("{opponent} has no legal move after {_move}");
            Outcome::Finished {
                result: GameResult::Stalemate,
            }
        } else if rules::is_winner(&self.board, side) {
            debug!("{side} wins with {_move}");
            Outcome::Finished {
                result: GameResult::Win(side),
            }
        } else {
            Outcome::InProgress { side: opponent }
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl MatchInterface for Game {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        ui_board(&self.board)
    }

    fn cell(&self, rank: usize, file: usize) -> Option<Cell> {
        square_at(rank, file).map(|square| self.occupancy(square))
    }

    fn possible_moves(&self, rank: usize, file: usize) -> Option<Vec<Move>> {
        let moves = self.possible_moves_from(square_at(rank, file)?);
        if moves.is_empty() {
            None
        } else {
            Some(moves)
        }
    }

    fn execute_move(&mut self, from: Square, to: Square) -> GameState {
        self.submit_move(from, to)
    }

    fn undo_turn(&mut self) -> GameState {
        self.undo()
    }

    fn current_player(&self) -> Option<Color> {
        self.side_to_move()
    }

    fn game_ended(&self) -> bool {
        matches!(self.outcome, Outcome::Finished { .. } | Outcome::Closed)
    }
}
