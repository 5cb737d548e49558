pub mod core;

// module re-exports
pub use crate::core::definitions::{Cell, GameResult, GameState, MatchInterface, Outcome, Rejection};
pub use crate::core::engine::{Board, Color, Move, MoveKind, Pawn, Square};
pub use crate::core::game::{ui_board, Game};
pub use crate::core::history::History;
pub use crate::core::utils;
