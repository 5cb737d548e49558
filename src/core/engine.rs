use std::fmt::{self, Display};

use anyhow::bail;
use log::trace;
use serde::{Deserialize, Serialize};

/** Board coordinate, rank 0 is White's back rank */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Returns `None` when either coordinate falls outside `0..8`.
    pub fn new(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn file(&self) -> u8 {
        self.file
    }

    /// Square shifted by the given rank and file deltas, if still on the board.
    pub fn offset(&self, rank: i8, file: i8) -> Option<Square> {
        let rank = self.rank as i8 + rank;
        let file = self.file as i8 + file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Rank step of a single advance.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank from which a two-step advance is allowed.
    #[inline]
    pub fn start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank a pawn must stand on to capture en passant.
    #[inline]
    pub fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    /// Opponent's back rank, reaching it wins the game.
    #[inline]
    pub fn goal_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pawn {
    pub square: Square,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /** one step forward */
    QuietMove,
    /** two steps forward from the start rank */
    PawnDoublePush,
    /** diagonal step onto an enemy pawn */
    Capture,
    /** diagonal step behind an enemy pawn that just double pushed */
    EnPassantCapture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Square of the pawn removed by this move.
    pub fn captured(&self) -> Option<Square> {
        match self.kind {
            MoveKind::Capture => Some(self.to),
            MoveKind::EnPassantCapture => Some(Square {
                rank: self.from.rank,
                file: self.to.file,
            }),
            MoveKind::QuietMove | MoveKind::PawnDoublePush => None,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/** Two pawn registries, one per side */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    white: Vec<Pawn>,
    black: Vec<Pawn>,
}

impl Board {
    pub fn empty() -> Board {
        Board {
            white: Vec::new(),
            black: Vec::new(),
        }
    }

    /// Arbitrary position. Fails if any square is listed twice.
    pub fn from_squares(white: &[Square], black: &[Square]) -> anyhow::Result<Board> {
        let mut board = Board::empty();
        for (color, squares) in [(Color::White, white), (Color::Black, black)] {
            for &square in squares {
                if !board.is_blank(square) {
                    bail!("square {square} is occupied twice");
                }
                board.pawns_mut(color).push(Pawn { square, color });
            }
        }
        Ok(board)
    }

    pub fn pawns(&self, color: Color) -> &[Pawn] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn pawns_mut(&mut self, color: Color) -> &mut Vec<Pawn> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn pawn_count(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn figure_at(&self, square: Square) -> Option<Color> {
        if self.is_white_figure(square) {
            Some(Color::White)
        } else if self.is_black_figure(square) {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn is_figure(&self, color: Color, square: Square) -> bool {
        self.pawns(color).iter().any(|pawn| pawn.square == square)
    }

    pub fn is_white_figure(&self, square: Square) -> bool {
        self.is_figure(Color::White, square)
    }

    pub fn is_black_figure(&self, square: Square) -> bool {
        self.is_figure(Color::Black, square)
    }

    pub fn is_blank(&self, square: Square) -> bool {
        !self.is_white_figure(square) && !self.is_black_figure(square)
    }

    /** Relocate ***existing*** pawn of `color` onto a blank square. */
    pub fn apply_move(&mut self, color: Color, from: Square, to: Square) {
        assert!(self.is_blank(to), "Trying to move in busy place!");
        let pawn = self
            .pawns_mut(color)
            .iter_mut()
            .find(|pawn| pawn.square == from);
        match pawn {
            Some(pawn) => pawn.square = to,
            None => panic!("No {color} pawn at {from} to move!"),
        }
    }

    pub fn remove_figure(&mut self, color: Color, square: Square) -> Option<Pawn> {
        let pawns = self.pawns_mut(color);
        let index = pawns.iter().position(|pawn| pawn.square == square)?;
        Some(pawns.remove(index))
    }

    /** Execute ***valid*** move of `color`. */
    pub fn execute(&mut self, color: Color, _move: &Move) {
        trace!("Executing {color} {:?} {_move}", _move.kind);
        if let Some(target) = _move.captured() {
            let captured = self.remove_figure(color.opposite(), target);
            assert!(
                captured.is_some(),
                "That's a bug! Captured pawn is missing!"
            );
        }
        self.apply_move(color, _move.from, _move.to);
    }
}

impl Default for Board {
    fn default() -> Self {
        let row = |color: Color| {
            (0..8)
                .map(|file| Pawn {
                    square: Square {
                        rank: color.start_rank(),
                        file,
                    },
                    color,
                })
                .collect()
        };
        Board {
            white: row(Color::White),
            black: row(Color::Black),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
        for rank in (0..8u8).rev() {
            writeln!(f, "{BORDER}")?;
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let mark = match self.figure_at(Square { rank, file }) {
                    Some(Color::White) => 'W',
                    Some(Color::Black) => 'B',
                    None => ' ',
                };
                write!(f, " {mark} |")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{BORDER}")?;
        writeln!(f, "    a   b   c   d   e   f   g   h")
    }
}
