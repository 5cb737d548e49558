use crate::core::engine::{Board, Color};

/// Position before an applied move, and who made that move. The game
/// itself resumes from `Outcome`, `mover` is for callers replaying a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub mover: Color,
}

/// Append-only record of one session. Only successful moves are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn push(&mut self, board: Board, mover: Color) {
        self.snapshots.push(Snapshot { board, mover });
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Board one ply ago, the en passant lookback.
    pub fn previous_board(&self) -> Option<&Board> {
        self.last().map(|snapshot| &snapshot.board)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
