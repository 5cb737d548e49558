//! Pawn move legality. Every predicate is pure over the current board and,
//! for en passant, the board as it stood before the last applied move.

use crate::core::engine::{Board, Color, Move, MoveKind, Square};

/// Ranks advanced by a move, positive toward the opponent's back rank.
#[inline]
fn advance(color: Color, from: Square, to: Square) -> i8 {
    (to.rank() as i8 - from.rank() as i8) * color.forward()
}

pub fn is_legal_plain_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if !board.is_figure(color, from) || !board.is_blank(to) || from.file() != to.file() {
        return false;
    }
    match advance(color, from, to) {
        1 => true,
        2 => {
            from.rank() == color.start_rank()
                && from
                    .offset(color.forward(), 0)
                    .map(|path| board.is_blank(path))
                    .unwrap_or(false)
        }
        _ => false,
    }
}

pub fn is_legal_capture(board: &Board, color: Color, from: Square, to: Square) -> bool {
    board.is_figure(color, from)
        && board.is_figure(color.opposite(), to)
        && advance(color, from, to) == 1
        && from.file().abs_diff(to.file()) == 1
}

/// The enemy pawn beside `from` must have arrived there by a two-step
/// advance, and that advance must be the only change since `previous`.
pub fn is_legal_en_passant(
    board: &Board,
    previous: Option<&Board>,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    let Some(previous) = previous else {
        return false;
    };
    if !board.is_figure(color, from)
        || !board.is_blank(to)
        || from.rank() != color.en_passant_rank()
        || advance(color, from, to) != 1
        || from.file().abs_diff(to.file()) != 1
    {
        return false;
    }
    let enemy = color.opposite();
    let (Some(victim), Some(origin)) = (
        Square::new(from.rank(), to.file()),
        Square::new(enemy.start_rank(), to.file()),
    ) else {
        return false;
    };
    if !board.is_figure(enemy, victim)
        || !previous.is_figure(enemy, origin)
        || !previous.is_blank(victim)
    {
        return false;
    }
    // replaying the double push on `previous` must give exactly this board
    let mut replay = previous.clone();
    replay.apply_move(enemy, origin, victim);
    replay == *board
}

/// At most one kind applies to a given pair, their destination
/// requirements exclude each other.
pub fn classify(
    board: &Board,
    previous: Option<&Board>,
    color: Color,
    from: Square,
    to: Square,
) -> Option<MoveKind> {
    if is_legal_plain_move(board, color, from, to) {
        if advance(color, from, to) == 2 {
            Some(MoveKind::PawnDoublePush)
        } else {
            Some(MoveKind::QuietMove)
        }
    } else if is_legal_capture(board, color, from, to) {
        Some(MoveKind::Capture)
    } else if is_legal_en_passant(board, previous, color, from, to) {
        Some(MoveKind::EnPassantCapture)
    } else {
        None
    }
}

static TARGETS: [(i8, i8); 4] = [(1, 0), (2, 0), (1, -1), (1, 1)];

fn legal_moves<'a>(
    board: &'a Board,
    previous: Option<&'a Board>,
    color: Color,
) -> impl Iterator<Item = Move> + 'a {
    board.pawns(color).iter().flat_map(move |pawn| {
        let from = pawn.square;
        TARGETS.iter().filter_map(move |&(rank, file)| {
            let to = from.offset(rank * color.forward(), file)?;
            classify(board, previous, color, from, to).map(|kind| Move { from, to, kind })
        })
    })
}

pub fn possible_moves(board: &Board, previous: Option<&Board>, color: Color) -> Vec<Move> {
    legal_moves(board, previous, color).collect()
}

pub fn has_legal_move(board: &Board, previous: Option<&Board>, color: Color) -> bool {
    legal_moves(board, previous, color).next().is_some()
}

/// Side still has pawns but none of them can act.
pub fn is_stalemate(board: &Board, previous: Option<&Board>, color: Color) -> bool {
    !board.pawns(color).is_empty() && !has_legal_move(board, previous, color)
}

pub fn is_winner(board: &Board, color: Color) -> bool {
    board
        .pawns(color)
        .iter()
        .any(|pawn| pawn.square.rank() == color.goal_rank())
        || board.pawns(color.opposite()).is_empty()
}
