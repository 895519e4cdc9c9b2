//! Move legality: piece-movement geometry and path occupancy.
//!
//! Deliberately not full chess. Check safety, castling, en passant,
//! promotion and draw rules live outside this product's scope; a move is
//! legal here when the piece's geometry allows it and nothing blocks the
//! path.

use crate::board::{Board, Color, PieceKind};
use crate::notation::Square;

/// Decides whether moving from `from` to `to` is legal for `turn` on this
/// board. Pure predicate, no side effects.
///
/// The preconditions short-circuit in a fixed order: distinct squares, a
/// piece on the origin, owned by the mover, no self-capture, then the
/// per-kind geometry. `to` being on the board is guaranteed by [`Square`]
/// itself.
pub fn is_legal(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.color != turn {
        return false;
    }
    if board.piece_at(to).is_some_and(|target| target.color == turn) {
        return false;
    }

    let dr = to.row() as i32 - from.row() as i32;
    let dc = to.col() as i32 - from.col() as i32;

    match piece.kind {
        PieceKind::Pawn => pawn_legal(board, piece.color, from, to, dr, dc),
        PieceKind::Knight => is_knight_jump(dr, dc),
        PieceKind::Bishop => dr.abs() == dc.abs() && path_is_clear(board, from, to),
        PieceKind::Rook => (dr == 0 || dc == 0) && path_is_clear(board, from, to),
        PieceKind::Queen => {
            (dr.abs() == dc.abs() || dr == 0 || dc == 0) && path_is_clear(board, from, to)
        }
        // from != to already rejected the null move.
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

/// Every square the piece on `from` may legally reach, by probing all 64
/// squares through [`is_legal`]. O(64) probes is fine at board size 8.
/// Returned in row-major order.
pub fn legal_destinations(board: &Board, turn: Color, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(board, turn, from, to))
        .collect()
}

/// Pawn geometry: single advance, double advance from the home row, and
/// diagonal capture. White moves toward row 0, black toward row 7.
fn pawn_legal(board: &Board, color: Color, from: Square, to: Square, dr: i32, dc: i32) -> bool {
    let (forward, home_row) = match color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    if dc == 0 && dr == forward {
        return board.piece_at(to).is_none();
    }

    if dc == 0 && dr == 2 * forward && from.row() == home_row {
        let Some(intermediate) = from.offset(forward, 0) else {
            return false;
        };
        return board.piece_at(intermediate).is_none() && board.piece_at(to).is_none();
    }

    if dc.abs() == 1 && dr == forward {
        return board.piece_at(to).is_some_and(|target| target.color != color);
    }

    false
}

/// Knight geometry: the delta magnitudes are {1, 2} in either order.
#[inline]
fn is_knight_jump(dr: i32, dc: i32) -> bool {
    let (ar, ac) = (dr.abs(), dc.abs());
    (ar == 1 && ac == 2) || (ar == 2 && ac == 1)
}

/// Walks the unit step from `from` toward `to` and requires every square
/// strictly between them to be empty. Shared by bishop, rook and queen;
/// assumes the two squares share a rank, file or diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() as i32 - from.row() as i32).signum();
    let dc = (to.col() as i32 - from.col() as i32).signum();

    let mut cursor = from.offset(dr, dc);
    while let Some(square) = cursor {
        if square == to {
            return true;
        }
        if board.piece_at(square).is_some() {
            return false;
        }
        cursor = square.offset(dr, dc);
    }

    // Ran off the board without reaching `to`: the squares were not aligned.
    false
}
