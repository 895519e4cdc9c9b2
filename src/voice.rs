//! Turns loosely structured spoken (or typed) text into a concrete move.
//!
//! Transcription is noisy, so this layer is best-effort by design: anything
//! it cannot read resolves to "no move" and the player repeats themselves.
//! Nothing here panics on arbitrary input.

use crate::board::{Board, Color, Piece, PieceKind};
use crate::notation::Square;
use crate::rules;

/// A parsed command, before legality resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The whole utterance was one square name: find a piece able to go
    /// there ("e4").
    Destination(Square),
    /// Origin and destination both named, in that order, with anything in
    /// between ("e2 to e4", "e2 takes d3").
    FromTo(Square, Square),
    /// A piece kind plus a destination ("knight f3", "queen takes h5").
    KindTo(PieceKind, Square),
}

/// Extract a command from a transcript. Policies are tried in order and the
/// first match wins; None means nothing usable was said.
pub fn parse(text: &str) -> Option<Command> {
    let text = text.trim().to_ascii_lowercase();

    // A bare square name is a destination-only command.
    if let Ok(square) = text.parse::<Square>() {
        return Some(Command::Destination(square));
    }

    match square_tokens(&text).as_slice() {
        [from, to, ..] => Some(Command::FromTo(*from, *to)),
        [to] => spoken_kind(&text).map(|kind| Command::KindTo(kind, *to)),
        [] => None,
    }
}

/// Resolve a parsed command into a (from, to) pair that passed the legality
/// engine, or None when no piece fits.
///
/// Destination-only and kind-plus-destination commands are disambiguated by
/// row-major scan order over the mover's pieces: deterministic and
/// documented, deliberately not a chess heuristic.
pub fn resolve(board: &Board, turn: Color, command: Command) -> Option<(Square, Square)> {
    match command {
        Command::FromTo(from, to) => rules::is_legal(board, turn, from, to).then_some((from, to)),
        Command::Destination(to) => first_mover(board, turn, to, |_| true),
        Command::KindTo(kind, to) => first_mover(board, turn, to, |piece| piece.kind == kind),
    }
}

/// First piece of `turn` in board scan order that accepts the filter and can
/// legally reach `to`.
fn first_mover(
    board: &Board,
    turn: Color,
    to: Square,
    accept: impl Fn(Piece) -> bool,
) -> Option<(Square, Square)> {
    board
        .pieces_of(turn)
        .filter(|&(_, piece)| accept(piece))
        .map(|(from, _)| from)
        .find(|&from| rules::is_legal(board, turn, from, to))
        .map(|from| (from, to))
}

/// Scan for square-like two-character substrings anywhere in the text
/// ("e4" inside "pawn takes e4"), left to right, non-overlapping.
fn square_tokens(text: &str) -> Vec<Square> {
    let chars: Vec<char> = text.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 1 < chars.len() {
        if ('a'..='h').contains(&chars[i]) && ('1'..='8').contains(&chars[i + 1]) {
            let rank = chars[i + 1] as u8 - b'0';
            // Both characters are range-checked, so this cannot fail.
            if let Ok(square) = Square::new(8 - rank as i32, chars[i] as i32 - 'a' as i32) {
                found.push(square);
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    found
}

/// First transcript word that names a piece kind.
fn spoken_kind(text: &str) -> Option<PieceKind> {
    text.split_whitespace().find_map(PieceKind::from_spoken_name)
}
