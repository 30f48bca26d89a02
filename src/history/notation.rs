//! Display notation for recorded moves.
//!
//! Notation is for people only. Undo and export read the coordinates stored
//! on each record and never parse these strings.

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::utils::algebraic::{file_char, rank_char};

fn push_square(out: &mut String, square: Square) {
    out.push(file_char(square));
    out.push(rank_char(square));
}

/// `e2-e4`, `Ng1-f3`, `Bf1xb5`. En-passant captures read like any pawn
/// capture (`e5xd6`).
pub fn move_notation(kind: PieceKind, from: Square, to: Square, is_capture: bool) -> String {
    let mut out = String::with_capacity(6);
    if let Some(letter) = kind.notation_letter() {
        out.push(letter);
    }
    push_square(&mut out, from);
    out.push(if is_capture { 'x' } else { '-' });
    push_square(&mut out, to);
    out
}

pub fn castling_notation(side: CastleSide) -> String {
    match side {
        CastleSide::Kingside => "O-O".to_owned(),
        CastleSide::Queenside => "O-O-O".to_owned(),
    }
}

/// `e8=Q` for a push, `exd8=N` for a capture.
pub fn promotion_notation(from: Square, to: Square, is_capture: bool, kind: PieceKind) -> String {
    let mut out = String::with_capacity(6);
    if is_capture {
        out.push(file_char(from));
        out.push('x');
    }
    push_square(&mut out, to);
    out.push('=');
    out.push(kind.notation_letter().unwrap_or('Q'));
    out
}
