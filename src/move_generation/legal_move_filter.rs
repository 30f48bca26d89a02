//! Legality filter.
//!
//! A candidate is legal when playing it on a hypothetical copy of the board
//! leaves the mover's king unattacked. Castling additionally requires the
//! king to start outside check and to cross an unattacked square.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    castle_rook_to_col, castle_side_for_king_target, en_passant_capture_row,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

/// Would moving the piece on `from` to `to` leave `mover`'s king attacked?
///
/// The check runs on an independent copy: every piece keeps its `has_moved`
/// flag, the mover lands on `to` marked as moved, and an en-passant victim
/// (which stands beside `to`, not on it) is left out of the copy.
///
/// Off-board endpoints always count as exposing.
pub fn would_expose_king(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return true;
    }

    let mut hypothetical = board.clone();

    if let Some(victim) = en_passant_victim(board, from, to) {
        hypothetical.remove_piece_at(victim);
    }

    if let Some(mut moving) = hypothetical.remove_piece_at(from) {
        moving.has_moved = true;
        hypothetical.set_piece_at(to, moving);
    }

    is_king_in_check(&hypothetical, mover)
}

/// Square of the pawn an en-passant capture from `from` to `to` removes, or
/// `None` if the move is not an en-passant capture.
pub fn en_passant_victim(board: &Board, from: Square, to: Square) -> Option<Square> {
    let pawn = board.piece_at(from)?;
    let target = board.en_passant_target()?;

    let is_en_passant = pawn.kind == PieceKind::Pawn
        && to == target
        && to.col != from.col
        && from.row == en_passant_capture_row(pawn.color)
        && to.row == from.row + pawn.color.pawn_direction();

    is_en_passant.then(|| Square::new(from.row, to.col))
}

/// Castling side if `from -> to` is a two-column king shift along its row.
pub fn castling_side(piece: &Piece, from: Square, to: Square) -> Option<CastleSide> {
    if !from.is_on_board() || !to.is_on_board() {
        return None;
    }
    if piece.kind != PieceKind::King || from.row != to.row || (to.col - from.col).abs() != 2 {
        return None;
    }
    castle_side_for_king_target(to.col)
}

/// Full legality test for a single candidate move.
pub fn is_move_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if !to.is_on_board() || !board.possible_moves(from).contains(&to) {
        return false;
    }
    is_candidate_legal(board, from, piece, to)
}

/// Legal destinations of the piece on `from`.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    board
        .possible_moves(from)
        .into_iter()
        .filter(|to| is_candidate_legal(board, from, piece, *to))
        .collect()
}

/// True if `color` has at least one legal move anywhere on the board.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(from, piece)| {
        board
            .possible_moves(from)
            .into_iter()
            .any(|to| is_candidate_legal(board, from, piece, to))
    })
}

/// Legality of a destination already known to be pseudo-legal.
pub(crate) fn is_candidate_legal(board: &Board, from: Square, piece: &Piece, to: Square) -> bool {
    match castling_side(piece, from, to) {
        Some(side) => is_castling_safe(board, from, to, side, piece.color),
        None => !would_expose_king(board, from, to, piece.color),
    }
}

fn is_castling_safe(board: &Board, from: Square, to: Square, side: CastleSide, color: Color) -> bool {
    if is_king_in_check(board, color) {
        return false;
    }
    let crossing = Square::new(from.row, castle_rook_to_col(side));
    !would_expose_king(board, from, crossing, color) && !would_expose_king(board, from, to, color)
}
