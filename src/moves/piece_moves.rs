//! Single dispatch point from a piece to its pseudo-legal generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Pseudo-legal destinations for `piece` standing on `from`: board edges and
/// own-piece occupancy respected, king safety ignored.
pub fn pseudo_legal_moves(board: &Board, from: Square, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => king_moves(board, from, piece, &mut out),
    }
    out
}

/// On the board and not holding a piece of `color`.
#[inline]
pub(crate) fn is_open_for(board: &Board, target: Square, color: Color) -> bool {
    target.is_on_board() && board.piece_at(target).map_or(true, |p| p.color != color)
}
