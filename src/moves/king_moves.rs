//! King destinations, including the two synthetic castling targets.
//!
//! Castling here only checks occupancy and that neither piece has moved;
//! whether the king crosses attacked squares is decided when the move is
//! executed.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_rank_row, castle_king_to_col, castle_rook_from_col, KING_HOME_COL,
};
use crate::game_state::chess_types::{CastleSide, Color, Piece, PieceKind, Square};
use crate::moves::piece_moves::is_open_for;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_moves(board: &Board, from: Square, king: &Piece, out: &mut Vec<Square>) {
    for (d_row, d_col) in KING_OFFSETS {
        let target = from.offset(d_row, d_col);
        if is_open_for(board, target, king.color) {
            out.push(target);
        }
    }

    generate_castling_moves(board, from, king, out);
}

fn generate_castling_moves(board: &Board, from: Square, king: &Piece, out: &mut Vec<Square>) {
    let color = king.color;
    let home = Square::new(back_rank_row(color), KING_HOME_COL);

    if king.has_moved || board.castling_flags().king_moved(color) || from != home {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if castling_path_is_open(board, color, side) {
            out.push(Square::new(home.row, castle_king_to_col(side)));
        }
    }
}

fn castling_path_is_open(board: &Board, color: Color, side: CastleSide) -> bool {
    let row = back_rank_row(color);
    let rook_col = castle_rook_from_col(side);

    let rook_ready = matches!(
        board.piece_at(Square::new(row, rook_col)),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
    );
    if !rook_ready || board.castling_flags().rook_moved(color, side) {
        return false;
    }

    let (low, high) = if rook_col < KING_HOME_COL {
        (rook_col + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, rook_col)
    };
    (low..high).all(|col| board.is_empty(Square::new(row, col)))
}
