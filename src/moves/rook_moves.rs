//! Rook destinations, plus the ray tracer shared by every sliding piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

/// Walk from `from` in one direction until the edge of the board, an own
/// piece (excluded) or an enemy piece (included).
pub(crate) fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut target = from.offset(d_row, d_col);

    while target.is_on_board() {
        match board.piece_at(target) {
            None => out.push(target),
            Some(blocker) => {
                if blocker.color != color {
                    out.push(target);
                }
                break;
            }
        }
        target = target.offset(d_row, d_col);
    }
}
