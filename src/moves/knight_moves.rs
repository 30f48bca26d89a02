use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::piece_moves::is_open_for;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let target = from.offset(d_row, d_col);
        if is_open_for(board, target, color) {
            out.push(target);
        }
    }
}
