use crate::game_state::board::Board;
use crate::game_state::chess_rules::{en_passant_capture_row, pawn_home_row};
use crate::game_state::chess_types::{Color, Square};

pub fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    let one_step = from.offset(direction, 0);
    if one_step.is_on_board() && board.is_empty(one_step) {
        out.push(one_step);

        if from.row == pawn_home_row(color) {
            let two_step = from.offset(2 * direction, 0);
            if board.is_empty(two_step) {
                out.push(two_step);
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let target = from.offset(direction, d_col);
        if let Some(occupant) = board.piece_at(target) {
            if occupant.color != color {
                out.push(target);
            }
        }
    }

    // The target row must be the square just behind the double-stepped pawn,
    // seen from this pawn's side.
    if let Some(target) = board.en_passant_target() {
        if from.row == en_passant_capture_row(color)
            && target.row == from.row + direction
            && (target.col - from.col).abs() == 1
        {
            out.push(target);
        }
    }
}
