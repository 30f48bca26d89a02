//! Check / checkmate / stalemate oracle.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::{has_any_legal_move, would_expose_king};

/// Terminal state of a game, from the perspective of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// True if some pseudo-legal destination of some piece of `color` leaves its
/// king unattacked. Castling targets count like any other king step.
fn has_unexposed_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(from, _)| {
        board
            .possible_moves(from)
            .into_iter()
            .any(|to| !would_expose_king(board, from, to, color))
    })
}

/// `color` is in check and every pseudo-legal destination of every one of
/// its pieces would leave the king attacked.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_unexposed_move(board, color)
}

/// Same search as [`is_checkmate`], but `color` must not be in check.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_unexposed_move(board, color)
}

/// Outcome for the side about to move, if the game has ended.
///
/// Unlike [`is_checkmate`] this uses full legality, so a side whose only
/// pseudo-legal escape is a castle out of check has lost.
pub fn evaluate_outcome(board: &Board, side_to_move: Color) -> Option<GameOutcome> {
    if has_any_legal_move(board, side_to_move) {
        return None;
    }
    if is_king_in_check(board, side_to_move) {
        Some(GameOutcome::Checkmate {
            winner: side_to_move.opposite(),
        })
    } else {
        Some(GameOutcome::Stalemate)
    }
}
