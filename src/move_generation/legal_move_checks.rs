//! Attack detection by enumerating the opponent's pseudo-legal destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::piece_moves::pseudo_legal_moves;

/// Square of `color`'s king, if it is on the board.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True if any piece of `attacker_color` has `square` among its pseudo-legal
/// destinations.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .any(|(from, piece)| pseudo_legal_moves(board, from, piece).contains(&square))
}

pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces(attacker_color)
        .filter(|(from, piece)| pseudo_legal_moves(board, *from, piece).contains(&square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_king_in_check, king_square};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::utils::board_layout::parse_placement;

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::new();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        assert_eq!(king_square(&board, Color::Black), Some(Square::new(0, 4)));
    }

    #[test]
    fn missing_king_reports_no_check() {
        let board = parse_placement("8/8/8/8/8/8/8/q7").expect("layout should parse");
        assert_eq!(king_square(&board, Color::White), None);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn double_check_lists_both_attackers() {
        // White king e1, black rook e8, black knight d3.
        let board = parse_placement("4r3/8/8/8/8/3n4/8/4K3").expect("layout should parse");
        assert!(is_king_in_check(&board, Color::White));

        // Attackers come back in board order from a8.
        let attackers = attackers_to_square(&board, Square::new(7, 4), Color::Black);
        assert_eq!(
            attackers,
            vec![
                (Square::new(0, 4), PieceKind::Rook),
                (Square::new(5, 3), PieceKind::Knight)
            ]
        );
    }

    #[test]
    fn pawn_attacks_diagonally_but_not_forward() {
        // White king e1 facing a black pawn on e2, then on d2.
        let blocked = parse_placement("8/8/8/8/8/8/4p3/4K3").expect("layout should parse");
        assert!(!is_king_in_check(&blocked, Color::White));

        let checking = parse_placement("8/8/8/8/8/8/3p4/4K3").expect("layout should parse");
        assert!(is_king_in_check(&checking, Color::White));
    }
}
