//! Move executor.
//!
//! `make_move` validates a candidate against the piece's pseudo-legal set
//! and the legality filter, then applies it in place with all special-rule
//! side effects. Rejected moves leave the board untouched.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{back_rank_row, castle_rook_from_col, castle_rook_to_col};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_filter::{
    castling_side, en_passant_victim, is_candidate_legal,
};

pub fn make_move(board: &mut Board, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }

    let Some(piece) = board.piece_at(from).cloned() else {
        return false;
    };

    if !board.possible_moves(from).contains(&to) || !is_candidate_legal(board, from, &piece, to) {
        return false;
    }

    if let Some(side) = castling_side(&piece, from, to) {
        move_castling_rook(board, piece.color, from.row, side);
    }

    if let Some(victim) = en_passant_victim(board, from, to) {
        board.remove_piece_at(victim);
    }

    let Some(mut moving) = board.remove_piece_at(from) else {
        return false;
    };
    moving.has_moved = true;
    board.set_piece_at(to, moving);

    update_castling_flags(board, &piece, from);

    let double_step = piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2;
    board.set_en_passant_target(if double_step {
        Some(Square::new((from.row + to.row) / 2, to.col))
    } else {
        None
    });

    true
}

/// Replace the pawn on `square` with a fresh piece of `kind`, keeping its
/// color. Kinds other than queen, rook, bishop or knight become a queen.
/// Does nothing if the square does not hold a pawn.
pub fn promote_pawn(board: &mut Board, square: Square, kind: PieceKind) {
    let Some(pawn) = board.piece_at(square) else {
        return;
    };
    if pawn.kind != PieceKind::Pawn {
        return;
    }

    let promoted = Piece::new(kind.promotion_or_queen(), pawn.color);
    board.set_piece_at(square, promoted);
}

fn move_castling_rook(board: &mut Board, color: Color, row: i8, side: CastleSide) {
    let rook_from = Square::new(row, castle_rook_from_col(side));
    let rook_to = Square::new(row, castle_rook_to_col(side));

    if let Some(mut rook) = board.remove_piece_at(rook_from) {
        rook.has_moved = true;
        board.set_piece_at(rook_to, rook);
    }
    board.castling_flags_mut().mark_rook_moved(color, side);
}

fn update_castling_flags(board: &mut Board, piece: &Piece, from: Square) {
    match piece.kind {
        PieceKind::King => board.castling_flags_mut().mark_king_moved(piece.color),
        PieceKind::Rook if from.row == back_rank_row(piece.color) => {
            for side in [CastleSide::Queenside, CastleSide::Kingside] {
                if from.col == castle_rook_from_col(side) {
                    board.castling_flags_mut().mark_rook_moved(piece.color, side);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{make_move, promote_pawn};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};
    use crate::utils::board_layout::parse_placement;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn rejected_moves_leave_the_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(!make_move(&mut board, sq(-1, 0), sq(4, 4)));
        assert!(!make_move(&mut board, sq(6, 4), sq(8, 4)));
        assert!(!make_move(&mut board, sq(4, 4), sq(3, 4)));
        assert!(!make_move(&mut board, sq(6, 4), sq(3, 4)));
        assert!(!make_move(&mut board, sq(7, 0), sq(5, 0)));

        assert_eq!(board, before);
    }

    #[test]
    fn plain_move_transfers_piece_and_marks_it_moved() {
        let mut board = Board::new();
        assert!(make_move(&mut board, sq(7, 6), sq(5, 5)));

        assert!(board.is_empty(sq(7, 6)));
        let knight = board.piece_at(sq(5, 5)).expect("knight should have landed");
        assert_eq!(knight.kind, PieceKind::Knight);
        assert!(knight.has_moved);
        assert_eq!(board.en_passant_col(), -1);
    }

    #[test]
    fn double_step_opens_and_next_move_closes_the_window() {
        let mut board = Board::new();
        assert!(make_move(&mut board, sq(6, 4), sq(4, 4)));
        assert_eq!(board.en_passant_col(), 4);
        assert_eq!(board.en_passant_row(), 5);

        assert!(make_move(&mut board, sq(0, 6), sq(2, 5)));
        assert_eq!(board.en_passant_col(), -1);
        assert_eq!(board.en_passant_row(), -1);
    }

    #[test]
    fn en_passant_removes_the_pawn_behind_the_target() {
        let mut board = Board::new();
        assert!(make_move(&mut board, sq(6, 4), sq(4, 4)));
        assert!(make_move(&mut board, sq(1, 0), sq(2, 0)));
        assert!(make_move(&mut board, sq(4, 4), sq(3, 4)));
        assert!(make_move(&mut board, sq(1, 3), sq(3, 3)));

        assert!(make_move(&mut board, sq(3, 4), sq(2, 3)));
        assert!(board.is_empty(sq(3, 3)));
        assert_eq!(
            board.piece_at(sq(2, 3)).map(|p| (p.kind, p.color)),
            Some((PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.piece_count(Color::Black), 15);
    }

    #[test]
    fn en_passant_window_lasts_one_move() {
        let mut board = Board::new();
        assert!(make_move(&mut board, sq(6, 4), sq(4, 4)));
        assert!(make_move(&mut board, sq(1, 0), sq(2, 0)));
        assert!(make_move(&mut board, sq(4, 4), sq(3, 4)));
        assert!(make_move(&mut board, sq(1, 3), sq(3, 3)));
        // White spends the move elsewhere, Black replies.
        assert!(make_move(&mut board, sq(7, 6), sq(5, 5)));
        assert!(make_move(&mut board, sq(2, 0), sq(3, 0)));

        assert_eq!(board.en_passant_col(), -1);
        assert!(!make_move(&mut board, sq(3, 4), sq(2, 3)));
    }

    #[test]
    fn castling_moves_rook_and_sets_flags() {
        let mut board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("layout should parse");

        assert!(make_move(&mut board, sq(7, 4), sq(7, 6)));
        assert_eq!(board.piece_at(sq(7, 6)).map(|p| p.kind), Some(PieceKind::King));
        let rook = board.piece_at(sq(7, 5)).expect("rook should sit on f1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(board.is_empty(sq(7, 7)));
        assert!(board.castling_flags().king_moved(Color::White));
        assert!(board.castling_flags().rook_moved(Color::White, CastleSide::Kingside));

        assert!(make_move(&mut board, sq(0, 4), sq(0, 2)));
        assert_eq!(board.piece_at(sq(0, 3)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(board.is_empty(sq(0, 0)));
    }

    #[test]
    fn castling_rejected_after_king_has_moved() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R3K2R").expect("layout should parse");
        assert!(make_move(&mut board, sq(7, 4), sq(7, 3)));
        assert!(make_move(&mut board, sq(7, 3), sq(7, 4)));

        assert!(!make_move(&mut board, sq(7, 4), sq(7, 6)));
        assert!(!make_move(&mut board, sq(7, 4), sq(7, 2)));
    }

    #[test]
    fn castling_rejected_when_destination_is_attacked() {
        // Black bishop c5 covers g1.
        let mut board = parse_placement("4k3/8/8/2b5/8/8/8/4K2R").expect("layout should parse");
        assert!(!make_move(&mut board, sq(7, 4), sq(7, 6)));
        assert!(board.piece_at(sq(7, 7)).is_some());
    }

    #[test]
    fn rook_move_sets_its_permanent_flag() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R3K2R").expect("layout should parse");
        assert!(make_move(&mut board, sq(7, 0), sq(6, 0)));
        assert!(board.castling_flags().rook_moved(Color::White, CastleSide::Queenside));
        assert!(!board.castling_flags().rook_moved(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn promotion_replaces_pawn_with_requested_kind() {
        for (requested, expected) in [
            (PieceKind::Queen, PieceKind::Queen),
            (PieceKind::Rook, PieceKind::Rook),
            (PieceKind::Bishop, PieceKind::Bishop),
            (PieceKind::Knight, PieceKind::Knight),
            (PieceKind::King, PieceKind::Queen),
            (PieceKind::Pawn, PieceKind::Queen),
        ] {
            let mut board = parse_placement("8/4P3/8/8/8/8/8/k6K").expect("layout should parse");
            assert!(make_move(&mut board, sq(1, 4), sq(0, 4)));
            promote_pawn(&mut board, sq(0, 4), requested);

            let piece = board.piece_at(sq(0, 4)).expect("promoted piece should be present");
            assert_eq!(piece.kind, expected);
            assert_eq!(piece.color, Color::White);
        }
    }

    #[test]
    fn promotion_ignores_non_pawns() {
        let mut board = Board::new();
        let before = board.clone();
        promote_pawn(&mut board, sq(7, 0), PieceKind::Queen);
        promote_pawn(&mut board, sq(4, 4), PieceKind::Queen);
        promote_pawn(&mut board, sq(-3, 4), PieceKind::Queen);
        assert_eq!(board, before);
    }
}
