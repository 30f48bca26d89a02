//! Leaf-node counting over the move executor, used to cross-check the rules
//! against published perft tables.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::{
    castling_side, en_passant_victim, has_any_legal_move,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A position reached by one legal move, with what that move did.
#[derive(Debug, Clone)]
pub struct ChildPosition {
    pub from: Square,
    pub to: Square,
    pub board: Board,
    pub capture: bool,
    pub en_passant: bool,
    pub castle: bool,
    pub promotion: Option<PieceKind>,
}

/// Every position `side` can reach in one move. A pawn reaching its last
/// row yields one child per promotion kind.
pub fn child_positions(board: &Board, side: Color) -> Vec<ChildPosition> {
    let mut children = Vec::new();

    for (from, piece) in board.pieces(side) {
        for to in board.legal_moves(from) {
            let en_passant = en_passant_victim(board, from, to).is_some();
            let capture = en_passant || board.piece_at(to).is_some();
            let castle = castling_side(piece, from, to).is_some();

            let mut next = board.clone();
            if !next.make_move(from, to) {
                continue;
            }

            let child = ChildPosition {
                from,
                to,
                board: next,
                capture,
                en_passant,
                castle,
                promotion: None,
            };

            if piece.kind == PieceKind::Pawn && to.row == promotion_row(side) {
                for kind in PieceKind::PROMOTIONS {
                    let mut promoted = child.clone();
                    promoted.board.promote_pawn(to, kind);
                    promoted.promotion = Some(kind);
                    children.push(promoted);
                }
            } else {
                children.push(child);
            }
        }
    }

    children
}

pub fn perft(board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for child in child_positions(board, side) {
        if depth == 1 {
            total.merge(leaf_counts(&child, side.opposite()));
        } else {
            total.merge(perft(&child.board, side.opposite(), depth - 1));
        }
    }
    total
}

fn leaf_counts(child: &ChildPosition, defender: Color) -> PerftCounts {
    let gives_check = is_king_in_check(&child.board, defender);
    PerftCounts {
        nodes: 1,
        captures: usize::from(child.capture),
        en_passant: usize::from(child.en_passant),
        castles: usize::from(child.castle),
        promotions: usize::from(child.promotion.is_some()),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && !has_any_legal_move(&child.board, defender)),
    }
}
