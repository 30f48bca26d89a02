//! Mailbox board state.
//!
//! `Board` owns an 8x8 grid of optional pieces plus the per-game flags that
//! must outlive any single piece: the castling "has moved" markers and the
//! current en-passant target. Moving a piece relocates the owned value; no
//! two squares ever share one piece.
//!
//! Rule-heavy operations live in `move_generation`; the methods here forward
//! to them.

use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::move_generation::game_outcome;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_filter;
use crate::moves::piece_moves::pseudo_legal_moves;

/// Permanent castling-rights markers. Once set they are never cleared
/// except by [`Board::reset_board`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastlingFlags {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    /// White rook that started on the `a` file.
    pub white_rook1_moved: bool,
    /// White rook that started on the `h` file.
    pub white_rook2_moved: bool,
    pub black_rook1_moved: bool,
    pub black_rook2_moved: bool,
}

impl CastlingFlags {
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_rook1_moved,
            (Color::White, CastleSide::Kingside) => self.white_rook2_moved,
            (Color::Black, CastleSide::Queenside) => self.black_rook1_moved,
            (Color::Black, CastleSide::Kingside) => self.black_rook2_moved,
        }
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_rook1_moved = true,
            (Color::White, CastleSide::Kingside) => self.white_rook2_moved = true,
            (Color::Black, CastleSide::Queenside) => self.black_rook1_moved = true,
            (Color::Black, CastleSide::Kingside) => self.black_rook2_moved = true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    castling_flags: CastlingFlags,
    en_passant: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board set up in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_board();
        board
    }

    /// Board with no pieces and all flags cleared.
    pub fn empty() -> Self {
        Self {
            squares: Default::default(),
            castling_flags: CastlingFlags::default(),
            en_passant: None,
        }
    }

    /// Reinitialize to the standard starting position and clear every flag.
    pub fn reset_board(&mut self) {
        self.squares = Default::default();

        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color);
            let pawns = pawn_home_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as i8;
                self.put(Square::new(back, col), Piece::new(*kind, color));
                self.put(Square::new(pawns, col), Piece::new(PieceKind::Pawn, color));
            }
        }

        self.castling_flags = CastlingFlags::default();
        self.en_passant = None;
    }

    /// Occupant of `square`; off-board squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Raw placement, bypassing move validation. Any previous occupant is
    /// dropped; off-board squares are ignored.
    pub fn set_piece_at(&mut self, square: Square, piece: Piece) {
        self.put(square, piece);
    }

    /// Raw removal, bypassing move validation.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize].take()
    }

    #[inline]
    fn put(&mut self, square: Square, piece: Piece) {
        if square.is_on_board() {
            self.squares[square.row as usize][square.col as usize] = Some(piece);
        }
    }

    /// Every piece of `color` with its square, row-major from `a8`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Pseudo-legal destinations of the piece on `square` (king safety not
    /// considered). Empty for empty or off-board squares.
    pub fn possible_moves(&self, square: Square) -> Vec<Square> {
        match self.piece_at(square) {
            Some(piece) => pseudo_legal_moves(self, square, piece),
            None => Vec::new(),
        }
    }

    /// Destinations of the piece on `square` that are fully legal.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_move_filter::legal_moves(self, square)
    }

    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        legal_move_filter::is_move_legal(self, from, to)
    }

    pub fn would_expose_king(&self, from: Square, to: Square, mover: Color) -> bool {
        legal_move_filter::would_expose_king(self, from, to, mover)
    }

    /// Validate and apply a move. Returns `false`, leaving the board
    /// untouched, when the move is not legal.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        legal_move_apply::make_move(self, from, to)
    }

    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) {
        legal_move_apply::promote_pawn(self, square, kind);
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_king_in_check(self, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        game_outcome::is_checkmate(self, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        game_outcome::is_stalemate(self, color)
    }

    #[inline]
    pub fn castling_flags(&self) -> &CastlingFlags {
        &self.castling_flags
    }

    #[inline]
    pub(crate) fn castling_flags_mut(&mut self) -> &mut CastlingFlags {
        &mut self.castling_flags
    }

    /// Square a pawn may capture onto en passant.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant = target.filter(|sq| sq.is_on_board());
    }

    /// En-passant column, `-1` when unavailable.
    #[inline]
    pub fn en_passant_col(&self) -> i8 {
        self.en_passant.map_or(-1, |sq| sq.col)
    }

    /// En-passant row, `-1` when unavailable.
    #[inline]
    pub fn en_passant_row(&self) -> i8 {
        self.en_passant.map_or(-1, |sq| sq.row)
    }
}
