//! Canonical chess-rule constants.
//!
//! Rows run from Black's back rank (row 0) to White's back rank (row 7), so
//! every rank-dependent rule is expressed per color here.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind};

/// Standard starting placement in FEN piece-placement form.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank piece order from the `a` file to the `h` file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column both kings start on.
pub const KING_HOME_COL: i8 = 4;

#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row a pawn of `color` promotes on.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    back_rank_row(color.opposite())
}

/// Row a pawn of `color` must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_row(color: Color) -> i8 {
    match color {
        Color::White => 3,
        Color::Black => 4,
    }
}

/// Column the king lands on when castling.
#[inline]
pub const fn castle_king_to_col(side: CastleSide) -> i8 {
    match side {
        CastleSide::Kingside => 6,
        CastleSide::Queenside => 2,
    }
}

/// Home column of the rook taking part in a castle.
#[inline]
pub const fn castle_rook_from_col(side: CastleSide) -> i8 {
    match side {
        CastleSide::Kingside => 7,
        CastleSide::Queenside => 0,
    }
}

/// Column the rook lands on when castling. This is also the square the king
/// crosses on its way.
#[inline]
pub const fn castle_rook_to_col(side: CastleSide) -> i8 {
    match side {
        CastleSide::Kingside => 5,
        CastleSide::Queenside => 3,
    }
}

/// Castling side implied by a king destination column, if any.
#[inline]
pub const fn castle_side_for_king_target(to_col: i8) -> Option<CastleSide> {
    match to_col {
        6 => Some(CastleSide::Kingside),
        2 => Some(CastleSide::Queenside),
        _ => None,
    }
}
