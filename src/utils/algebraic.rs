//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. Rank 8 is row 0, so the row is `'8' - rank`.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok(Square::new(row, col))
}

/// Convert an on-board square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !square.is_on_board() {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "({}, {})",
            square.row, square.col
        )));
    }

    Ok(format!("{}{}", file_char(square), rank_char(square)))
}

/// File letter of an on-board square.
#[inline]
pub(crate) fn file_char(square: Square) -> char {
    char::from(b'a' + square.col as u8)
}

#[inline]
pub(crate) fn rank_char(square: Square) -> char {
    char::from(b'8' - square.row as u8)
}
