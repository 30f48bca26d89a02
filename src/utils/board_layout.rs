//! Board construction from a FEN piece-placement field.
//!
//! Only the first FEN field is read. Every placed piece counts as unmoved
//! and the board flags start cleared, so castling depends only on whether
//! kings and rooks stand on their home squares.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let field = placement
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessErrors::InvalidLayout("empty layout".to_owned()))?;

    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidLayout(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();

    for (row, row_text) in rows.iter().enumerate() {
        let mut col = 0i8;

        for ch in row_text.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                let empty_count = empty_count as i8;
                if col + empty_count > 8 {
                    return Err(ChessErrors::InvalidLayout(format!("row {row} has too many files")));
                }
                col += empty_count;
                continue;
            }

            let piece = piece_from_char(ch).ok_or_else(|| {
                ChessErrors::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;

            if col >= 8 {
                return Err(ChessErrors::InvalidLayout(format!("row {row} has too many files")));
            }

            board.set_piece_at(Square::new(row as i8, col), piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidLayout(format!(
                "row {row} does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
