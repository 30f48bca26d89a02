use crate::game_state::chess_types::*;

/// Rook relocation performed alongside a castling king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingDetail {
    pub side: CastleSide,
    pub rook_from_col: i8,
    pub rook_to_col: i8,
}

/// One applied move, with enough detail to reverse it exactly.
///
/// Records are created right after the move lands on the board. The only
/// mutation afterwards is attaching en-passant or castling detail through
/// the two setters while the record is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub notation: String,
    pub mover: Color,
    pub is_check: bool,
    pub is_checkmate: bool,
    /// Kind and color of the captured piece, if any.
    pub captured: Option<(PieceKind, Color)>,
    /// Piece the pawn was promoted to.
    pub promotion: Option<PieceKind>,
    pub from: Square,
    pub to: Square,
    /// Square the en-passant victim stood on.
    pub en_passant_capture: Option<Square>,
    pub castling: Option<CastlingDetail>,
    /// En-passant target in force before this move.
    pub prev_en_passant: Option<Square>,
}

impl MoveRecord {
    pub fn new(notation: String, mover: Color, from: Square, to: Square) -> Self {
        Self {
            notation,
            mover,
            is_check: false,
            is_checkmate: false,
            captured: None,
            promotion: None,
            from,
            to,
            en_passant_capture: None,
            castling: None,
            prev_en_passant: None,
        }
    }

    pub fn set_en_passant_capture(&mut self, captured_square: Square) {
        self.en_passant_capture = Some(captured_square);
    }

    pub fn set_castling(&mut self, side: CastleSide, rook_from_col: i8, rook_to_col: i8) {
        self.castling = Some(CastlingDetail {
            side,
            rook_from_col,
            rook_to_col,
        });
    }

    #[inline]
    pub fn was_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn was_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn was_en_passant(&self) -> bool {
        self.en_passant_capture.is_some()
    }

    #[inline]
    pub fn was_castling(&self) -> bool {
        self.castling.is_some()
    }

    /// Notation with the check (`+`) or mate (`#`) suffix.
    pub fn display_notation(&self) -> String {
        if self.is_checkmate {
            format!("{}#", self.notation)
        } else if self.is_check {
            format!("{}+", self.notation)
        } else {
            self.notation.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MoveRecord;
    use crate::game_state::chess_types::{CastleSide, Color, Square};

    #[test]
    fn display_notation_prefers_mate_suffix() {
        let mut record = MoveRecord::new("Qd8-h4".to_owned(), Color::Black, Square::new(0, 3), Square::new(4, 7));
        assert_eq!(record.display_notation(), "Qd8-h4");
        record.is_check = true;
        assert_eq!(record.display_notation(), "Qd8-h4+");
        record.is_checkmate = true;
        assert_eq!(record.display_notation(), "Qd8-h4#");
    }

    #[test]
    fn setters_attach_special_move_detail() {
        let mut record = MoveRecord::new("O-O".to_owned(), Color::White, Square::new(7, 4), Square::new(7, 6));
        assert!(!record.was_castling());
        record.set_castling(CastleSide::Kingside, 7, 5);
        assert!(record.was_castling());
        assert_eq!(record.castling.map(|c| c.rook_to_col), Some(5));

        record.set_en_passant_capture(Square::new(3, 3));
        assert!(record.was_en_passant());
    }
}
