//! Ordered move list with strict last-in-first-out undo.
//!
//! Undo reverses exactly one record against the board it was played on.
//! Castling flags are never cleared here; once a king or rook has moved,
//! castling stays unavailable for it even after the move is taken back.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Pop the most recent record and reverse it on `board`.
    ///
    /// Returns the removed record, or `None` when the history is empty.
    pub fn undo_last(&mut self, board: &mut Board) -> Option<MoveRecord> {
        let record = self.records.pop()?;

        if let Some(castling) = record.castling {
            undo_castling(board, &record, castling.rook_from_col, castling.rook_to_col);
        } else if let Some(victim) = record.en_passant_capture {
            relocate(board, record.to, record.from);
            let mut pawn = Piece::new(PieceKind::Pawn, record.mover.opposite());
            pawn.has_moved = true;
            board.set_piece_at(victim, pawn);
        } else if record.was_promotion() {
            board.remove_piece_at(record.to);
            let mut pawn = Piece::new(PieceKind::Pawn, record.mover);
            pawn.has_moved = true;
            board.set_piece_at(record.from, pawn);
            restore_captured(board, &record);
        } else {
            relocate(board, record.to, record.from);
            restore_captured(board, &record);
        }

        board.set_en_passant_target(record.prev_en_passant);
        Some(record)
    }
}

fn relocate(board: &mut Board, from: Square, to: Square) {
    if let Some(piece) = board.remove_piece_at(from) {
        board.set_piece_at(to, piece);
    }
}

fn restore_captured(board: &mut Board, record: &MoveRecord) {
    if let Some((kind, color)) = record.captured {
        board.set_piece_at(record.to, Piece::new(kind, color));
    }
}

fn undo_castling(board: &mut Board, record: &MoveRecord, rook_from_col: i8, rook_to_col: i8) {
    let row = record.from.row;

    if let Some(mut king) = board.remove_piece_at(record.to) {
        king.has_moved = false;
        board.set_piece_at(record.from, king);
    }

    if let Some(mut rook) = board.remove_piece_at(Square::new(row, rook_to_col)) {
        rook.has_moved = false;
        board.set_piece_at(Square::new(row, rook_from_col), rook);
    }
}
