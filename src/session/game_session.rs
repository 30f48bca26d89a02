//! Turn-taking game driver on top of the rules engine.
//!
//! A `GameSession` owns the board and its move history. It enforces turn
//! order, holds a pawn that reached its last row until the promotion piece
//! is chosen, and records every completed move with check and mate flags so
//! it can later be taken back.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_rook_from_col, castle_rook_to_col, promotion_row};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::history::move_history::MoveHistory;
use crate::history::notation::{castling_notation, move_notation, promotion_notation};
use crate::move_generation::game_outcome::{evaluate_outcome, GameOutcome};
use crate::move_generation::legal_move_filter::{castling_side, en_passant_victim};
use crate::session::session_config::GameConfig;

/// What happened to an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Played,
    /// The pawn stands on the given square waiting for [`GameSession::promote`].
    AwaitingPromotion(Square),
}

/// A pawn move that is on the board but not yet recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub captured: Option<(PieceKind, Color)>,
    pub prev_en_passant: Option<Square>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    history: MoveHistory,
    side_to_move: Color,
    pending_promotion: Option<PendingPromotion>,
    outcome: Option<GameOutcome>,
    config: GameConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            side_to_move: Color::White,
            pending_promotion: None,
            outcome: None,
            config,
        }
    }

    /// Session starting from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Color, config: GameConfig) -> Self {
        let outcome = evaluate_outcome(&board, side_to_move);
        Self {
            board,
            history: MoveHistory::new(),
            side_to_move,
            pending_promotion: None,
            outcome,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    /// Legal destinations for the piece on `square`. Empty unless the piece
    /// belongs to the side to move and the game is still waiting on a move.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.outcome.is_some() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move => self.board.legal_moves(square),
            _ => Vec::new(),
        }
    }

    pub fn play_move(&mut self, from: Square, to: Square) -> Result<MoveStatus, ChessErrors> {
        if self.outcome.is_some() {
            return Err(ChessErrors::GameOver);
        }
        if let Some(pending) = &self.pending_promotion {
            return Err(ChessErrors::PromotionPending(pending.to));
        }
        if !from.is_on_board() || !to.is_on_board() {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let piece = self
            .board
            .piece_at(from)
            .cloned()
            .ok_or(ChessErrors::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(piece.color));
        }

        // Capture details must be read before the board changes.
        let ep_victim = en_passant_victim(&self.board, from, to);
        let captured = ep_victim
            .map_or_else(|| self.board.piece_at(to), |sq| self.board.piece_at(sq))
            .map(|p| (p.kind, p.color));
        let castle = castling_side(&piece, from, to);
        let prev_en_passant = self.board.en_passant_target();

        if !self.board.make_move(from, to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        if piece.kind == PieceKind::Pawn && to.row == promotion_row(piece.color) {
            self.pending_promotion = Some(PendingPromotion {
                from,
                to,
                captured,
                prev_en_passant,
            });
            return Ok(MoveStatus::AwaitingPromotion(to));
        }

        let notation = match castle {
            Some(side) => castling_notation(side),
            None => move_notation(piece.kind, from, to, captured.is_some()),
        };

        let mut record = MoveRecord::new(notation, piece.color, from, to);
        record.captured = captured;
        record.prev_en_passant = prev_en_passant;
        if let Some(victim) = ep_victim {
            record.set_en_passant_capture(victim);
        }
        if let Some(side) = castle {
            record.set_castling(side, castle_rook_from_col(side), castle_rook_to_col(side));
        }

        self.finish_turn(record);
        Ok(MoveStatus::Played)
    }

    /// Complete a pending promotion with `kind`.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), ChessErrors> {
        let Some(pending) = self.pending_promotion else {
            return Err(ChessErrors::NoPendingPromotion);
        };
        if !PieceKind::PROMOTIONS.contains(&kind) {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }

        self.board.promote_pawn(pending.to, kind);
        self.pending_promotion = None;

        let notation = promotion_notation(pending.from, pending.to, pending.captured.is_some(), kind);
        let mut record = MoveRecord::new(notation, self.side_to_move, pending.from, pending.to);
        record.captured = pending.captured;
        record.promotion = Some(kind);
        record.prev_en_passant = pending.prev_en_passant;

        self.finish_turn(record);
        Ok(())
    }

    /// Take back the last recorded move. Returns `false` when nothing was
    /// undone.
    pub fn undo(&mut self) -> bool {
        if self.pending_promotion.is_some() {
            return false;
        }
        if self.outcome.is_some() && !self.config.allow_undo_after_game_over {
            return false;
        }

        match self.history.undo_last(&mut self.board) {
            Some(record) => {
                self.side_to_move = record.mover;
                self.outcome = None;
                true
            }
            None => false,
        }
    }

    /// Start a new game from the standard position with White to move.
    pub fn reset(&mut self) {
        self.board.reset_board();
        self.history.clear();
        self.side_to_move = Color::White;
        self.pending_promotion = None;
        self.outcome = None;
    }

    fn finish_turn(&mut self, mut record: MoveRecord) {
        let opponent = self.side_to_move.opposite();
        self.outcome = evaluate_outcome(&self.board, opponent);
        record.is_check = self.board.is_in_check(opponent);
        record.is_checkmate = matches!(self.outcome, Some(GameOutcome::Checkmate { .. }));

        self.history.push(record);
        self.side_to_move = opponent;
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSession, MoveStatus};
    use crate::errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::game_outcome::GameOutcome;
    use crate::session::session_config::GameConfig;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::board_layout::parse_placement;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn play(session: &mut GameSession, from: &str, to: &str) -> MoveStatus {
        session
            .play_move(sq(from), sq(to))
            .expect("test move should be accepted")
    }

    #[test]
    fn turns_alternate_and_wrong_side_is_rejected() {
        let mut session = GameSession::default();
        assert_eq!(
            session.play_move(sq("e7"), sq("e5")),
            Err(ChessErrors::NotSideToMove(Color::Black))
        );
        assert_eq!(
            session.play_move(sq("e4"), sq("e5")),
            Err(ChessErrors::EmptySquare(sq("e4")))
        );
        assert_eq!(
            session.play_move(sq("e2"), sq("e5")),
            Err(ChessErrors::IllegalMove { from: sq("e2"), to: sq("e5") })
        );

        assert_eq!(play(&mut session, "e2", "e4"), MoveStatus::Played);
        assert_eq!(session.side_to_move(), Color::Black);
        assert!(session.legal_moves(sq("d2")).is_empty());
        assert_eq!(session.legal_moves(sq("g8")).len(), 2);
    }

    #[test]
    fn off_board_coordinates_are_rejected_without_panicking() {
        let mut session = GameSession::default();
        for (from, to) in [
            (Square::new(7, 4), Square::new(7, -128)),
            (Square::new(7, 4), Square::new(127, 127)),
            (Square::new(-128, 0), Square::new(6, 0)),
        ] {
            assert_eq!(session.play_move(from, to), Err(ChessErrors::IllegalMove { from, to }));
        }
        assert!(session.history().is_empty());
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut session = GameSession::default();
        play(&mut session, "f2", "f3");
        play(&mut session, "e7", "e5");
        play(&mut session, "g2", "g4");
        play(&mut session, "d8", "h4");

        assert_eq!(
            session.outcome(),
            Some(GameOutcome::Checkmate { winner: Color::Black })
        );
        let last = session.history().last().expect("four moves recorded");
        assert!(last.is_checkmate);
        assert_eq!(last.display_notation(), "Qd8-h4#");
        assert_eq!(session.play_move(sq("a2"), sq("a3")), Err(ChessErrors::GameOver));
        assert!(!session.undo());
    }

    #[test]
    fn undo_after_mate_when_configured() {
        let mut session = GameSession::new(GameConfig {
            allow_undo_after_game_over: true,
        });
        play(&mut session, "f2", "f3");
        play(&mut session, "e7", "e5");
        play(&mut session, "g2", "g4");
        play(&mut session, "d8", "h4");

        assert!(session.undo());
        assert_eq!(session.outcome(), None);
        assert_eq!(session.side_to_move(), Color::Black);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn promotion_waits_for_the_piece_choice() {
        let board = parse_placement("3rk3/4P3/8/8/8/8/8/4K3").expect("layout should parse");
        let mut session = GameSession::from_board(board, Color::White, GameConfig::default());

        assert_eq!(session.promote(PieceKind::Queen), Err(ChessErrors::NoPendingPromotion));
        assert_eq!(
            play(&mut session, "e7", "d8"),
            MoveStatus::AwaitingPromotion(sq("d8"))
        );
        assert_eq!(
            session.play_move(sq("e1"), sq("e2")),
            Err(ChessErrors::PromotionPending(sq("d8")))
        );
        assert!(!session.undo());
        assert_eq!(
            session.promote(PieceKind::King),
            Err(ChessErrors::InvalidPromotionPiece(PieceKind::King))
        );

        session.promote(PieceKind::Queen).expect("queen is a valid promotion");
        let record = session.history().last().expect("promotion recorded");
        assert_eq!(record.display_notation(), "exd8=Q+");
        assert_eq!(
            session.board().piece_at(sq("d8")).map(|p| (p.kind, p.color)),
            Some((PieceKind::Queen, Color::White))
        );
        assert_eq!(session.side_to_move(), Color::Black);

        assert!(session.undo());
        assert_eq!(
            session.board().piece_at(sq("e7")).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(
            session.board().piece_at(sq("d8")).map(|p| (p.kind, p.color)),
            Some((PieceKind::Rook, Color::Black))
        );
    }

    #[test]
    fn castling_and_en_passant_are_recorded_and_undone() {
        let mut session = GameSession::default();
        for (from, to) in [
            ("e2", "e4"), ("a7", "a6"),
            ("e4", "e5"), ("d7", "d5"),
            ("e5", "d6"), ("a6", "a5"),
            ("g1", "f3"), ("a5", "a4"),
            ("f1", "e2"), ("a4", "a3"),
            ("e1", "g1"),
        ] {
            play(&mut session, from, to);
        }

        let notations: Vec<&str> = session.history().iter().map(|r| r.notation.as_str()).collect();
        assert_eq!(notations[4], "e5xd6");
        assert_eq!(notations[10], "O-O");
        assert_eq!(
            session.board().piece_at(sq("f1")).map(|p| p.kind),
            Some(PieceKind::Rook)
        );

        for _ in 0..7 {
            assert!(session.undo());
        }
        assert_eq!(session.side_to_move(), Color::White);
        assert_eq!(
            session.board().piece_at(sq("d5")).map(|p| (p.kind, p.color)),
            Some((PieceKind::Pawn, Color::Black))
        );
        assert_eq!(session.board().en_passant_target(), Some(sq("d6")));
        assert!(session.legal_moves(sq("e5")).contains(&sq("d6")));
        assert!(session.board().castling_flags().king_moved(Color::White));
    }

    #[test]
    fn stalemate_is_detected_and_reset_starts_over() {
        let board = parse_placement("k7/8/1QK5/8/8/8/8/8").expect("layout should parse");
        let mut session = GameSession::from_board(board, Color::White, GameConfig::default());
        play(&mut session, "b6", "c7");
        assert_eq!(session.outcome(), Some(GameOutcome::Stalemate));
        assert!(session.legal_moves(sq("c6")).is_empty());

        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert!(session.history().is_empty());
        assert_eq!(session.side_to_move(), Color::White);
        assert_eq!(session.outcome(), None);
    }
}
