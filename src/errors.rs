//! Error type for the layers above the rules engine.
//!
//! `Board` operations stay total (`bool` results, silent no-ops). Sessions,
//! square parsing and layout loading report failures through [`ChessErrors`]
//! so front ends can show a specific message.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The game already ended in checkmate or stalemate.
    #[error("The game is over")]
    GameOver,

    /// A pawn is waiting on the promotion choice; no other move may be played.
    #[error("A promotion is pending on {0:?}")]
    PromotionPending(Square),

    #[error("No promotion is pending")]
    NoPendingPromotion,

    #[error("No piece on {0:?}")]
    EmptySquare(Square),

    /// The selected piece belongs to the side not on move.
    #[error("It is not {0:?}'s turn")]
    NotSideToMove(Color),

    #[error("Illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Square, to: Square },

    #[error("Cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    #[error("Invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// Piece-placement text that does not describe an 8x8 board.
    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),
}
