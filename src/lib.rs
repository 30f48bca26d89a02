//! Crate root module declarations for the chess board rules engine.
//!
//! Exposes the board model, per-piece move generators, the legality filter
//! and move executor, the move history with undo, the turn-taking session,
//! and the diagnostic helpers used by the binaries and benchmarks.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_outcome;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod perft;
}

pub mod history {
    pub mod move_history;
    pub mod notation;
}

pub mod session {
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_layout;
    pub mod history_export;
    pub mod random_playout;
    pub mod render_game_state;
}
