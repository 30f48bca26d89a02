//! Seeded random-move playouts.
//!
//! Drives a [`GameSession`] with uniformly chosen legal moves until the game
//! ends or the ply limit is hit. Playouts exercise every rule path (castling,
//! en passant, promotion) and give the undo engine long histories to unwind.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::game_outcome::GameOutcome;
use crate::session::game_session::{GameSession, MoveStatus};
use crate::session::session_config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub verbose: bool,
    pub game: GameConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
            verbose: false,
            game: GameConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    /// Final session, history included.
    pub session: GameSession,
}

/// Play one seeded random game from the starting position.
pub fn play_random_game(config: &PlayoutConfig) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut session = GameSession::new(config.game);
    let mut plies = 0u16;

    while plies < config.max_plies && !session.is_game_over() {
        let candidates = candidate_moves(&session);
        if candidates.is_empty() {
            break;
        }

        let (from, to) = candidates[rng.random_range(0..candidates.len())];
        if let MoveStatus::AwaitingPromotion(_) = session.play_move(from, to)? {
            let choice = PieceKind::PROMOTIONS[rng.random_range(0..PieceKind::PROMOTIONS.len())];
            session.promote(choice)?;
        }
        plies += 1;

        if config.verbose {
            if let Some(record) = session.history().last() {
                println!(
                    "[playout] ply {} {:?} {}",
                    plies,
                    record.mover,
                    record.display_notation()
                );
            }
        }
    }

    let outcome = match session.outcome() {
        Some(GameOutcome::Checkmate { winner: Color::White }) => PlayoutOutcome::WhiteWinCheckmate,
        Some(GameOutcome::Checkmate { winner: Color::Black }) => PlayoutOutcome::BlackWinCheckmate,
        Some(GameOutcome::Stalemate) => PlayoutOutcome::DrawStalemate,
        None => PlayoutOutcome::DrawMaxPlies,
    };

    if config.verbose {
        println!("[playout] seed={} plies={} outcome={:?}", config.seed, plies, outcome);
    }

    Ok(PlayoutResult {
        outcome,
        plies,
        session,
    })
}

/// Every legal `(from, to)` pair for the side to move.
pub fn candidate_moves(session: &GameSession) -> Vec<(Square, Square)> {
    let side = session.side_to_move();
    let mut out = Vec::new();
    for (from, _) in session.board().pieces(side) {
        for to in session.legal_moves(from) {
            out.push((from, to));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{play_random_game, PlayoutConfig, PlayoutOutcome};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::session::session_config::GameConfig;

    fn placement(board: &Board) -> Vec<Option<(PieceKind, Color)>> {
        Square::all()
            .map(|sq| board.piece_at(sq).map(|p| (p.kind, p.color)))
            .collect()
    }

    fn config(seed: u64) -> PlayoutConfig {
        PlayoutConfig {
            max_plies: 120,
            seed,
            verbose: false,
            game: GameConfig {
                allow_undo_after_game_over: true,
            },
        }
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let first = play_random_game(&config(7)).expect("playout should run");
        let second = play_random_game(&config(7)).expect("playout should run");

        let a: Vec<String> = first.session.history().iter().map(|r| r.notation.clone()).collect();
        let b: Vec<String> = second.session.history().iter().map(|r| r.notation.clone()).collect();
        assert_eq!(a, b);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(usize::from(first.plies), first.session.history().len());
    }

    #[test]
    fn ply_limit_is_respected() {
        let result = play_random_game(&PlayoutConfig {
            max_plies: 10,
            ..config(3)
        })
        .expect("playout should run");
        assert!(result.plies <= 10);
        if result.plies == 10 {
            assert_eq!(result.outcome, PlayoutOutcome::DrawMaxPlies);
        }
    }

    #[test]
    fn undoing_a_whole_random_game_restores_the_start() {
        let start = Board::new();
        for seed in 0..4 {
            let mut result = play_random_game(&config(seed)).expect("playout should run");
            let session = &mut result.session;
            while session.undo() {}

            assert!(session.history().is_empty());
            assert_eq!(placement(session.board()), placement(&start));
            assert_eq!(session.board().en_passant_target(), None);
            assert_eq!(session.side_to_move(), Color::White);
        }
    }
}
