//! Knobs for a [`GameSession`](crate::session::game_session::GameSession).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Allow taking moves back after checkmate or stalemate. Off by default:
    /// a finished game stays finished until it is reset.
    pub allow_undo_after_game_over: bool,
}
