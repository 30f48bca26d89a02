//! Seeded random-game runner.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --verbose --seed 42 --plies 200`

use chess_board::utils::history_export::write_move_list;
use chess_board::utils::random_playout::{play_random_game, PlayoutConfig, PlayoutOutcome};
use chess_board::utils::render_game_state::render_game_state;

fn flag_value(args: &[String], name: &str) -> Result<Option<u64>, String> {
    match args.iter().position(|a| a == name) {
        Some(idx) => args
            .get(idx + 1)
            .ok_or_else(|| format!("{name} needs a value"))?
            .parse::<u64>()
            .map(Some)
            .map_err(|e| format!("invalid value for {name}: {e}")),
        None => Ok(None),
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let mut config = PlayoutConfig {
        verbose,
        ..PlayoutConfig::default()
    };
    if let Some(seed) = flag_value(&args, "--seed")? {
        config.seed = seed;
    }
    if let Some(plies) = flag_value(&args, "--plies")? {
        config.max_plies = u16::try_from(plies).map_err(|e| format!("--plies: {e}"))?;
    }

    let result = play_random_game(&config).map_err(|e| e.to_string())?;

    let token = match result.outcome {
        PlayoutOutcome::WhiteWinCheckmate => "1-0",
        PlayoutOutcome::BlackWinCheckmate => "0-1",
        PlayoutOutcome::DrawStalemate => "1/2-1/2",
        PlayoutOutcome::DrawMaxPlies => "*",
    };

    println!("{}", render_game_state(result.session.board()));
    println!("{}", write_move_list(result.session.history(), token));
    println!("outcome: {:?} after {} plies", result.outcome, result.plies);
    Ok(())
}
