//! Two-player terminal front end.
//!
//! Run with:
//! `cargo run --bin chess_board`
//! `cargo run --bin chess_board -- --allow-undo-after-game-over`

use std::io::{self, BufRead, Write};

use chess_board::errors::ChessErrors;
use chess_board::game_state::chess_types::{PieceKind, Square};
use chess_board::move_generation::legal_move_checks::{attackers_to_square, king_square};
use chess_board::session::game_session::{GameSession, MoveStatus};
use chess_board::session::session_config::GameConfig;
use chess_board::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use chess_board::utils::history_export::{result_token, write_move_list};
use chess_board::utils::render_game_state::render_game_state;

const HELP: &str =
    "commands: <from> <to> | promote q|r|b|n | moves <square> | undo | reset | history | board | help | quit";

fn main() -> io::Result<()> {
    let config = GameConfig {
        allow_undo_after_game_over: std::env::args().any(|a| a == "--allow-undo-after-game-over"),
    };
    let mut session = GameSession::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(session.board()));
    println!("{HELP}");
    print_prompt(&session, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["board"] => println!("{}", render_game_state(session.board())),
            ["history"] => println!(
                "{}",
                write_move_list(session.history(), result_token(session.outcome()))
            ),
            ["reset"] => {
                session.reset();
                println!("{}", render_game_state(session.board()));
            }
            ["undo"] => {
                if session.undo() {
                    println!("{}", render_game_state(session.board()));
                } else {
                    println!("nothing to undo");
                }
            }
            ["moves", square] => match algebraic_to_square(square) {
                Ok(from) => println!("{}", format_squares(&session.legal_moves(from))),
                Err(err) => println!("{err}"),
            },
            ["promote", piece] => match parse_promotion(piece) {
                Some(kind) => {
                    let result = session.promote(kind).map(|_| MoveStatus::Played);
                    report(&result, &session);
                }
                None => println!("unknown promotion piece: {piece}"),
            },
            [from, to] => {
                let result = play(&mut session, from, to);
                report(&result, &session);
            }
            [mv] if mv.len() == 4 && mv.is_ascii() => {
                let result = play(&mut session, &mv[..2], &mv[2..]);
                report(&result, &session);
            }
            _ => println!("{HELP}"),
        }

        print_prompt(&session, &mut stdout)?;
    }

    Ok(())
}

fn play(session: &mut GameSession, from: &str, to: &str) -> Result<MoveStatus, ChessErrors> {
    let from = algebraic_to_square(from)?;
    let to = algebraic_to_square(to)?;
    session.play_move(from, to)
}

fn report(result: &Result<MoveStatus, ChessErrors>, session: &GameSession) {
    match result {
        Ok(MoveStatus::Played) => {
            println!("{}", render_game_state(session.board()));
            if let Some(record) = session.history().last() {
                println!("{:?}: {}", record.mover, record.display_notation());
            }
            if let Some(checkers) = describe_checkers(session) {
                println!("{:?} is in check from {checkers}", session.side_to_move());
            }
            if let Some(outcome) = session.outcome() {
                println!("game over: {outcome:?} ({})", result_token(Some(outcome)));
            }
        }
        Ok(MoveStatus::AwaitingPromotion(square)) => {
            println!("{}", render_game_state(session.board()));
            println!(
                "pawn on {} awaits promotion: promote q|r|b|n",
                square_to_algebraic(*square).unwrap_or_default()
            );
        }
        Err(err) => println!("{err}"),
    }
}

/// Pieces giving check to the side to move, as `Nd3 Re8`.
fn describe_checkers(session: &GameSession) -> Option<String> {
    let side = session.side_to_move();
    let king = king_square(session.board(), side)?;
    let attackers = attackers_to_square(session.board(), king, side.opposite());
    if attackers.is_empty() {
        return None;
    }

    let names: Vec<String> = attackers
        .iter()
        .filter_map(|(square, kind)| {
            let letter = kind.notation_letter().map(String::from).unwrap_or_default();
            square_to_algebraic(*square).ok().map(|sq| format!("{letter}{sq}"))
        })
        .collect();
    Some(names.join(" "))
}

fn parse_promotion(text: &str) -> Option<PieceKind> {
    match text.to_ascii_lowercase().as_str() {
        "q" | "queen" => Some(PieceKind::Queen),
        "r" | "rook" => Some(PieceKind::Rook),
        "b" | "bishop" => Some(PieceKind::Bishop),
        "n" | "knight" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn format_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .filter_map(|sq| square_to_algebraic(*sq).ok())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_prompt(session: &GameSession, stdout: &mut io::Stdout) -> io::Result<()> {
    print!("{:?}> ", session.side_to_move());
    stdout.flush()
}
