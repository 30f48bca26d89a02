//! Plain-text move list export.
//!
//! Writes `[Key "Value"]` headers followed by numbered move text such as
//! `1. e2-e4 e7-e5 2. Ng1-f3`. The notation is the display notation kept on
//! each record, so the output is meant for people rather than PGN readers.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::Color;
use crate::history::move_history::MoveHistory;
use crate::move_generation::game_outcome::GameOutcome;

/// Result token for a finished or ongoing game.
pub fn result_token(outcome: Option<GameOutcome>) -> &'static str {
    match outcome {
        Some(GameOutcome::Checkmate { winner: Color::White }) => "1-0",
        Some(GameOutcome::Checkmate { winner: Color::Black }) => "0-1",
        Some(GameOutcome::Stalemate) => "1/2-1/2",
        None => "*",
    }
}

pub fn write_move_list(history: &MoveHistory, result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result.to_owned());

    write_move_list_with_headers(history, &headers)
}

pub fn write_move_list_with_headers(
    history: &MoveHistory,
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut parts = Vec::<String>::with_capacity(history.len() + 1);
    let mut move_number = 1usize;
    for (ply, record) in history.iter().enumerate() {
        match record.mover {
            Color::White => parts.push(format!("{}. {}", move_number, record.display_notation())),
            Color::Black if ply == 0 => {
                parts.push(format!("{}... {}", move_number, record.display_notation()))
            }
            Color::Black => parts.push(record.display_notation()),
        }
        if record.mover == Color::Black {
            move_number += 1;
        }
    }

    let result = headers.get("Result").map(String::as_str).unwrap_or("*");
    parts.push(result.to_owned());
    out.push_str(&parts.join(" "));
    out.push('\n');

    out
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
