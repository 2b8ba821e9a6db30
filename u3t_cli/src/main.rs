//! Ultimate Tic-Tac-Toe - terminal front-end.
//!
//! A thin presentation layer over [`u3t_engine`]: reads `<board> <cell>`
//! pairs from stdin, applies them through the engine, and prints the
//! board after every move. All rules live in the engine; this binary
//! only prompts, parses and renders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use u3t_engine::{Cell, GameState, Player, Position};

const UNICODE_X: char = '⨉';
const UNICODE_O: char = '◯';

/// Ultimate Tic-Tac-Toe on the terminal.
#[derive(Parser, Debug)]
#[command(name = "u3t")]
#[command(about = "Play Ultimate Tic-Tac-Toe on the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Render marks with unicode symbols instead of X/O.
    #[arg(short, long)]
    unicode: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting Ultimate Tic-Tac-Toe");
    run(&mut io::stdin().lock(), &mut io::stdout().lock(), cli.unicode)
}

/// Game loop: prompt, parse, apply, render, until the game ends or
/// input runs out.
fn run(input: &mut dyn BufRead, output: &mut dyn Write, unicode: bool) -> Result<()> {
    let mut game = GameState::new();

    writeln!(output, "Ultimate Tic-Tac-Toe")?;
    writeln!(output, "===================")?;
    writeln!(output, "Enter moves as: <board> <cell>, both 0-8 (row-major).")?;

    loop {
        writeln!(output)?;
        write!(output, "{}", render_board(&game, unicode))?;
        writeln!(output, "Sub-boards ('#' = full):")?;
        write!(output, "{}", render_meta(&game, unicode))?;
        match game.active_board() {
            Some(board) => writeln!(output, "Next move must be in the {board} sub-board")?,
            None => writeln!(output, "Next player can choose any board")?,
        }

        let status = game.status();
        if status.is_over() {
            writeln!(output, "{status}")?;
            break;
        }
        writeln!(output, "{}'s turn", mark_char(game.to_move(), unicode))?;

        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed, leaving game loop");
            break;
        }

        let (board, pos) = match parse_move(&line) {
            Ok(parsed) => parsed,
            Err(reason) => {
                writeln!(output, "{reason}")?;
                continue;
            }
        };

        if let Err(err) = game.apply_move(board, pos) {
            writeln!(output, "Illegal move: {err}")?;
        }
    }

    Ok(())
}

fn mark_char(player: Player, unicode: bool) -> char {
    match (player, unicode) {
        (Player::X, true) => UNICODE_X,
        (Player::O, true) => UNICODE_O,
        (player, false) => player.mark(),
    }
}

/// Renders the 9×9 grid with dividers every third row and column.
fn render_board(game: &GameState, unicode: bool) -> String {
    let mut out = String::new();
    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..9 {
            if col > 0 && col % 3 == 0 {
                out.push('|');
            }
            let cell = Cell::from_global(row, col).expect("rows and cols stay below 9");
            let mark = if game.is_empty(cell) {
                '.'
            } else {
                match game.board().player_at(cell) {
                    Some(player) => mark_char(player, unicode),
                    None => '.',
                }
            };
            out.push(mark);
        }
        out.push('\n');
    }
    out
}

/// Renders the meta-grid: one character per sub-board — the winner's
/// mark, `#` for full-and-drawn, `.` for open.
fn render_meta(game: &GameState, unicode: bool) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let sub = Position::from_row_col(row, col).expect("meta rows and cols stay below 3");
            let mark = match game.sub_board_winner(sub) {
                Some(player) => mark_char(player, unicode),
                None if game.is_sub_board_full(sub) => '#',
                None => '.',
            };
            out.push(mark);
        }
        out.push('\n');
    }
    out
}

/// Parses a `<board> <cell>` line into engine coordinates.
fn parse_move(line: &str) -> Result<(Position, Position), String> {
    let mut tokens = line.split_whitespace();
    let (Some(board), Some(pos), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err("Expected exactly two numbers: <board> <cell>".to_string());
    };
    Ok((parse_position(board)?, parse_position(pos)?))
}

fn parse_position(token: &str) -> Result<Position, String> {
    let index: usize = token
        .parse()
        .map_err(|_| format!("'{token}' is not a number in 0-8"))?;
    Position::from_index(index).ok_or_else(|| format!("{index} is out of range 0-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("4 0\n"), Ok((Position::Center, Position::TopLeft)));
        assert_eq!(parse_move("  8   8 "), Ok((Position::BottomRight, Position::BottomRight)));
        assert!(parse_move("4").is_err());
        assert!(parse_move("4 0 1").is_err());
        assert!(parse_move("four 0").is_err());
        assert!(parse_move("9 0").is_err());
    }

    #[test]
    fn test_run_plays_scripted_moves() {
        let script = b"0 4\n4 0\n" as &[u8];
        let mut input = std::io::BufReader::new(script);
        let mut output = Vec::new();
        run(&mut input, &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("X's turn"));
        assert!(text.contains("O's turn"));
        assert!(text.contains("Next move must be in the Center sub-board"));
    }

    #[test]
    fn test_run_reports_illegal_move() {
        let script = b"0 4\n8 8\n" as &[u8];
        let mut input = std::io::BufReader::new(script);
        let mut output = Vec::new();
        run(&mut input, &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Illegal move"));
    }

    #[test]
    fn test_run_renders_unicode_marks() {
        let script = b"0 4\n" as &[u8];
        let mut input = std::io::BufReader::new(script);
        let mut output = Vec::new();
        run(&mut input, &mut output, true).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(UNICODE_X));
        assert!(text.contains(&format!("{UNICODE_X}'s turn")));
        assert!(!text.contains("\nX"));
    }

    #[test]
    fn test_meta_grid_shows_won_sub_board() {
        // X takes the top row of sub-board 3; O bounces back from the
        // boards X's moves point at.
        let script = [
            (Position::MiddleLeft, Position::TopLeft),   // X -> 0
            (Position::TopLeft, Position::MiddleLeft),   // O -> 3
            (Position::MiddleLeft, Position::TopCenter), // X -> 1
            (Position::TopCenter, Position::MiddleLeft), // O -> 3
            (Position::MiddleLeft, Position::TopRight),  // X wins 3
        ];
        let mut game = GameState::new();
        for (board, pos) in script {
            game.apply_move(board, pos).unwrap();
        }
        assert_eq!(render_meta(&game, false), "...\nX..\n...\n");
        assert_eq!(render_meta(&game, true), format!("...\n{UNICODE_X}..\n...\n"));
    }
}
