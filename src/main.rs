//! Hot-seat chess in the terminal.
//!
//! Two players share stdin. Type a square to select a piece and see its legal
//! destinations, then a destination square (or type both squares at once).
//! Environment overrides: `HOTSEAT_CASTLING=standard|adjacent`,
//! `HOTSEAT_VERBOSE=1`, `HOTSEAT_ASCII=1`.

use std::io::{self, BufRead, Write};

use hotseat_chess::chess_errors::ChessErrors;
use hotseat_chess::controller::audio_cues::TerminalAudio;
use hotseat_chess::controller::commands::{parse_command, Command, HELP_TEXT};
use hotseat_chess::controller::game::{CommitOutcome, Game, GameStatus};
use hotseat_chess::controller::game_config::GameConfig;
use hotseat_chess::game_state::chess_types::Position;
use hotseat_chess::utils::render_game_state::render_game_state;

fn main() -> Result<(), String> {
    let config = GameConfig::from_env().map_err(|err| err.to_string())?;
    let mut game = Game::new(config).with_audio(Box::new(TerminalAudio));
    let mut selected: Option<Position> = None;
    let mut highlights: Vec<Position> = Vec::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    draw(&mut stdout, &game, &highlights).map_err(|err| err.to_string())?;
    prompt(&mut stdout, &game).map_err(|err| err.to_string())?;

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| err.to_string())?;
        if line.trim().is_empty() {
            prompt(&mut stdout, &game).map_err(|err| err.to_string())?;
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}").map_err(|err| err.to_string())?;
                prompt(&mut stdout, &game).map_err(|err| err.to_string())?;
                continue;
            }
        };

        let redraw = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(stdout, "{HELP_TEXT}").map_err(|err| err.to_string())?;
                false
            }
            Command::Board => true,
            Command::Restart => {
                game.restart();
                selected = None;
                highlights.clear();
                true
            }
            Command::Deselect => {
                selected = None;
                highlights.clear();
                true
            }
            Command::Moves => {
                let moves: Vec<String> = game.legal_moves().iter().map(|mv| mv.to_string()).collect();
                writeln!(stdout, "{}", moves.join(" ")).map_err(|err| err.to_string())?;
                false
            }
            Command::Select(square) => match selected {
                _ if game.is_over() => {
                    writeln!(stdout, "{}", ChessErrors::GameIsOver).map_err(|err| err.to_string())?;
                    false
                }
                // With a selection, a highlighted square completes the move.
                Some(from) if highlights.contains(&square) => {
                    let result = game.submit(from, square);
                    selected = None;
                    highlights.clear();
                    report(&mut stdout, result).map_err(|err| err.to_string())?;
                    true
                }
                _ => {
                    let targets = game.select_piece(square);
                    if targets.is_empty() {
                        selected = None;
                        highlights.clear();
                        writeln!(stdout, "no legal moves from {square}").map_err(|err| err.to_string())?;
                        false
                    } else {
                        selected = Some(square);
                        highlights = targets;
                        true
                    }
                }
            },
            Command::Move { from, to } => {
                selected = None;
                highlights.clear();
                let result = game.submit(from, to);
                report(&mut stdout, result).map_err(|err| err.to_string())?;
                true
            }
        };

        if redraw {
            draw(&mut stdout, &game, &highlights).map_err(|err| err.to_string())?;
        }
        prompt(&mut stdout, &game).map_err(|err| err.to_string())?;
    }

    Ok(())
}

fn report(out: &mut impl Write, result: Result<CommitOutcome, ChessErrors>) -> io::Result<()> {
    match result {
        Ok(outcome) => writeln!(out, "{} ({})", outcome.mv, outcome.classification),
        Err(err) => writeln!(out, "{err}"),
    }
}

fn draw(out: &mut impl Write, game: &Game, highlights: &[Position]) -> io::Result<()> {
    writeln!(out, "{}", render_game_state(game.board(), highlights, game.config().unicode))
}

fn prompt(out: &mut impl Write, game: &Game) -> io::Result<()> {
    match game.status() {
        GameStatus::InProgress => write!(out, "{} to move> ", game.side_to_move())?,
        GameStatus::Over(outcome) => write!(out, "{outcome}; restart or quit> ")?,
    }
    out.flush()
}
