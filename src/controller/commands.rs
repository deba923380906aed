//! Text commands accepted by the hot-seat input loop.
//!
//! A lone square selects a piece (its legal destinations get highlighted),
//! two squares submit a move. Squares may be separated by whitespace or
//! written together (`e2e4`).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;
use crate::utils::algebraic::algebraic_to_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Position),
    Move { from: Position, to: Position },
    /// Drop the current selection.
    Deselect,
    /// List every legal move for the side to move.
    Moves,
    Board,
    Restart,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
commands:
  e2          select the piece on e2 and show its moves
  e2 e4       move (also e2e4); with a selection, a single square moves there
  moves       list every legal move for the side to move
  board       redraw the board
  clear       drop the current selection
  restart     start a new game
  quit        leave";

pub fn parse_command(line: &str) -> Result<Command, ChessErrors> {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    let Some(first) = parts.next() else {
        return Err(ChessErrors::UnknownCommand(String::new()));
    };

    let keyword = first.to_ascii_lowercase();
    let command = match keyword.as_str() {
        "restart" | "new" => Command::Restart,
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "moves" => Command::Moves,
        "board" => Command::Board,
        "clear" | "deselect" => Command::Deselect,
        _ => return parse_squares(trimmed, first, parts.next(), parts.next()),
    };

    if parts.next().is_some() {
        return Err(ChessErrors::UnknownCommand(trimmed.to_owned()));
    }
    Ok(command)
}

fn parse_squares(
    line: &str,
    first: &str,
    second: Option<&str>,
    extra: Option<&str>,
) -> Result<Command, ChessErrors> {
    if extra.is_some() {
        return Err(ChessErrors::UnknownCommand(line.to_owned()));
    }

    match (first.len(), second) {
        (2, None) => Ok(Command::Select(algebraic_to_position(first)?)),
        (2, Some(to)) => Ok(Command::Move {
            from: algebraic_to_position(first)?,
            to: algebraic_to_position(to)?,
        }),
        (4, None) if first.is_ascii() => Ok(Command::Move {
            from: algebraic_to_position(&first[..2])?,
            to: algebraic_to_position(&first[2..])?,
        }),
        _ => Err(ChessErrors::UnknownCommand(line.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Position;

    #[test]
    fn squares_become_select_or_move() {
        assert_eq!(
            parse_command("e2").expect("select should parse"),
            Command::Select(Position::at(4, 1))
        );
        let expected = Command::Move {
            from: Position::at(4, 1),
            to: Position::at(4, 3),
        };
        assert_eq!(parse_command(" e2 e4 ").expect("spaced move should parse"), expected);
        assert_eq!(parse_command("e2e4").expect("joined move should parse"), expected);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("RESTART").expect("restart"), Command::Restart);
        assert_eq!(parse_command("new").expect("new"), Command::Restart);
        assert_eq!(parse_command("q").expect("quit"), Command::Quit);
        assert_eq!(parse_command("moves").expect("moves"), Command::Moves);
    }

    #[test]
    fn malformed_input_is_reported() {
        assert_eq!(parse_command(""), Err(ChessErrors::UnknownCommand(String::new())));
        assert_eq!(
            parse_command("castle please"),
            Err(ChessErrors::UnknownCommand("castle please".to_owned()))
        );
        assert_eq!(parse_command("e9"), Err(ChessErrors::InvalidAlgebraicChar('9')));
        assert_eq!(
            parse_command("e2 e4 e5"),
            Err(ChessErrors::UnknownCommand("e2 e4 e5".to_owned()))
        );
    }
}
