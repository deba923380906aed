//! Errors used throughout the chess engine.
//!
//! The rules engine itself never fails: illegal moves are simply absent from
//! the legal move sets it hands out. `ChessErrors` covers the places where
//! untrusted input enters the crate (text squares, controller commands,
//! environment configuration) and the position-building helpers used to set
//! up arbitrary boards.
//!
//! Usage guidelines:
//! - Controller and parsing functions return `Result<..., ChessErrors>`.
//! - Callers match on the variant to present a friendly message and keep the
//!   game running; none of these variants indicate corrupted board state.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceHandle, Position};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A single character of an algebraic square was outside `a..=h` / `1..=8`.
    InvalidAlgebraicChar(char),

    /// An algebraic square or move string had the wrong shape.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// The selected square holds no active piece.
    NoPieceAt(Position),

    /// A piece handle that names an empty roster slot or a captured piece.
    UnknownPiece(PieceHandle),

    /// The selected square holds a piece that does not belong to the side to move.
    NotSideToMove(Position),

    /// The destination is not in the legal move set of the selected piece.
    IllegalMove { from: Position, to: Position },

    /// A move was submitted after the game ended; only a restart is accepted.
    GameIsOver,

    /// Tried to place a piece on a square that already holds one.
    SquareOccupied(Position),

    /// Tried to place a seventeenth piece for one color.
    RosterFull(Color),

    /// Tried to place a second king for one color.
    DuplicateKing(Color),

    /// A line of controller input could not be interpreted.
    UnknownCommand(String),

    /// An environment override carried a value outside its accepted set.
    InvalidConfigValue { key: &'static str, value: String },
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(c) => write!(f, "invalid algebraic character: {c}"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic string: {s}"),
            ChessErrors::NoPieceAt(at) => write!(f, "no piece on {at}"),
            ChessErrors::UnknownPiece(handle) => write!(
                f,
                "no active piece in {} roster slot {}",
                handle.color, handle.slot
            ),
            ChessErrors::NotSideToMove(at) => {
                write!(f, "the piece on {at} does not belong to the side to move")
            }
            ChessErrors::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessErrors::GameIsOver => write!(f, "the game is over; restart to play again"),
            ChessErrors::SquareOccupied(at) => write!(f, "square {at} is already occupied"),
            ChessErrors::RosterFull(color) => write!(f, "{color} already has 16 pieces"),
            ChessErrors::DuplicateKing(color) => write!(f, "{color} already has a king"),
            ChessErrors::UnknownCommand(line) => write!(f, "unknown command: {line}"),
            ChessErrors::InvalidConfigValue { key, value } => {
                write!(f, "invalid value for {key}: {value}")
            }
        }
    }
}

impl Error for ChessErrors {}
