//! Coordinate conversions between `Position` and algebraic squares (`e4`).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;

/// Parse a square such as `"e4"`. Upper-case files are accepted.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank));
    }

    let file_index = file as u8 - b'a';
    let rank_index = rank as u8 - b'1';
    Position::new(file_index, rank_index)
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.file());
    let rank_char = char::from(b'1' + position.rank());
    format!("{file_char}{rank_char}")
}
