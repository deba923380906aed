//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout, the fixed post-castling squares, and
//! the castling path rule used by king move generation.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Position};

/// Back-rank layout from the a-file to the h-file, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_FILE: u8 = 4;

/// How much of the king-rook path must be empty before castling is offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CastlingRule {
    /// Every square between king and rook is empty and the king does not
    /// cross an attacked square.
    #[default]
    Standard,
    /// Only the square next to the king, toward the rook, and the king's
    /// destination must be empty. The king's transit square is not tested
    /// for attacks.
    AdjacentSquareOnly,
}

/// Square the king starts on for `color`.
#[inline]
pub const fn king_start(color: Color) -> Position {
    Position::at(KING_START_FILE, color.home_rank())
}

/// Square the castling rook starts on for `color` and `side`.
#[inline]
pub const fn rook_start(color: Color, side: CastleSide) -> Position {
    Position::at(side.rook_file(), color.home_rank())
}

/// `(king_destination, rook_destination)` after castling.
#[inline]
pub const fn castle_destinations(color: Color, side: CastleSide) -> (Position, Position) {
    let rank = color.home_rank();
    match side {
        CastleSide::KingSide => (Position::at(6, rank), Position::at(5, rank)),
        CastleSide::QueenSide => (Position::at(2, rank), Position::at(3, rank)),
    }
}

/// Square the king crosses on its way to the castling destination.
#[inline]
pub const fn castle_transit(color: Color, side: CastleSide) -> Position {
    let rank = color.home_rank();
    match side {
        CastleSide::KingSide => Position::at(5, rank),
        CastleSide::QueenSide => Position::at(3, rank),
    }
}
