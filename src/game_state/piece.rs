//! A single roster entry.
//!
//! Pieces are created with the board and never destroyed; a capture only
//! flips `captured`, leaving the slot (and its handle) valid.

use crate::game_state::chess_types::{Color, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    position: Position,
    previous_position: Option<Position>,
    has_moved: bool,
    captured: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
            previous_position: None,
            has_moved: false,
            captured: false,
        }
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Square held before the last confirmed move; `None` until the piece moves.
    #[inline]
    pub const fn previous_position(&self) -> Option<Position> {
        self.previous_position
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// Moves the piece without touching its history. Used by trials and
    /// their reverts only.
    #[inline]
    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
    }

    pub(crate) fn confirm_move(&mut self, to: Position) {
        self.previous_position = Some(self.position);
        self.position = to;
        self.has_moved = true;
    }

    #[inline]
    pub(crate) fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        debug_assert_eq!(self.kind, PieceKind::Pawn, "only pawns promote");
        self.kind = kind;
    }
}
