//! Tagged move representation.
//!
//! The intent of a move (plain step, capture, en passant, castle, promotion)
//! is decided when it is generated, so the commit path dispatches on the tag
//! instead of re-deriving it from board occupancy.

use std::fmt;

use crate::game_state::board::EnPassantTarget;
use crate::game_state::chess_types::{CastleSide, PieceHandle, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    /// Pawn advance of two squares from its starting rank.
    DoublePawnPush,
    Capture {
        captured: PieceHandle,
    },
    /// Diagonal pawn step onto the skipped square; `captured` is the pawn that
    /// advanced two squares.
    EnPassant {
        captured: PieceHandle,
    },
    /// King move. The destination of the owning `ChessMove` is the rook's own
    /// square; the board relocates both pieces to the fixed castle squares.
    Castle {
        side: CastleSide,
        rook: PieceHandle,
    },
    Promotion {
        promote_to: PieceKind,
        captured: Option<PieceHandle>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: PieceHandle,
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl ChessMove {
    #[inline]
    pub fn captured_piece(&self) -> Option<PieceHandle> {
        match self.kind {
            MoveKind::Capture { captured } | MoveKind::EnPassant { captured } => Some(captured),
            MoveKind::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    /// En-passant window opened by this move, if any. Only a two-square pawn
    /// advance opens one; every other move closes it.
    pub fn en_passant_window(&self) -> Option<EnPassantTarget> {
        match self.kind {
            MoveKind::DoublePawnPush => {
                let skipped_rank = (self.from.rank() + self.to.rank()) / 2;
                Some(EnPassantTarget {
                    capturer: self.piece.color.opposite(),
                    target: Position::at(self.from.file(), skipped_rank),
                    victim: self.piece,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveKind::Promotion { promote_to, .. } = self.kind {
            write!(f, "{}", promote_to.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// What a confirmed commit did, as seen by the audio collaborator. Check is
/// layered on top by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClassification {
    Move,
    Capture,
    Castle,
    Promote,
}

impl fmt::Display for MoveClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveClassification::Move => "move",
            MoveClassification::Capture => "capture",
            MoveClassification::Castle => "castle",
            MoveClassification::Promote => "promote",
        };
        f.write_str(name)
    }
}

/// Whether generation includes castling. Attack scans leave it out: castling
/// never lands on an enemy piece, and skipping it keeps check detection from
/// recursing into itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveScope {
    Full,
    Attacks,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn handle(color: Color, slot: usize) -> PieceHandle {
        PieceHandle { color, slot }
    }

    #[test]
    fn double_push_opens_window_on_skipped_square() {
        let mv = ChessMove {
            piece: handle(Color::Black, 3),
            from: Position::at(3, 6),
            to: Position::at(3, 4),
            kind: MoveKind::DoublePawnPush,
        };
        let window = mv.en_passant_window().expect("double push should open a window");
        assert_eq!(window.capturer, Color::White);
        assert_eq!(window.target, Position::at(3, 5));
        assert_eq!(window.victim, mv.piece);
    }

    #[test]
    fn en_passant_capture_closes_window() {
        let mv = ChessMove {
            piece: handle(Color::White, 4),
            from: Position::at(4, 4),
            to: Position::at(3, 5),
            kind: MoveKind::EnPassant {
                captured: handle(Color::Black, 3),
            },
        };
        assert!(mv.is_capture());
        assert_eq!(mv.en_passant_window(), None);
    }

    #[test]
    fn promotion_prints_lower_case_suffix() {
        let mv = ChessMove {
            piece: handle(Color::White, 0),
            from: Position::at(0, 6),
            to: Position::at(0, 7),
            kind: MoveKind::Promotion {
                promote_to: PieceKind::Queen,
                captured: None,
            },
        };
        assert_eq!(mv.to_string(), "a7a8q");
    }
}
