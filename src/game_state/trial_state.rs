use crate::game_state::chess_types::{PieceHandle, Position};

/// Restore record for a single trial move. Produced by `Board::apply_trial`
/// and consumed by `Board::revert_trial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a trial must be reverted with the token it produced"]
pub struct TrialToken {
    pub(crate) mover: PieceHandle,
    pub(crate) mover_from: Position,
    pub(crate) captured: Option<PieceHandle>,
    /// Castling rook and the square it left.
    pub(crate) partner: Option<(PieceHandle, Position)>,
}
