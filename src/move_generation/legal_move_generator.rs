//! Legal move filtering.
//!
//! Each pseudo-legal candidate is applied as a trial, the enemy's attack scan
//! is run against the mover's king, and the trial is reverted before the next
//! candidate. Pins, discovered checks and king walks into attacked squares all
//! fall out of this one technique without a separate attack map.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_transit, CastlingRule};
use crate::game_state::chess_types::{Color, PieceHandle};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// Keeps the candidates that do not leave `color`'s king in check, in their
/// original order. The board is left exactly as it was.
pub fn validate_moves(board: &mut Board, color: Color, candidates: &[ChessMove]) -> Vec<ChessMove> {
    candidates
        .iter()
        .filter(|mv| is_move_legal(board, color, mv))
        .copied()
        .collect()
}

pub fn is_move_legal(board: &mut Board, color: Color, mv: &ChessMove) -> bool {
    debug_assert_eq!(mv.piece.color, color, "candidate {mv} belongs to the other side");

    if let MoveKind::Castle { side, .. } = mv.kind {
        if board.castling_rule() == CastlingRule::Standard {
            let transit = ChessMove {
                piece: mv.piece,
                from: mv.from,
                to: castle_transit(color, side),
                kind: MoveKind::Normal,
            };
            if board.with_trial(&transit, |trial| is_in_check(trial, color)) {
                return false;
            }
        }
    }

    board.with_trial(mv, |trial| !is_in_check(trial, color))
}

/// Legal moves of a single piece.
pub fn legal_moves_for(board: &mut Board, handle: PieceHandle) -> Vec<ChessMove> {
    let candidates = pseudo_legal_moves(board, handle);
    validate_moves(board, handle.color, &candidates)
}

/// Legal moves of every active piece of `color`, in roster order.
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<ChessMove> {
    let mut legal = Vec::with_capacity(48);
    for handle in board.active_handles(color) {
        legal.extend(legal_moves_for(board, handle));
    }
    legal
}

/// True when no active piece of `color` has a legal move. This does not
/// distinguish checkmate from stalemate; pair it with `is_in_check`.
pub fn is_checkmated(board: &mut Board, color: Color) -> bool {
    board
        .active_handles(color)
        .into_iter()
        .all(|handle| legal_moves_for(board, handle).is_empty())
}
