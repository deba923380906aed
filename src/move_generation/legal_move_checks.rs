use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::{ChessMove, MoveScope};

/// True when any active enemy piece could capture `color`'s king. Pure query;
/// the board's cached check holder is refreshed separately.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king_square, color.opposite())
}

/// True when some active `attacker_color` piece has a pseudo-legal move onto
/// `square`. Pawns only reach occupied diagonals, so `square` is expected to
/// hold a piece of the defending side.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let mut scratch = Vec::<ChessMove>::with_capacity(28);
    for (handle, _) in board.active_pieces(attacker_color) {
        scratch.clear();
        generate_pseudo_legal_moves(board, handle, MoveScope::Attacks, &mut scratch);
        if scratch.iter().any(|mv| mv.to == square) {
            return true;
        }
    }
    false
}

/// Enemy pieces currently giving check to `color`'s king.
pub fn checkers(board: &Board, color: Color) -> Vec<PieceHandle> {
    let Some(king_square) = board.king_position(color) else {
        return Vec::new();
    };

    let mut scratch = Vec::<ChessMove>::with_capacity(28);
    let mut attackers = Vec::new();
    for (handle, _) in board.active_pieces(color.opposite()) {
        scratch.clear();
        generate_pseudo_legal_moves(board, handle, MoveScope::Attacks, &mut scratch);
        if scratch.iter().any(|mv| mv.to == king_square) {
            attackers.push(handle);
        }
    }
    attackers
}
