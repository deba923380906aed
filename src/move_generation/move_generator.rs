//! Pseudo-legal move dispatch.
//!
//! Routes a roster entry to its per-kind generator. Results respect board
//! bounds and same-color occupancy but ignore whether the mover's own king
//! ends up in check; that filtering lives in `legal_move_generator`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceHandle, PieceKind};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::{ChessMove, MoveScope};
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Appends the pseudo-legal moves of `handle` to `out`. Captured or empty
/// slots produce nothing.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    handle: PieceHandle,
    scope: MoveScope,
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = board.piece(handle) else {
        return;
    };
    if piece.is_captured() {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, handle, piece, out),
        PieceKind::Knight => generate_knight_moves(board, handle, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, handle, piece, out),
        PieceKind::Rook => generate_rook_moves(board, handle, piece, out),
        PieceKind::Queen => generate_queen_moves(board, handle, piece, out),
        PieceKind::King => generate_king_moves(board, handle, piece, scope, out),
    }
}

/// Full pseudo-legal move set of one piece, castling included.
pub fn pseudo_legal_moves(board: &Board, handle: PieceHandle) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(28);
    generate_pseudo_legal_moves(board, handle, MoveScope::Full, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn start_position_pseudo_legal_counts() {
        let board = Board::new_game();

        for color in [Color::White, Color::Black] {
            for (handle, piece) in board.active_pieces(color) {
                let expected = match piece.kind {
                    PieceKind::Pawn | PieceKind::Knight => 2,
                    _ => 0,
                };
                assert_eq!(
                    pseudo_legal_moves(&board, handle).len(),
                    expected,
                    "{color} {:?} on {}",
                    piece.kind,
                    piece.position()
                );
            }
        }
    }

    #[test]
    fn captured_piece_generates_nothing() {
        let mut board = Board::new_game();
        let handle = board.active_handles(Color::White)[9];
        board.set_captured(handle, true);
        assert!(pseudo_legal_moves(&board, handle).is_empty());
    }
}
