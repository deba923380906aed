use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceHandle;
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::generate_rook_moves;

/// Union of rook and bishop rays.
pub fn generate_queen_moves(board: &Board, handle: PieceHandle, queen: &Piece, out: &mut Vec<ChessMove>) {
    generate_rook_moves(board, handle, queen, out);
    generate_bishop_moves(board, handle, queen, out);
}
