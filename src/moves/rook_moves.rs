use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceHandle;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::trace_ray;
use crate::moves::move_descriptions::ChessMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn generate_rook_moves(board: &Board, handle: PieceHandle, rook: &Piece, out: &mut Vec<ChessMove>) {
    for (file_step, rank_step) in ROOK_DIRECTIONS {
        trace_ray(board, handle, rook, file_step, rank_step, out);
    }
}
