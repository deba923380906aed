//! Bishop move generation: four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceHandle;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::trace_ray;
use crate::moves::move_descriptions::ChessMove;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(
    board: &Board,
    handle: PieceHandle,
    bishop: &Piece,
    out: &mut Vec<ChessMove>,
) {
    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        trace_ray(board, handle, bishop, file_step, rank_step, out);
    }
}
