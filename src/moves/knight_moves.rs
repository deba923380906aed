use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceHandle;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_offset_moves;
use crate::moves::move_descriptions::ChessMove;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(
    board: &Board,
    handle: PieceHandle,
    knight: &Piece,
    out: &mut Vec<ChessMove>,
) {
    push_offset_moves(board, handle, knight, &KNIGHT_OFFSETS, out);
}
