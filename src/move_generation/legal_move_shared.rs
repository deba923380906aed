use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// What a non-pawn piece may do on `target`: `Normal` onto an empty square,
/// `Capture` onto an enemy, nothing onto a friend.
#[inline]
pub fn step_kind(board: &Board, color: Color, target: Position) -> Option<MoveKind> {
    match board.piece_at(target) {
        None => Some(MoveKind::Normal),
        Some((handle, other)) if other.color != color => Some(MoveKind::Capture { captured: handle }),
        Some(_) => None,
    }
}

/// Emits single-step moves for every offset that stays on the board.
pub fn push_offset_moves(
    board: &Board,
    handle: PieceHandle,
    piece: &Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let from = piece.position();
    for (d_file, d_rank) in offsets {
        let Some(to) = from.offset(*d_file, *d_rank) else {
            continue;
        };
        if let Some(kind) = step_kind(board, piece.color, to) {
            out.push(ChessMove {
                piece: handle,
                from,
                to,
                kind,
            });
        }
    }
}

/// Walks one ray up to 7 steps. The ray stops at the first occupied square,
/// which is included only when it holds an enemy.
pub fn trace_ray(
    board: &Board,
    handle: PieceHandle,
    piece: &Piece,
    file_step: i8,
    rank_step: i8,
    out: &mut Vec<ChessMove>,
) {
    let from = piece.position();
    let mut cursor = from;

    for _ in 0..7 {
        let Some(to) = cursor.offset(file_step, rank_step) else {
            break;
        };
        let Some(kind) = step_kind(board, piece.color, to) else {
            break;
        };
        let blocked = kind != MoveKind::Normal;
        out.push(ChessMove {
            piece: handle,
            from,
            to,
            kind,
        });
        if blocked {
            break;
        }
        cursor = to;
    }
}
