//! Pawn move generation.
//!
//! Covers single and double pushes, diagonal captures, en-passant captures
//! onto the board's open window, and tags every move that reaches the far
//! rank as a queen promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

pub fn generate_pawn_moves(board: &Board, handle: PieceHandle, pawn: &Piece, out: &mut Vec<ChessMove>) {
    let color = pawn.color;
    let from = pawn.position();
    let forward = color.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if board.piece_at(one_step).is_none() {
            out.push(pawn_move(handle, from, one_step, color, None));

            if !pawn.has_moved() && from.rank() == color.pawn_rank() {
                if let Some(two_step) = from.offset(0, 2 * forward) {
                    if board.piece_at(two_step).is_none() {
                        out.push(ChessMove {
                            piece: handle,
                            from,
                            to: two_step,
                            kind: MoveKind::DoublePawnPush,
                        });
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(file_delta, forward) else {
            continue;
        };

        match board.piece_at(to) {
            Some((victim, other)) if other.color != color => {
                out.push(pawn_move(handle, from, to, color, Some(victim)));
            }
            Some(_) => {}
            None => {
                if let Some(window) = board.en_passant() {
                    if window.capturer == color && window.target == to {
                        out.push(ChessMove {
                            piece: handle,
                            from,
                            to,
                            kind: MoveKind::EnPassant {
                                captured: window.victim,
                            },
                        });
                    }
                }
            }
        }
    }
}

fn pawn_move(
    handle: PieceHandle,
    from: Position,
    to: Position,
    color: Color,
    captured: Option<PieceHandle>,
) -> ChessMove {
    let kind = if to.rank() == color.promotion_rank() {
        MoveKind::Promotion {
            promote_to: PieceKind::Queen,
            captured,
        }
    } else {
        match captured {
            Some(captured) => MoveKind::Capture { captured },
            None => MoveKind::Normal,
        }
    };

    ChessMove {
        piece: handle,
        from,
        to,
        kind,
    }
}
