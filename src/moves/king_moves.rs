//! King move generation, including castling candidates.
//!
//! A castling candidate is emitted with the rook's own square as its
//! destination, matching what a player clicks, and is tagged `Castle` so the
//! commit path never has to infer intent from a friendly-occupied target.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_destinations, king_start, rook_start, CastlingRule};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_shared::push_offset_moves;
use crate::moves::move_descriptions::{ChessMove, MoveKind, MoveScope};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (-1, 0),
];

pub fn generate_king_moves(
    board: &Board,
    handle: PieceHandle,
    king: &Piece,
    scope: MoveScope,
    out: &mut Vec<ChessMove>,
) {
    push_offset_moves(board, handle, king, &KING_OFFSETS, out);

    if scope == MoveScope::Full {
        generate_castling_moves(board, handle, king, out);
    }
}

fn generate_castling_moves(board: &Board, handle: PieceHandle, king: &Piece, out: &mut Vec<ChessMove>) {
    let color = king.color;
    if king.has_moved() || king.position() != king_start(color) {
        return;
    }

    // Cannot castle out of check.
    if is_in_check(board, color) {
        return;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let rook_square = rook_start(color, side);
        let Some((rook_handle, rook)) = board.piece_at(rook_square) else {
            continue;
        };
        if rook.color != color || rook.kind != PieceKind::Rook || rook.has_moved() {
            continue;
        }
        if !castling_path_clear(board, board.castling_rule(), king.position(), rook_square) {
            continue;
        }
        // The king never lands on an occupied square, whatever the rule.
        let (king_to, _) = castle_destinations(color, side);
        if board.piece_at(king_to).is_some() {
            continue;
        }

        out.push(ChessMove {
            piece: handle,
            from: king.position(),
            to: rook_square,
            kind: MoveKind::Castle {
                side,
                rook: rook_handle,
            },
        });
    }
}

fn castling_path_clear(board: &Board, rule: CastlingRule, king_square: Position, rook_square: Position) -> bool {
    let step: i8 = if rook_square.file() > king_square.file() { 1 } else { -1 };

    match rule {
        CastlingRule::AdjacentSquareOnly => king_square
            .offset(step, 0)
            .is_some_and(|next| next == rook_square || board.piece_at(next).is_none()),
        CastlingRule::Standard => {
            let mut cursor = king_square.offset(step, 0);
            while let Some(square) = cursor {
                if square == rook_square {
                    return true;
                }
                if board.piece_at(square).is_some() {
                    return false;
                }
                cursor = square.offset(step, 0);
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(s: &str) -> Position {
        algebraic_to_position(s).expect("test square should parse")
    }

    fn king_moves(board: &Board, color: Color, scope: MoveScope) -> Vec<ChessMove> {
        let handle = board.king_handle(color).expect("king should be placed");
        let king = *board.piece(handle).expect("king slot");
        let mut out = Vec::new();
        generate_king_moves(board, handle, &king, scope, &mut out);
        out
    }

    fn castle_targets(moves: &[ChessMove]) -> Vec<Position> {
        moves
            .iter()
            .filter(|mv| matches!(mv.kind, MoveKind::Castle { .. }))
            .map(|mv| mv.to)
            .collect()
    }

    fn castling_board(rule: CastlingRule) -> Board {
        let mut board = Board::empty().with_castling_rule(rule);
        board.place(Color::White, PieceKind::King, sq("e1")).expect("place");
        board.place(Color::White, PieceKind::Rook, sq("h1")).expect("place");
        board.place(Color::White, PieceKind::Rook, sq("a1")).expect("place");
        board.place(Color::Black, PieceKind::King, sq("e8")).expect("place");
        board
    }

    #[test]
    fn king_in_open_center_has_eight_steps() {
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::King, sq("d4")).expect("place");
        assert_eq!(king_moves(&board, Color::White, MoveScope::Full).len(), 8);
    }

    #[test]
    fn rook_squares_are_castle_targets_when_path_is_clear() {
        let board = castling_board(CastlingRule::Standard);
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert_eq!(castle_targets(&moves), vec![sq("h1"), sq("a1")]);
    }

    #[test]
    fn attack_scope_never_offers_castling() {
        let board = castling_board(CastlingRule::Standard);
        let moves = king_moves(&board, Color::White, MoveScope::Attacks);
        assert!(castle_targets(&moves).is_empty());
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn standard_rule_checks_every_square_between() {
        let mut board = castling_board(CastlingRule::Standard);
        board.place(Color::White, PieceKind::Knight, sq("b1")).expect("place");
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert_eq!(castle_targets(&moves), vec![sq("h1")]);
    }

    #[test]
    fn adjacent_rule_only_checks_square_next_to_king() {
        let mut board = castling_board(CastlingRule::AdjacentSquareOnly);
        board.place(Color::White, PieceKind::Knight, sq("b1")).expect("place");
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert_eq!(castle_targets(&moves), vec![sq("h1"), sq("a1")]);

        board.place(Color::White, PieceKind::Bishop, sq("f1")).expect("place");
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert_eq!(castle_targets(&moves), vec![sq("a1")]);
    }

    #[test]
    fn adjacent_rule_still_needs_an_empty_landing_square() {
        let mut board = castling_board(CastlingRule::AdjacentSquareOnly);
        board.place(Color::White, PieceKind::Bishop, sq("c1")).expect("place");
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert_eq!(castle_targets(&moves), vec![sq("h1")]);
    }

    #[test]
    fn no_castling_while_in_check() {
        let mut board = castling_board(CastlingRule::Standard);
        board.place(Color::Black, PieceKind::Rook, sq("e5")).expect("place");
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert!(castle_targets(&moves).is_empty());
    }

    #[test]
    fn enemy_rook_on_corner_is_not_a_castle_partner() {
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::King, sq("e1")).expect("place");
        board.place(Color::Black, PieceKind::Rook, sq("h1")).expect("place");
        board.place(Color::Black, PieceKind::King, sq("e8")).expect("place");
        let moves = king_moves(&board, Color::White, MoveScope::Full);
        assert!(castle_targets(&moves).is_empty());
    }
}
