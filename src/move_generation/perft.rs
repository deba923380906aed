//! Perft node counting over the trial/commit engine.
//!
//! Every node is a cloned board with the committed move applied and the
//! en-passant window updated, exactly as the turn controller would do it.
//! Used as a regression guard for the whole legality pipeline.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, is_checkmated};
use crate::moves::move_descriptions::{ChessMove, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    /// Leaves where the side to move is in check with no legal reply.
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts leaves `depth` plies below `board` with `side_to_move` to play.
pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = board.clone();
    let moves = all_legal_moves(&mut scratch, side_to_move);
    let mut total = PerftCounts::default();

    for mv in &moves {
        let next = play(board, mv);
        if depth == 1 {
            total.merge(leaf_counts(next, side_to_move.opposite(), mv));
        } else {
            total.merge(perft(&next, side_to_move.opposite(), depth - 1));
        }
    }

    total
}

/// Node count only, skipping leaf classification.
pub fn perft_nodes(board: &Board, side_to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut scratch = board.clone();
    let moves = all_legal_moves(&mut scratch, side_to_move);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft_nodes(&play(board, mv), side_to_move.opposite(), depth - 1))
        .sum()
}

fn play(board: &Board, mv: &ChessMove) -> Board {
    let mut next = board.clone();
    next.commit_move(mv);
    next.set_en_passant(mv.en_passant_window());
    next
}

fn leaf_counts(mut next: Board, defender: Color, mv: &ChessMove) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if mv.is_capture() {
        counts.captures += 1;
    }
    match mv.kind {
        MoveKind::EnPassant { .. } => counts.en_passant += 1,
        MoveKind::Castle { .. } => counts.castles += 1,
        MoveKind::Promotion { .. } => counts.promotions += 1,
        _ => {}
    }
    if is_in_check(&next, defender) {
        counts.checks += 1;
        if is_checkmated(&mut next, defender) {
            counts.checkmates += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_nodes};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn start_position_node_counts() {
        let board = Board::new_game();
        assert_eq!(perft_nodes(&board, Color::White, 1), 20);
        assert_eq!(perft_nodes(&board, Color::White, 2), 400);
    }

    #[test]
    fn start_position_depth_three_breakdown() {
        let board = Board::new_game();
        let counts = perft(&board, Color::White, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
        assert_eq!(counts.castles, 0);
    }
}
