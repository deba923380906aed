//! Terminal board renderer.
//!
//! Draws from a `BoardSnapshot`, so it never reaches into board internals.
//! Highlighted squares (the selected piece's legal destinations) are marked
//! and the checked king, if any, is bracketed.

use crate::game_state::board::{Board, PieceView};
use crate::game_state::chess_types::*;

/// Render the board with rank 8 at the top, as White sees it.
pub fn render_game_state(board: &Board, highlights: &[Position], unicode: bool) -> String {
    let snapshot = board.snapshot();
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = Position::at(file, rank);
            let occupant = snapshot
                .pieces
                .iter()
                .find(|view| !view.captured && view.position == square);

            let glyph = match occupant {
                Some(view) => piece_glyph(view, unicode),
                None if highlights.contains(&square) => {
                    if unicode {
                        '•'
                    } else {
                        '*'
                    }
                }
                None => empty_glyph(board.square_shade(square), unicode),
            };

            let (open, close) = if snapshot.checked_king == Some(square) {
                ('[', ']')
            } else if occupant.is_some() && highlights.contains(&square) {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    if let Some(color) = board.in_check() {
        out.push_str(&format!("\n{color} is in check"));
    }

    out
}

fn empty_glyph(shade: SquareShade, unicode: bool) -> char {
    match (shade, unicode) {
        (SquareShade::Light, true) => '·',
        (SquareShade::Light, false) => '.',
        (SquareShade::Dark, true) => '░',
        (SquareShade::Dark, false) => ':',
    }
}

fn piece_glyph(view: &PieceView, unicode: bool) -> char {
    if !unicode {
        return match view.color {
            Color::White => view.kind.letter(),
            Color::Black => view.kind.letter().to_ascii_lowercase(),
        };
    }

    match (view.color, view.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
