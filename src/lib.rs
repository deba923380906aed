//! Crate root module declarations for the hot-seat chess rules engine.
//!
//! This file exposes the board model, per-piece move generation, legality
//! filtering, the turn controller, and text utilities so the binaries, tests,
//! and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod trial_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod controller {
    pub mod audio_cues;
    pub mod commands;
    pub mod game;
    pub mod game_config;
    pub mod game_log;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
