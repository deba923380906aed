//! Turn controller.
//!
//! `Game` owns the one authoritative `Board` together with the side to move
//! and the game-over status. Every input path (selection, commit, text
//! submission, restart) goes through it, so en-passant bookkeeping, the check
//! cache and the audio cue are updated exactly once per confirmed move.

use crate::chess_errors::ChessErrors;
use crate::controller::audio_cues::{AudioCue, AudioCuePlayer, SilentAudio};
use crate::controller::game_config::GameConfig;
use crate::controller::game_log::{GameEvent, GameLog, GameOutcome};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceHandle, Position};
use crate::move_generation::legal_move_checks::checkers;
use crate::move_generation::legal_move_generator::{all_legal_moves, is_checkmated, legal_moves_for};
use crate::moves::move_descriptions::{ChessMove, MoveClassification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over(GameOutcome),
}

/// Result of one confirmed commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub mv: ChessMove,
    pub classification: MoveClassification,
    /// The side now to move is in check.
    pub gives_check: bool,
    pub status: GameStatus,
}

impl CommitOutcome {
    /// Check takes precedence over the move's own classification.
    pub fn audio_cue(&self) -> AudioCue {
        if self.gives_check {
            AudioCue::Check
        } else {
            AudioCue::from(self.classification)
        }
    }
}

pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    plies: usize,
    config: GameConfig,
    log: GameLog,
    audio: Box<dyn AudioCuePlayer>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new_game().with_castling_rule(config.castling_rule);
        Self::from_board(board, Color::White, config)
    }

    /// Start from an arbitrary position. The board keeps its own castling
    /// rule; `config.castling_rule` applies from the next restart on.
    pub fn from_board(board: Board, side_to_move: Color, config: GameConfig) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            status: GameStatus::InProgress,
            plies: 0,
            config,
            log: GameLog::new(config.verbose),
            audio: Box::new(SilentAudio),
        };
        game.refresh_status();
        game
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioCuePlayer>) -> Self {
        self.audio = audio;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Plies committed since the game (re)started.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Every legal move of the side to move; empty once the game is over.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        if self.is_over() {
            return Vec::new();
        }
        all_legal_moves(&mut self.board, self.side_to_move)
    }

    /// Legal destinations of the piece on `position`, in generation order.
    /// Empty when the square is empty, holds an enemy piece, or the game is
    /// over.
    pub fn select_piece(&mut self, position: Position) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        let Some((handle, _)) = self
            .board
            .piece_at(position)
            .filter(|(handle, _)| handle.color == self.side_to_move)
        else {
            return Vec::new();
        };

        legal_moves_for(&mut self.board, handle)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Commit the legal move of `handle` that lands on `to`. On error the
    /// game is left untouched.
    pub fn commit_move(&mut self, handle: PieceHandle, to: Position) -> Result<CommitOutcome, ChessErrors> {
        if self.is_over() {
            return Err(ChessErrors::GameIsOver);
        }
        let from = match self.board.piece(handle) {
            Some(piece) if !piece.is_captured() => piece.position(),
            _ => return Err(ChessErrors::UnknownPiece(handle)),
        };
        if handle.color != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(from));
        }

        let mv = legal_moves_for(&mut self.board, handle)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(ChessErrors::IllegalMove { from, to })?;

        let mover = self.side_to_move;
        let classification = self.board.commit_move(&mv);
        self.board.set_en_passant(mv.en_passant_window());
        self.side_to_move = mover.opposite();
        self.plies += 1;

        self.log.record(
            self.plies,
            GameEvent::MoveCommitted {
                side: mover,
                notation: mv.to_string(),
                classification,
            },
        );

        let gives_check = self.refresh_status();
        let outcome = CommitOutcome {
            mv,
            classification,
            gives_check,
            status: self.status,
        };
        self.audio.play(outcome.audio_cue());

        Ok(outcome)
    }

    /// Text-input entry point: resolve the piece on `from`, then commit.
    pub fn submit(&mut self, from: Position, to: Position) -> Result<CommitOutcome, ChessErrors> {
        if self.is_over() {
            return Err(ChessErrors::GameIsOver);
        }
        let Some((handle, _)) = self.board.piece_at(from) else {
            return Err(ChessErrors::NoPieceAt(from));
        };
        if handle.color != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(from));
        }
        self.commit_move(handle, to)
    }

    /// Throw the board away and set up a new game with the configured rule.
    pub fn restart(&mut self) {
        self.board = Board::new_game().with_castling_rule(self.config.castling_rule);
        self.side_to_move = Color::White;
        self.status = GameStatus::InProgress;
        self.plies = 0;
        self.log.record(0, GameEvent::Restarted);
    }

    /// Refresh the check cache and game-over status for the side to move.
    /// Returns whether that side is in check.
    fn refresh_status(&mut self) -> bool {
        let defender = self.side_to_move;
        let in_check = self.board.refresh_check_state() == Some(defender);

        if in_check {
            let squares = checkers(&self.board, defender)
                .into_iter()
                .filter_map(|handle| self.board.piece(handle).map(|piece| piece.position()))
                .collect();
            self.log.record(
                self.plies,
                GameEvent::Check {
                    side: defender,
                    checkers: squares,
                },
            );
        }

        if is_checkmated(&mut self.board, defender) {
            let outcome = if in_check {
                GameOutcome::Win {
                    winner: defender.opposite(),
                }
            } else {
                GameOutcome::Draw
            };
            self.status = GameStatus::Over(outcome);
            self.log.record(self.plies, GameEvent::GameOver(outcome));
        } else {
            self.status = GameStatus::InProgress;
        }

        in_check
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::move_generation::move_generator::pseudo_legal_moves;
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(s: &str) -> Position {
        algebraic_to_position(s).expect("test square should parse")
    }

    fn play(game: &mut Game, moves: &[&str]) -> Vec<CommitOutcome> {
        moves
            .iter()
            .map(|mv| {
                game.submit(sq(&mv[..2]), sq(&mv[2..]))
                    .unwrap_or_else(|err| panic!("{mv} should be legal: {err}"))
            })
            .collect()
    }

    struct RecordingAudio(Rc<RefCell<Vec<AudioCue>>>);

    impl AudioCuePlayer for RecordingAudio {
        fn play(&mut self, cue: AudioCue) {
            self.0.borrow_mut().push(cue);
        }
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let cues = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new(GameConfig::default()).with_audio(Box::new(RecordingAudio(cues.clone())));

        let outcomes = play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        let last = outcomes.last().expect("four outcomes");

        assert!(last.gives_check);
        assert_eq!(last.status, GameStatus::Over(GameOutcome::Win { winner: Color::Black }));
        assert_eq!(game.status(), last.status);
        assert_eq!(game.board().in_check(), Some(Color::White));
        assert_eq!(
            *cues.borrow(),
            vec![AudioCue::Move, AudioCue::Move, AudioCue::Move, AudioCue::Check]
        );

        assert_eq!(game.submit(sq("a2"), sq("a3")), Err(ChessErrors::GameIsOver));
        assert!(game.select_piece(sq("a2")).is_empty());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn rejected_submissions_leave_the_game_untouched() {
        let mut game = Game::new(GameConfig::default());
        let before = game.board().clone();

        assert_eq!(game.submit(sq("e7"), sq("e5")), Err(ChessErrors::NotSideToMove(sq("e7"))));
        assert_eq!(game.submit(sq("e3"), sq("e4")), Err(ChessErrors::NoPieceAt(sq("e3"))));
        assert_eq!(
            game.submit(sq("e2"), sq("e5")),
            Err(ChessErrors::IllegalMove {
                from: sq("e2"),
                to: sq("e5"),
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.plies(), 0);
    }

    #[test]
    fn selection_lists_only_own_pieces() {
        let mut game = Game::new(GameConfig::default());
        assert_eq!(game.select_piece(sq("g1")), vec![sq("h3"), sq("f3")]);
        assert!(game.select_piece(sq("g8")).is_empty());
        assert!(game.select_piece(sq("e4")).is_empty());
    }

    #[test]
    fn en_passant_capture_removes_the_pawn() {
        let mut game = Game::new(GameConfig::default());
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);

        assert!(game.select_piece(sq("e5")).contains(&sq("d6")));
        let outcome = game.submit(sq("e5"), sq("d6")).expect("en passant should be legal");
        assert_eq!(outcome.classification, MoveClassification::Capture);
        assert!(game.board().piece_at(sq("d5")).is_none());
        assert!(game.board().en_passant().is_none());

        // The captured pawn no longer blocks the d-file.
        play(&mut game, &["a6a5", "d2d4", "a5a4"]);
        assert!(game.select_piece(sq("d4")).contains(&sq("d5")));
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        let mut game = Game::new(GameConfig::default());
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
        assert!(!game.select_piece(sq("e5")).contains(&sq("d6")));
    }

    #[test]
    fn kingside_castle_commits_both_pieces() {
        let mut game = Game::new(GameConfig::default());
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);

        assert!(game.select_piece(sq("e1")).contains(&sq("h1")));
        let outcome = game.submit(sq("e1"), sq("h1")).expect("castling should be legal");
        assert_eq!(outcome.classification, MoveClassification::Castle);
        assert_eq!(outcome.audio_cue(), AudioCue::Castle);

        let (_, king) = game.board().piece_at(sq("g1")).expect("king on g1");
        assert_eq!(king.kind, PieceKind::King);
        assert!(king.has_moved());
        let (_, rook) = game.board().piece_at(sq("f1")).expect("rook on f1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved());
        assert!(game.board().piece_at(sq("e1")).is_none());
        assert!(game.board().piece_at(sq("h1")).is_none());
    }

    #[test]
    fn promotion_turns_pawn_into_queen() {
        let mut board = Board::empty();
        let pawn = board.place(Color::White, PieceKind::Pawn, sq("a7")).expect("place");
        board.place(Color::White, PieceKind::King, sq("e1")).expect("place");
        board.place(Color::Black, PieceKind::King, sq("h6")).expect("place");
        let mut game = Game::from_board(board, Color::White, GameConfig::default());

        let outcome = game.commit_move(pawn, sq("a8")).expect("promotion should be legal");
        assert_eq!(outcome.classification, MoveClassification::Promote);
        assert!(!outcome.gives_check);
        assert_eq!(outcome.status, GameStatus::InProgress);

        let queen = game.board().piece(pawn).expect("promoted piece");
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(pseudo_legal_moves(game.board(), pawn).len(), 21);
    }

    #[test]
    fn stalemate_is_a_draw() {
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::King, sq("c7")).expect("place");
        board.place(Color::White, PieceKind::Queen, sq("b1")).expect("place");
        board.place(Color::Black, PieceKind::King, sq("a8")).expect("place");
        let mut game = Game::from_board(board, Color::White, GameConfig::default());

        let outcome = game.submit(sq("b1"), sq("b6")).expect("queen move should be legal");
        assert!(!outcome.gives_check);
        assert_eq!(outcome.status, GameStatus::Over(GameOutcome::Draw));
        assert_eq!(game.log().last_event(), Some(&GameEvent::GameOver(GameOutcome::Draw)));
    }

    #[test]
    fn commit_rejects_captured_and_foreign_handles() {
        let mut game = Game::new(GameConfig::default());
        let black_pawn = game
            .board()
            .piece_at(sq("e7"))
            .map(|(handle, _)| handle)
            .expect("black pawn on e7");
        assert_eq!(
            game.commit_move(black_pawn, sq("e5")),
            Err(ChessErrors::NotSideToMove(sq("e7")))
        );

        let empty_slot = PieceHandle {
            color: Color::White,
            slot: 15,
        };
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::King, sq("e1")).expect("place");
        board.place(Color::Black, PieceKind::King, sq("e8")).expect("place");
        let mut sparse = Game::from_board(board, Color::White, GameConfig::default());
        assert_eq!(
            sparse.commit_move(empty_slot, sq("e2")),
            Err(ChessErrors::UnknownPiece(empty_slot))
        );
    }

    #[test]
    fn restart_resets_everything() {
        let mut game = Game::new(GameConfig::default());
        play(&mut game, &["e2e4", "e7e5"]);
        game.restart();

        assert_eq!(game.board(), &Board::new_game());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.plies(), 0);
        assert_eq!(game.log().last_event(), Some(&GameEvent::Restarted));
    }
}
