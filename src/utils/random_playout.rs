//! Seeded random self-play through the turn controller.
//!
//! Each ply picks uniformly among the legal moves of the side to move and
//! commits it with `Game::commit_move`, so playouts exercise the same path as
//! interactive play. Used by the `random_playouts` binary and as a stress
//! test of the legality pipeline.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::controller::game::{Game, GameStatus};
use crate::controller::game_config::GameConfig;
use crate::controller::game_log::GameOutcome;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::{MoveClassification, MoveKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Finished(GameOutcome),
    MaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub game: GameConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            game: GameConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayoutReport {
    pub seed: u64,
    pub outcome: Option<PlayoutOutcome>,
    pub moves: Vec<String>,
    pub captures: u32,
    pub en_passant: u32,
    pub castles: u32,
    pub promotions: u32,
    pub checks: u32,
}

impl PlayoutReport {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Play one seeded random game from the standard start.
pub fn play_random_game(seed: u64, config: &PlayoutConfig) -> Result<PlayoutReport, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(config.game);
    let mut report = PlayoutReport {
        seed,
        ..PlayoutReport::default()
    };

    while report.moves.len() < usize::from(config.max_plies) {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.random_range(0..legal.len())];
        let outcome = game.commit_move(mv.piece, mv.to)?;

        report.moves.push(mv.to_string());
        match outcome.classification {
            MoveClassification::Capture => report.captures += 1,
            MoveClassification::Castle => report.castles += 1,
            MoveClassification::Promote => report.promotions += 1,
            MoveClassification::Move => {}
        }
        if matches!(mv.kind, MoveKind::EnPassant { .. }) {
            report.en_passant += 1;
        }
        if outcome.gives_check {
            report.checks += 1;
        }
    }

    report.outcome = Some(match game.status() {
        GameStatus::Over(outcome) => PlayoutOutcome::Finished(outcome),
        GameStatus::InProgress => PlayoutOutcome::MaxPlies,
    });
    Ok(report)
}

#[derive(Debug, Clone)]
pub struct PlayoutSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: PlayoutConfig,
    pub verbose: bool,
}

impl Default for PlayoutSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: PlayoutConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub unfinished: u16,
    pub total_plies: usize,
    pub captures: u32,
    pub en_passant: u32,
    pub castles: u32,
    pub promotions: u32,
    pub checks: u32,
    pub outcomes: Vec<PlayoutOutcome>,
}

impl PlayoutSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} draws={} unfinished={} plies={} captures={} en_passant={} castles={} promotions={} checks={}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.draws,
            self.unfinished,
            self.total_plies,
            self.captures,
            self.en_passant,
            self.castles,
            self.promotions,
            self.checks
        )
    }

    fn add(&mut self, report: &PlayoutReport) {
        self.games += 1;
        self.total_plies += report.plies();
        self.captures += report.captures;
        self.en_passant += report.en_passant;
        self.castles += report.castles;
        self.promotions += report.promotions;
        self.checks += report.checks;

        let outcome = report.outcome.unwrap_or(PlayoutOutcome::MaxPlies);
        match outcome {
            PlayoutOutcome::Finished(GameOutcome::Win { winner: Color::White }) => self.white_wins += 1,
            PlayoutOutcome::Finished(GameOutcome::Win { winner: Color::Black }) => self.black_wins += 1,
            PlayoutOutcome::Finished(GameOutcome::Draw) => self.draws += 1,
            PlayoutOutcome::MaxPlies => self.unfinished += 1,
        }
        self.outcomes.push(outcome);
    }
}

/// Play `config.games` playouts with consecutive seeds from `base_seed`.
pub fn play_random_series(config: &PlayoutSeriesConfig) -> Result<PlayoutSeriesStats, ChessErrors> {
    let mut stats = PlayoutSeriesStats::default();

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let report = play_random_game(seed, &config.per_game)?;
        if config.verbose {
            println!(
                "[playouts] game {}/{} seed={} plies={} outcome={:?}",
                i + 1,
                config.games,
                seed,
                report.plies(),
                report.outcome
            );
        }
        stats.add(&report);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::move_generation::legal_move_checks::is_in_check;

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = PlayoutConfig {
            max_plies: 60,
            ..PlayoutConfig::default()
        };
        let first = play_random_game(7, &config).expect("playout should finish");
        let second = play_random_game(7, &config).expect("playout should finish");
        assert_eq!(first, second);
        assert!(first.plies() <= 60);
    }

    #[test]
    fn random_games_never_expose_or_capture_a_king() {
        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new(GameConfig::default());

            for _ in 0..150 {
                let before = game.board().clone();
                let legal = game.legal_moves();
                assert_eq!(game.board(), &before, "listing moves mutated the board");
                if legal.is_empty() {
                    break;
                }

                for mv in &legal {
                    if let Some(victim) = mv.captured_piece() {
                        let piece = game.board().piece(victim).expect("victim slot");
                        assert_ne!(piece.kind, PieceKind::King, "seed {seed}: {mv} captures a king");
                    }
                }

                let mover = game.side_to_move();
                let mv = legal[rng.random_range(0..legal.len())];
                game.commit_move(mv.piece, mv.to).expect("listed move should commit");
                assert!(
                    !is_in_check(game.board(), mover),
                    "seed {seed}: {mv} left {mover} in check"
                );
            }
        }
    }

    #[test]
    fn series_accounts_for_every_game() {
        let stats = play_random_series(&PlayoutSeriesConfig {
            games: 3,
            base_seed: 11,
            per_game: PlayoutConfig {
                max_plies: 80,
                ..PlayoutConfig::default()
            },
            verbose: false,
        })
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.white_wins + stats.black_wins + stats.draws + stats.unfinished, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert!(stats.total_plies <= 240);
    }
}
