//! Timestamped record of what happened during a game.
//!
//! With `verbose` on, each event is also echoed to stderr as an
//! `info string ...` line, the same register the engine harnesses use.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_descriptions::MoveClassification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Color },
    /// No legal moves without being in check.
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win { winner } => write!(f, "{winner} wins by checkmate"),
            GameOutcome::Draw => write!(f, "draw by stalemate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MoveCommitted {
        side: Color,
        notation: String,
        classification: MoveClassification,
    },
    Check {
        side: Color,
        checkers: Vec<Position>,
    },
    GameOver(GameOutcome),
    Restarted,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::MoveCommitted {
                side,
                notation,
                classification,
            } => write!(f, "move {side} {notation} {classification}"),
            GameEvent::Check { side, checkers } => {
                write!(f, "check {side} by")?;
                for square in checkers {
                    write!(f, " {square}")?;
                }
                Ok(())
            }
            GameEvent::GameOver(outcome) => write!(f, "game_over {outcome}"),
            GameEvent::Restarted => write!(f, "restart"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    /// Plies committed before this event in the current game.
    pub ply: usize,
    pub event: GameEvent,
}

#[derive(Debug, Clone, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
    verbose: bool,
}

impl GameLog {
    pub fn new(verbose: bool) -> Self {
        Self {
            entries: Vec::new(),
            verbose,
        }
    }

    pub fn record(&mut self, ply: usize, event: GameEvent) {
        let entry = LogEntry {
            at: Utc::now(),
            ply,
            event,
        };
        if self.verbose {
            eprintln!(
                "info string {} ply {} {}",
                entry.at.format("%H:%M:%S%.3f"),
                entry.ply,
                entry.event
            );
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last_event(&self) -> Option<&GameEvent> {
        self.entries.last().map(|entry| &entry.event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
