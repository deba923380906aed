//! Audio collaborator seam.
//!
//! The engine never plays sound itself; after every commit the controller
//! hands exactly one `AudioCue` to whatever `AudioCuePlayer` it was built
//! with.

use std::fmt;
use std::io::Write;

use crate::moves::move_descriptions::MoveClassification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Move,
    Capture,
    Castle,
    Promote,
    Check,
}

impl AudioCue {
    /// Asset name an audio loader would resolve for this cue.
    pub const fn asset_name(self) -> &'static str {
        match self {
            AudioCue::Move => "move.wav",
            AudioCue::Capture => "capture.wav",
            AudioCue::Castle => "castle.wav",
            AudioCue::Promote => "promote.wav",
            AudioCue::Check => "check.wav",
        }
    }
}

impl From<MoveClassification> for AudioCue {
    fn from(classification: MoveClassification) -> Self {
        match classification {
            MoveClassification::Move => AudioCue::Move,
            MoveClassification::Capture => AudioCue::Capture,
            MoveClassification::Castle => AudioCue::Castle,
            MoveClassification::Promote => AudioCue::Promote,
        }
    }
}

impl fmt::Display for AudioCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AudioCue::Move => "move",
            AudioCue::Capture => "capture",
            AudioCue::Castle => "castle",
            AudioCue::Promote => "promote",
            AudioCue::Check => "check",
        };
        f.write_str(name)
    }
}

pub trait AudioCuePlayer {
    fn play(&mut self, cue: AudioCue);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioCuePlayer for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Rings the terminal bell on check and prints the cue name.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAudio;

impl AudioCuePlayer for TerminalAudio {
    fn play(&mut self, cue: AudioCue) {
        let bell = if cue == AudioCue::Check { "\x07" } else { "" };
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{bell}[{cue}]");
        let _ = stdout.flush();
    }
}
