use serde::{Deserialize, Serialize};

use crate::*;

/// Final numbers of a level, handed to whoever records completions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCompleted {
    pub level: LevelIndex,
    pub config: LevelConfig,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub reason: WinReason,
}

impl LevelCompleted {
    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.elapsed_seconds)
    }
}

/// Notifications queued by a [`GameSession`] for the host to act on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A freshly generated level, before any interaction.
    LevelReady {
        level: LevelIndex,
        config: LevelConfig,
        board: Board,
    },
    /// The board after an accepted press.
    BoardChanged { board: Board, moves: u32 },
    /// Emitted once per level, right after the winning press.
    LevelCompleted(LevelCompleted),
}
