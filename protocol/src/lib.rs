//! Records exchanged with the persistence host.
//!
//! Field names follow the host's storage columns, so records can be inserted
//! as-is once serialized.

use lightsout_core::{Board, EngineEvent, LevelCompleted, LevelConfig, LevelIndex, SessionStats};
use serde::{Deserialize, Serialize};

/// One finished level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCompletionRecord {
    pub level_number: LevelIndex,
    pub grid_size: u8,
    pub shape_type: String,
    pub has_fixed_squares: bool,
    pub has_diagonal_toggle: bool,
    pub moves_count: u32,
    pub time_seconds: u32,
}

impl From<&LevelCompleted> for LevelCompletionRecord {
    fn from(completion: &LevelCompleted) -> Self {
        let LevelConfig {
            grid_size,
            shape,
            has_fixed_squares,
            has_diagonal_toggle,
        } = completion.config;
        Self {
            level_number: completion.level,
            grid_size,
            shape_type: shape.tag().to_owned(),
            has_fixed_squares,
            has_diagonal_toggle,
            moves_count: completion.moves,
            time_seconds: completion.elapsed_seconds,
        }
    }
}

/// Totals written when the player leaves a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummaryRecord {
    pub total_levels_played: u32,
    pub total_time_seconds: u32,
    pub total_moves: u32,
    pub highest_level_reached: LevelIndex,
}

impl From<&SessionStats> for SessionSummaryRecord {
    fn from(stats: &SessionStats) -> Self {
        Self {
            total_levels_played: stats.levels_played(),
            total_time_seconds: stats.total_seconds,
            total_moves: stats.total_moves,
            highest_level_reached: stats.highest_level,
        }
    }
}

/// Engine events as sent to the host, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    LevelReady {
        level: LevelIndex,
        config: LevelConfig,
        board: Board,
    },
    BoardChanged {
        board: Board,
        moves: u32,
    },
    LevelCompleted(LevelCompletionRecord),
}

impl From<EngineEvent> for HostEvent {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::LevelReady {
                level,
                config,
                board,
            } => Self::LevelReady {
                level,
                config,
                board,
            },
            EngineEvent::BoardChanged { board, moves } => Self::BoardChanged { board, moves },
            EngineEvent::LevelCompleted(completion) => {
                Self::LevelCompleted(LevelCompletionRecord::from(&completion))
            }
        }
    }
}

impl HostEvent {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
