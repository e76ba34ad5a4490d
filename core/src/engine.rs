use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won(WinReason),
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won(_))
    }
}

/// State of one level in play: board, move counter, clock and win flag.
///
/// Once won the engine is frozen; later presses and ticks are ignored.
///
/// Only serializable: an engine is always built through [`PlayEngine::new`],
/// which checks the board against the level config.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayEngine {
    level: LevelIndex,
    config: LevelConfig,
    board: Board,
    moves: Saturating<u32>,
    elapsed: Saturating<u32>,
    state: EngineState,
    win: Option<WinReason>,
    policy: WinPolicy,
}

impl PlayEngine {
    pub fn new(level: LevelIndex, config: LevelConfig, board: Board) -> Result<Self> {
        Self::with_policy(level, config, board, WinPolicy::default())
    }

    pub fn with_policy(
        level: LevelIndex,
        config: LevelConfig,
        board: Board,
        policy: WinPolicy,
    ) -> Result<Self> {
        if level == 0 {
            return Err(GameError::InvalidLevelIndex);
        }
        if board.size() != config.grid_size {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self {
            level,
            config,
            board,
            moves: Saturating(0),
            elapsed: Saturating(0),
            state: EngineState::default(),
            win: None,
            policy,
        })
    }

    pub fn level(&self) -> LevelIndex {
        self.level
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.elapsed.0)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    pub fn win_reason(&self) -> Option<WinReason> {
        self.win
    }

    pub fn can_interact_at(&self, coords: Coord2) -> bool {
        !self.state.is_finished() && self.board.can_toggle_at(coords)
    }

    /// Presses `coords`. Anything that cannot be pressed, including every press
    /// after the win, is a [`ToggleOutcome::NoChange`] and costs no move.
    pub fn toggle(&mut self, coords: Coord2) -> ToggleOutcome {
        if !self.can_interact_at(coords) {
            return ToggleOutcome::NoChange;
        }

        let next = toggle(&self.board, coords, &self.config);
        let reason = evaluate_with(self.policy, &self.board, &next);
        self.board = next;
        self.moves += 1;

        match reason {
            Some(reason) => {
                self.end_level(reason);
                ToggleOutcome::Won(reason)
            }
            None => {
                self.mark_started();
                ToggleOutcome::Toggled
            }
        }
    }

    /// Adds one second unless the level is already won; returns whether it counted.
    pub fn tick(&mut self) -> bool {
        if self.state.is_finished() {
            return false;
        }
        self.elapsed += 1;
        true
    }

    pub fn completion(&self) -> Option<LevelCompleted> {
        let reason = self.win?;
        Some(LevelCompleted {
            level: self.level,
            config: self.config,
            moves: self.moves.0,
            elapsed_seconds: self.elapsed.0,
            reason,
        })
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn end_level(&mut self, reason: WinReason) {
        if self.state.is_finished() {
            return;
        }
        self.state = EngineState::Won;
        self.win = Some(reason);
        log::info!(
            "Level {} complete in {} moves and {} ({:?})",
            self.level,
            self.moves.0,
            Elapsed(self.elapsed.0),
            reason
        );
    }
}
