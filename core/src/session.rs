use alloc::collections::VecDeque;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub generator: GeneratorSettings,
    pub win_policy: WinPolicy,
}

/// Running totals over every level played in a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub levels_completed: u32,
    pub levels_skipped: u32,
    pub total_moves: u32,
    pub total_seconds: u32,
    pub highest_level: LevelIndex,
}

impl SessionStats {
    pub fn levels_played(&self) -> u32 {
        self.levels_completed.saturating_add(self.levels_skipped)
    }
}

/// Level progression for one player: resolves, generates and replaces levels
/// and queues [`EngineEvent`]s for the host.
///
/// Events never wait on the host; a host that failed to store an earlier event
/// keeps receiving new ones.
#[derive(Clone, Debug)]
pub struct GameSession<R> {
    catalog: Catalog,
    generator: RandomBoardGenerator<R>,
    win_policy: WinPolicy,
    engine: Option<PlayEngine>,
    stats: SessionStats,
    events: VecDeque<EngineEvent>,
}

impl GameSession<SeededRng> {
    pub fn from_seed(catalog: Catalog, settings: SessionSettings, seed: u64) -> Self {
        Self::new(catalog, settings, seeded_rng(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(catalog: Catalog, settings: SessionSettings, rng: R) -> Self {
        Self {
            catalog,
            generator: RandomBoardGenerator::new(rng, settings.generator),
            win_policy: settings.win_policy,
            engine: None,
            stats: SessionStats::default(),
            events: VecDeque::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> Option<&PlayEngine> {
        self.engine.as_ref()
    }

    pub fn level(&self) -> Option<LevelIndex> {
        self.engine.as_ref().map(PlayEngine::level)
    }

    pub fn stats(&self) -> SessionStats {
        let mut stats = self.stats;
        // the level in progress counts towards the totals without being finished
        if let Some(engine) = self.engine.as_ref().filter(|engine| !engine.is_won()) {
            stats.total_moves = stats.total_moves.saturating_add(engine.moves());
            stats.total_seconds = stats.total_seconds.saturating_add(engine.elapsed().0);
        }
        stats
    }

    /// Replaces the current level with a freshly generated `level`.
    pub fn start(&mut self, level: LevelIndex) -> Result<&PlayEngine> {
        let config = self.catalog.resolve(level)?;
        let board = self.generator.generate(&config);
        let engine = PlayEngine::with_policy(level, config, board, self.win_policy)?;

        self.close_current();
        log::debug!(
            "Starting level {}: {}x{} {}",
            level,
            config.grid_size,
            config.grid_size,
            config.shape.tag()
        );
        self.stats.highest_level = self.stats.highest_level.max(level);
        self.events.push_back(EngineEvent::LevelReady {
            level,
            config,
            board: engine.board().clone(),
        });
        Ok(&*self.engine.insert(engine))
    }

    /// Regenerates the current level from its index.
    pub fn restart(&mut self) -> Result<&PlayEngine> {
        let level = self.level().unwrap_or(1);
        self.start(level)
    }

    /// Moves on to the next level without completing the current one.
    pub fn skip(&mut self) -> Result<&PlayEngine> {
        let next = self.next_level();
        if self.engine.as_ref().is_some_and(|engine| !engine.is_won()) {
            self.stats.levels_skipped = self.stats.levels_skipped.saturating_add(1);
        }
        self.start(next)
    }

    /// Moves on to the next level; a no-op until the current one is won.
    pub fn advance(&mut self) -> Result<Option<&PlayEngine>> {
        if !self.engine.as_ref().is_some_and(PlayEngine::is_won) {
            return Ok(None);
        }
        let next = self.next_level();
        self.start(next).map(Some)
    }

    pub fn toggle(&mut self, coords: Coord2) -> ToggleOutcome {
        let Some(engine) = self.engine.as_mut() else {
            return ToggleOutcome::NoChange;
        };

        let outcome = engine.toggle(coords);
        if outcome.has_update() {
            self.events.push_back(EngineEvent::BoardChanged {
                board: engine.board().clone(),
                moves: engine.moves(),
            });
        }
        if outcome.is_win() {
            if let Some(completion) = engine.completion() {
                self.stats.levels_completed = self.stats.levels_completed.saturating_add(1);
                self.stats.total_moves = self.stats.total_moves.saturating_add(completion.moves);
                self.stats.total_seconds =
                    self.stats.total_seconds.saturating_add(completion.elapsed_seconds);
                self.events.push_back(EngineEvent::LevelCompleted(completion));
            }
        }
        outcome
    }

    /// One second of wall-clock time from the host.
    pub fn tick(&mut self) -> bool {
        self.engine.as_mut().is_some_and(PlayEngine::tick)
    }

    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    fn next_level(&self) -> LevelIndex {
        self.level().map_or(1, |level| level.saturating_add(1))
    }

    /// Folds an unfinished level's moves and time into the totals before it is replaced.
    fn close_current(&mut self) {
        if let Some(engine) = self.engine.take().filter(|engine| !engine.is_won()) {
            self.stats.total_moves = self.stats.total_moves.saturating_add(engine.moves());
            self.stats.total_seconds = self.stats.total_seconds.saturating_add(engine.elapsed().0);
        }
    }
}
