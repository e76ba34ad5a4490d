use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod fixed;
mod random;
mod seed;

pub trait BoardGenerator {
    fn generate(&mut self, config: &LevelConfig) -> Board;
}

/// How the initial lights are laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Hand-authored patterns for 3x3 to 5x5, a couple of random lights otherwise.
    Curated,
    /// Presses random cells of a dark board, so the result is always solvable.
    Scrambled { press_percent: u8 },
}

impl Default for SeedStrategy {
    fn default() -> Self {
        Self::Curated
    }
}

/// Fixed cells a board may hold, regardless of [`GeneratorSettings`].
pub const MAX_FIXED_CELLS: u8 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub seed_strategy: SeedStrategy,
    /// Upper bound on fixed cells per board, itself capped at [`MAX_FIXED_CELLS`].
    pub max_fixed_cells: u8,
    /// Share of active cells that become fixed, before the upper bound applies.
    pub fixed_cell_percent: u8,
    /// Samples spent looking for eligible cells to fix.
    pub fixed_cell_attempts: u16,
    /// Candidates tried before settling for one the heuristic rejected.
    pub max_generation_attempts: u8,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed_strategy: SeedStrategy::Curated,
            max_fixed_cells: MAX_FIXED_CELLS,
            fixed_cell_percent: 15,
            fixed_cell_attempts: 64,
            max_generation_attempts: 8,
        }
    }
}

/// Generation strategy driven by an injected [`RandomSource`].
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator<R> {
    rng: R,
    settings: GeneratorSettings,
}

impl RandomBoardGenerator<SeededRng> {
    pub fn from_seed(seed: u64, settings: GeneratorSettings) -> Self {
        Self::new(seeded_rng(seed), settings)
    }
}

impl<R: RandomSource> RandomBoardGenerator<R> {
    pub fn new(rng: R, settings: GeneratorSettings) -> Self {
        Self { rng, settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Single board without consulting the solvability heuristic.
    pub fn candidate(&mut self, config: &LevelConfig) -> Board {
        let mut board = Board::blank(config);

        match self.settings.seed_strategy {
            SeedStrategy::Curated => {
                seed::curated(&mut board, &mut self.rng);
                if config.has_fixed_squares {
                    fixed::place(&mut board, &self.settings, &mut self.rng);
                }
            }
            SeedStrategy::Scrambled { press_percent } => {
                // fix first so scrambling only uses presses the player can repeat
                if config.has_fixed_squares {
                    fixed::place(&mut board, &self.settings, &mut self.rng);
                }
                seed::scrambled(&mut board, config, press_percent, &mut self.rng);
            }
        }

        board
    }

    fn accepts(board: &Board) -> bool {
        let already_solved = board.lit_count() == 0 && board.toggleable_count() > 0;
        !already_solved && is_plausibly_solvable(board)
    }
}

impl<R: RandomSource> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, config: &LevelConfig) -> Board {
        let attempts = self.settings.max_generation_attempts.max(1);

        let mut board = self.candidate(config);
        for attempt in 1..attempts {
            if Self::accepts(&board) {
                return board;
            }
            log::debug!(
                "Rejected candidate {} for {}x{} {}, {} lit of {}",
                attempt,
                config.grid_size,
                config.grid_size,
                config.shape.tag(),
                board.lit_count(),
                board.toggleable_count()
            );
            board = self.candidate(config);
        }

        if !Self::accepts(&board) {
            log::warn!(
                "No acceptable board after {} attempts, using the last candidate",
                attempts
            );
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    /// Replays a fixed list of picks, wrapping around when exhausted.
    struct Scripted {
        picks: Vec<CellCount>,
        next: usize,
    }

    impl Scripted {
        fn new(picks: &[CellCount]) -> Self {
            Self {
                picks: picks.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, upper: CellCount) -> CellCount {
            let value = self.picks[self.next % self.picks.len()];
            self.next += 1;
            value % upper
        }
    }

    fn config(size: Coord, shape: Shape) -> LevelConfig {
        LevelConfig::new_unchecked(size, shape)
    }

    #[test]
    fn three_by_three_uses_corner_pattern() {
        let mut generator = RandomBoardGenerator::from_seed(0, GeneratorSettings::default());
        let board = generator.generate(&config(3, Shape::Square));
        assert_eq!(board.to_string(), "#.#\n...\n#.#\n");
    }

    #[test]
    fn four_and_five_use_diagonal_and_five_point_patterns() {
        let mut generator = RandomBoardGenerator::from_seed(0, GeneratorSettings::default());
        let board = generator.generate(&config(4, Shape::Square));
        assert_eq!(board.to_string(), "#...\n.#..\n..#.\n...#\n");

        let board = generator.generate(&config(5, Shape::Square));
        assert_eq!(board.to_string(), "#...#\n.....\n..#..\n.....\n#...#\n");
    }

    #[test]
    fn larger_boards_get_two_distinct_lights() {
        let mut generator =
            RandomBoardGenerator::new(Scripted::new(&[5, 5, 5]), GeneratorSettings::default());
        let board = generator.generate(&config(6, Shape::Square));
        assert_eq!(board.lit_count(), 2);
        assert_eq!(board.fixed_count(), 0);
    }

    #[test]
    fn active_mask_matches_shape() {
        let mut generator = RandomBoardGenerator::from_seed(3, GeneratorSettings::default());
        for shape in Shape::ALL {
            let config = config(7, shape).with_fixed_squares();
            let board = generator.generate(&config);
            for (coords, cell) in board.iter() {
                assert_eq!(cell.is_active, is_in_shape(coords, &config));
                assert!(!cell.is_on || cell.is_active);
            }
        }
    }

    #[test]
    fn fixed_cells_are_bounded_and_active() {
        let mut generator = RandomBoardGenerator::from_seed(11, GeneratorSettings::default());
        for grid_size in 3..=8 {
            let config = config(grid_size, Shape::L).with_fixed_squares();
            let board = generator.generate(&config);
            assert!(board.fixed_count() <= 3);
            assert!(board.iter().all(|(_, cell)| !cell.is_fixed || cell.is_active));
        }
    }

    #[test]
    fn fixed_placement_gives_up_when_every_sample_misses() {
        // always samples (0, 0), which is inactive on a 4x4 plus
        let mut generator =
            RandomBoardGenerator::new(Scripted::new(&[0]), GeneratorSettings::default());
        let config = config(4, Shape::Plus).with_fixed_squares();
        let board = generator.candidate(&config);
        assert_eq!(board.fixed_count(), 0);
    }

    fn scrambled(press_percent: u8, max_generation_attempts: u8) -> GeneratorSettings {
        GeneratorSettings {
            seed_strategy: SeedStrategy::Scrambled { press_percent },
            max_generation_attempts,
            ..GeneratorSettings::default()
        }
    }

    #[test]
    fn exhausted_regeneration_returns_last_candidate() {
        // every pick misses the press chance, so each candidate stays dark
        let mut rng = Scripted::new(&[99]);
        let mut generator = RandomBoardGenerator::new(&mut rng, scrambled(50, 4));
        let board = generator.generate(&config(3, Shape::Square));

        assert_eq!(board.to_string(), "...\n...\n...\n");
        // one pick per toggleable cell per candidate
        assert_eq!(rng.next, 4 * 9);
    }

    #[test]
    fn rejected_candidate_is_replaced() {
        let mut picks: [CellCount; 18] = [99; 18];
        // second candidate presses the centre
        picks[9 + 4] = 0;
        let mut rng = Scripted::new(&picks);
        let mut generator = RandomBoardGenerator::new(&mut rng, scrambled(50, 8));
        let board = generator.generate(&config(3, Shape::Square));

        assert_eq!(board.to_string(), ".#.\n###\n.#.\n");
        assert_eq!(rng.next, 2 * 9);
    }

    #[test]
    fn curated_generation_on_small_plus_is_accepted_first_time() {
        let mut rng = Scripted::new(&[2]);
        let mut generator = RandomBoardGenerator::new(&mut rng, GeneratorSettings::default());
        let board = generator.generate(&config(3, Shape::Plus));

        assert_eq!(board.to_string(), " . \n.#.\n . \n");
        assert_eq!(rng.next, 1);
    }

    #[test]
    fn scrambled_boards_are_solvable_by_their_presses() {
        let settings = GeneratorSettings {
            seed_strategy: SeedStrategy::Scrambled { press_percent: 30 },
            ..GeneratorSettings::default()
        };
        let mut generator = RandomBoardGenerator::from_seed(5, settings);
        let config = config(6, Shape::Hexagon).with_diagonal_toggle();
        let board = generator.generate(&config);

        assert!(board.lit_count() > 0);
        assert!(board.iter().all(|(_, cell)| !cell.is_on || cell.is_toggleable()));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = config(7, Shape::T).with_fixed_squares();
        let a = RandomBoardGenerator::from_seed(99, GeneratorSettings::default()).generate(&config);
        let b = RandomBoardGenerator::from_seed(99, GeneratorSettings::default()).generate(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let json = r#"{ "seed_strategy": { "scrambled": { "press_percent": 40 } } }"#;
        let settings: GeneratorSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.seed_strategy, SeedStrategy::Scrambled { press_percent: 40 });
        assert_eq!(settings.max_fixed_cells, 3);
        assert_eq!(settings.max_generation_attempts, 8);
    }
}
