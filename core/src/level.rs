use alloc::string::ToString;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rules of a single level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelConfig {
    pub grid_size: Coord,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub has_fixed_squares: bool,
    #[serde(default)]
    pub has_diagonal_toggle: bool,
}

impl LevelConfig {
    pub const fn new_unchecked(grid_size: Coord, shape: Shape) -> Self {
        Self {
            grid_size,
            shape,
            has_fixed_squares: false,
            has_diagonal_toggle: false,
        }
    }

    pub fn new(grid_size: Coord, shape: Shape) -> Result<Self> {
        if grid_size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        Ok(Self::new_unchecked(grid_size, shape))
    }

    pub const fn with_fixed_squares(mut self) -> Self {
        self.has_fixed_squares = true;
        self
    }

    pub const fn with_diagonal_toggle(mut self) -> Self {
        self.has_diagonal_toggle = true;
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }
}

const fn level(grid_size: Coord, shape: Shape) -> LevelConfig {
    LevelConfig::new_unchecked(grid_size, shape)
}

/// Hand-authored level progression used by the game.
pub const STANDARD_LEVELS: [LevelConfig; 32] = [
    // warm-up
    level(3, Shape::Square),
    level(4, Shape::Square),
    level(5, Shape::Square),
    level(5, Shape::Square),
    level(5, Shape::Square),
    level(6, Shape::Square),
    level(6, Shape::Square),
    level(6, Shape::Square),
    level(6, Shape::Square),
    level(6, Shape::Square),
    level(7, Shape::Square),
    level(7, Shape::Square),
    level(7, Shape::Square),
    level(7, Shape::Square),
    level(7, Shape::Square),
    level(8, Shape::Square),
    level(8, Shape::Square),
    level(8, Shape::Square),
    level(8, Shape::Square),
    level(8, Shape::Square),
    // shapes
    level(6, Shape::L),
    level(6, Shape::T),
    level(6, Shape::Plus),
    level(6, Shape::Triangle),
    level(6, Shape::Hexagon),
    // fixed squares
    level(6, Shape::Square).with_fixed_squares(),
    level(7, Shape::Square).with_fixed_squares(),
    // diagonal toggle
    level(6, Shape::Square).with_diagonal_toggle(),
    level(7, Shape::Square).with_diagonal_toggle(),
    // combinations
    level(7, Shape::L).with_fixed_squares(),
    level(7, Shape::T).with_diagonal_toggle(),
    level(8, Shape::Plus)
        .with_fixed_squares()
        .with_diagonal_toggle(),
];

pub const STANDARD_MAX_GRID_SIZE: Coord = 8;

/// Finite list of levels that repeats forever with growing grids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    levels: Vec<LevelConfig>,
    max_grid_size: Coord,
}

impl Catalog {
    pub fn new(levels: Vec<LevelConfig>, max_grid_size: Coord) -> Result<Self> {
        let catalog = Self {
            levels,
            max_grid_size,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn standard() -> Self {
        Self {
            levels: STANDARD_LEVELS.to_vec(),
            max_grid_size: STANDARD_MAX_GRID_SIZE,
        }
    }

    /// Parses `{"levels": [...], "max_grid_size": n}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|err| GameError::MalformedCatalog(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        if self.max_grid_size == 0 || self.levels.iter().any(|level| level.grid_size == 0) {
            return Err(GameError::InvalidGridSize);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    pub fn max_grid_size(&self) -> Coord {
        self.max_grid_size
    }

    /// Concrete rules for `index`, cycling through the catalog and growing the
    /// grid by one for every full lap, up to `max_grid_size`.
    pub fn resolve(&self, index: LevelIndex) -> Result<LevelConfig> {
        if index == 0 {
            return Err(GameError::InvalidLevelIndex);
        }
        let len = u32::try_from(self.levels.len()).map_err(|_| GameError::EmptyCatalog)?;
        if len == 0 {
            return Err(GameError::EmptyCatalog);
        }

        let offset = index - 1;
        let base = self.levels[(offset % len) as usize];
        if index <= len {
            return Ok(base);
        }

        let growth = offset / len;
        let grid_size = u32::from(base.grid_size)
            .saturating_add(growth)
            .min(u32::from(self.max_grid_size));
        Ok(LevelConfig {
            // bounded by max_grid_size above
            grid_size: grid_size as Coord,
            ..base
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolves `index` against the standard catalog.
pub fn resolve_level(index: LevelIndex) -> Result<LevelConfig> {
    Catalog::standard().resolve(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn level_zero_is_rejected() {
        assert_eq!(resolve_level(0), Err(GameError::InvalidLevelIndex));
    }

    #[test]
    fn catalog_levels_are_returned_unchanged() {
        for (i, expected) in STANDARD_LEVELS.iter().enumerate() {
            let index = LevelIndex::try_from(i + 1).unwrap();
            assert_eq!(resolve_level(index).unwrap(), *expected);
        }
    }

    #[test]
    fn second_lap_grows_grid_by_one() {
        // level 33 reuses level 1 (3x3 square) one lap later
        let config = resolve_level(33).unwrap();
        assert_eq!(config, level(4, Shape::Square));

        // level 53 reuses level 21 (6x6 L)
        let config = resolve_level(53).unwrap();
        assert_eq!(config.shape, Shape::L);
        assert_eq!(config.grid_size, 7);
    }

    #[test]
    fn growth_is_capped() {
        let config = resolve_level(32 * 40 + 1).unwrap();
        assert_eq!(config.grid_size, STANDARD_MAX_GRID_SIZE);

        // level 64 is the 8x8 plus with both flags, already at the cap
        let config = resolve_level(64).unwrap();
        assert_eq!(config.grid_size, 8);
        assert!(config.has_fixed_squares);
        assert!(config.has_diagonal_toggle);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(vec![], 8), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn zero_grid_size_is_rejected() {
        let levels = vec![level(0, Shape::Square)];
        assert_eq!(Catalog::new(levels, 8), Err(GameError::InvalidGridSize));
        assert_eq!(LevelConfig::new(0, Shape::Plus), Err(GameError::InvalidGridSize));
    }

    #[test]
    fn catalog_loads_from_json() {
        let json = r#"{
            "levels": [
                { "grid_size": 3 },
                { "grid_size": 5, "shape": "hexagon", "has_diagonal_toggle": true }
            ],
            "max_grid_size": 6
        }"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve(1).unwrap(), level(3, Shape::Square));
        let fourth = catalog.resolve(4).unwrap();
        assert_eq!(fourth.shape, Shape::Hexagon);
        assert_eq!(fourth.grid_size, 6);
        assert!(fourth.has_diagonal_toggle);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            Catalog::from_json("{ \"levels\": 3 }"),
            Err(GameError::MalformedCatalog(_))
        ));
        assert_eq!(
            Catalog::from_json(r#"{ "levels": [], "max_grid_size": 8 }"#),
            Err(GameError::EmptyCatalog)
        );
    }
}
