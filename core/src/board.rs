use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells, indexed by `(row, col)`.
///
/// Boards are values: toggling returns a new board and leaves the original
/// untouched, so before/after comparisons never alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Dark board with the activity mask of `config`'s shape.
    pub fn blank(config: &LevelConfig) -> Self {
        let mask = config.shape.mask(config.grid_size);
        Self {
            cells: mask.mapv(|active| if active { Cell::dark() } else { Cell::inactive() }),
        }
    }

    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        if let Some(((row, col), _)) = cells
            .indexed_iter()
            .find(|(_, cell)| cell.is_fixed && !cell.is_active)
        {
            return Err(GameError::FixedInactiveCell(row as Coord, col as Coord));
        }
        Ok(Self { cells })
    }

    /// Builds a board from rows of `#` (lit), `.` (dark), `F` (fixed and dark),
    /// `*` (fixed and lit) and ` ` (inactive), the same notation `Display` uses.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Array2::from_elem((size, size), Cell::inactive());
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != size {
                return Err(GameError::InvalidBoardShape);
            }
            for (col, ch) in line.chars().enumerate() {
                cells[(row, col)] = match ch {
                    '#' => Cell::lit(),
                    '.' => Cell::dark(),
                    'F' => Cell {
                        is_fixed: true,
                        ..Cell::dark()
                    },
                    '*' => Cell {
                        is_fixed: true,
                        ..Cell::lit()
                    },
                    ' ' => Cell::inactive(),
                    _ => return Err(GameError::InvalidBoardShape),
                };
            }
        }
        Self::from_cells(cells)
    }

    pub fn size(&self) -> Coord {
        // from_cells and blank keep the dimension within Coord
        self.cells.nrows() as Coord
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.size() && col < self.size()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn can_toggle_at(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(Cell::is_toggleable)
    }

    pub fn active_count(&self) -> CellCount {
        self.count(|cell| cell.is_active)
    }

    pub fn fixed_count(&self) -> CellCount {
        self.count(|cell| cell.is_fixed)
    }

    /// Active, non-fixed cells.
    pub fn toggleable_count(&self) -> CellCount {
        self.count(Cell::is_toggleable)
    }

    /// Lit cells that still need to be switched off.
    pub fn lit_count(&self) -> CellCount {
        self.count(Cell::counts_as_lit)
    }

    fn count(&self, pred: impl Fn(Cell) -> bool) -> CellCount {
        // at most Coord::MAX squared cells, which fits in CellCount
        self.cells.iter().filter(|&&cell| pred(cell)).count() as CellCount
    }

    /// Positions a press at `coords` would flip.
    ///
    /// Empty when the pressed cell itself is out of bounds, inactive or fixed.
    pub fn toggle_set(&self, coords: Coord2, diagonal: bool) -> impl Iterator<Item = Coord2> + '_ {
        let size = if self.can_toggle_at(coords) { self.size() } else { 0 };
        ToggleSetIter::new(coords, size, diagonal).filter(move |&pos| self.can_toggle_at(pos))
    }

    /// Copy of this board after pressing `coords`.
    pub fn toggled(&self, coords: Coord2, diagonal: bool) -> Self {
        let mut next = self.clone();
        next.press(coords, diagonal);
        next
    }

    /// Copy of this board after pressing every position in `presses`.
    ///
    /// Presses on ineligible cells are skipped the same way [`Board::toggled`]
    /// skips them.
    pub fn with_presses(&self, presses: &Array2<bool>, diagonal: bool) -> Self {
        let mut next = self.clone();
        next.apply_presses(presses, diagonal);
        next
    }

    /// In-place press; only used on boards this crate still owns exclusively.
    pub(crate) fn press(&mut self, coords: Coord2, diagonal: bool) -> CellCount {
        let mut flipped = 0;
        if !self.can_toggle_at(coords) {
            return flipped;
        }
        for pos in ToggleSetIter::new(coords, self.size(), diagonal) {
            let cell = &mut self.cells[pos.to_nd_index()];
            if cell.is_toggleable() {
                cell.is_on = !cell.is_on;
                flipped += 1;
            }
        }
        flipped
    }

    pub(crate) fn apply_presses(&mut self, presses: &Array2<bool>, diagonal: bool) {
        for ((row, col), &pressed) in presses.indexed_iter() {
            if pressed && row < usize::from(self.size()) && col < usize::from(self.size()) {
                self.press((row as Coord, col as Coord), diagonal);
            }
        }
    }

    pub(crate) fn set_on(&mut self, coords: Coord2, on: bool) -> bool {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) if cell.is_active => {
                cell.is_on = on;
                true
            }
            _ => false,
        }
    }

    /// Marks an active, not yet fixed cell as fixed; returns whether it changed.
    pub(crate) fn fix(&mut self, coords: Coord2) -> bool {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) if cell.is_toggleable() => {
                cell.is_fixed = true;
                true
            }
            _ => false,
        }
    }
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Toggle engine entry point: presses `coords` with the neighbourhood rule of
/// `config` and returns the resulting board.
pub fn toggle(board: &Board, coords: Coord2, config: &LevelConfig) -> Board {
    board.toggled(coords, config.has_diagonal_toggle)
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                let ch = match (cell.is_active, cell.is_fixed, cell.is_on) {
                    (false, _, _) => ' ',
                    (true, true, true) => '*',
                    (true, true, false) => 'F',
                    (true, false, true) => '#',
                    (true, false, false) => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
