use core::fmt;

/// Single coordinate axis used for grid sizes and positions.
pub type Coord = u8;

/// Count type used for lit/active/fixed cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// One-based level number.
pub type LevelIndex = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Self plus the four orthogonal neighbours.
const ORTHOGONAL: [(i8, i8); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// In-bounds positions of the toggle set around `center`, the center itself first.
///
/// Does not look at cell state; callers filter inactive and fixed cells.
#[derive(Debug, Clone)]
pub struct ToggleSetIter {
    center: Coord2,
    size: Coord,
    diagonal: bool,
    index: u8,
}

impl ToggleSetIter {
    pub fn new(center: Coord2, size: Coord, diagonal: bool) -> Self {
        Self {
            center,
            size,
            diagonal,
            index: 0,
        }
    }

    fn displacement(&self, index: usize) -> Option<(i8, i8)> {
        if index < ORTHOGONAL.len() {
            Some(ORTHOGONAL[index])
        } else if self.diagonal {
            DIAGONAL.get(index - ORTHOGONAL.len()).copied()
        } else {
            None
        }
    }
}

impl Iterator for ToggleSetIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = self.displacement(usize::from(self.index))?;
            self.index += 1;

            if let Some(pos) = apply_delta(self.center, delta, self.size) {
                return Some(pos);
            }
        }
    }
}

/// Elapsed play time in whole seconds, displayed as `m:ss`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(pub u32);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}
