use serde::{Deserialize, Serialize};

/// One board position as seen by the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub is_on: bool,
    pub is_fixed: bool,
    pub is_active: bool,
}

impl Cell {
    pub const fn inactive() -> Self {
        Self {
            is_on: false,
            is_fixed: false,
            is_active: false,
        }
    }

    pub const fn dark() -> Self {
        Self {
            is_on: false,
            is_fixed: false,
            is_active: true,
        }
    }

    pub const fn lit() -> Self {
        Self {
            is_on: true,
            is_fixed: false,
            is_active: true,
        }
    }

    /// Whether a press may change this cell.
    pub const fn is_toggleable(self) -> bool {
        self.is_active && !self.is_fixed
    }

    /// Whether this cell counts towards the lights left on the board.
    pub const fn counts_as_lit(self) -> bool {
        self.is_toggleable() && self.is_on
    }
}
