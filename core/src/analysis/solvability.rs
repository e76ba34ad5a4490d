use serde::{Deserialize, Serialize};

use crate::*;

/// Which rule of the heuristic decided a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plausibility {
    /// Fewer than two cells can be toggled.
    Trivial,
    /// More than 80% of the toggleable cells are lit.
    TooLit,
    /// Two or fewer lights.
    FewLights,
    /// At most 60% lit.
    WithinRatio,
    /// Between 60% and 80% lit.
    OverRatio,
}

impl Plausibility {
    pub const fn is_plausible(self) -> bool {
        !matches!(self, Self::TooLit | Self::OverRatio)
    }
}

/// Applies the lit-ratio rules in order over the active, non-fixed cells.
pub fn assess(board: &Board) -> Plausibility {
    let active = u32::from(board.toggleable_count());
    let lit = u32::from(board.lit_count());

    if active < 2 {
        Plausibility::Trivial
    } else if lit * 5 > active * 4 {
        Plausibility::TooLit
    } else if lit <= 2 {
        Plausibility::FewLights
    } else if lit * 5 <= active * 3 {
        Plausibility::WithinRatio
    } else {
        Plausibility::OverRatio
    }
}

/// Cheap filter used while generating boards.
///
/// Judges only the ratio of lit cells; it says nothing about whether a
/// sequence of presses actually clears the board.
pub fn is_plausibly_solvable(board: &Board) -> bool {
    assess(board).is_plausible()
}
