use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

const CORNERS_3: [Coord2; 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];
const DIAGONAL_4: [Coord2; 4] = [(0, 0), (1, 1), (2, 2), (3, 3)];
const FIVE_POINT_5: [Coord2; 5] = [(0, 0), (0, 4), (2, 2), (4, 0), (4, 4)];

/// Most lights a larger board starts with.
const SPARSE_LIGHTS: CellCount = 2;

pub(super) fn curated<R: RandomSource>(board: &mut Board, rng: &mut R) {
    let pattern: &[Coord2] = match board.size() {
        3 => &CORNERS_3,
        4 => &DIAGONAL_4,
        5 => &FIVE_POINT_5,
        _ => return sparse(board, rng),
    };
    let mut lit = 0;
    for &coords in pattern {
        // patterns are authored for full squares, shaped boards drop what falls outside
        if board.set_on(coords, true) {
            lit += 1;
        }
    }

    if lit < 2 {
        for &coords in pattern {
            board.set_on(coords, false);
        }
        sparse(board, rng);
    }
}

/// Lights `min(2, active / 4)` distinct active cells.
fn sparse<R: RandomSource>(board: &mut Board, rng: &mut R) {
    let mut candidates: Vec<Coord2> = board
        .iter()
        .filter(|(_, cell)| cell.is_active)
        .map(|(coords, _)| coords)
        .collect();
    let target = SPARSE_LIGHTS.min(board.active_count() / 4);

    for _ in 0..target {
        if candidates.is_empty() {
            break;
        }
        // candidate count is bounded by the cell count
        let place = rng.pick(candidates.len() as CellCount);
        let coords = candidates.swap_remove(usize::from(place));
        board.set_on(coords, true);
    }
}

/// Presses each eligible cell of `board` with probability `press_percent`.
pub(super) fn scrambled<R: RandomSource>(
    board: &mut Board,
    config: &LevelConfig,
    press_percent: u8,
    rng: &mut R,
) {
    let dim = (board.size(), board.size()).to_nd_index();
    let mut presses: Array2<bool> = Array2::default(dim);
    for (coords, cell) in board.iter() {
        if cell.is_toggleable() {
            presses[coords.to_nd_index()] = rng.percent_chance(press_percent);
        }
    }
    log::debug!(
        "Scrambling with {} presses",
        presses.iter().filter(|&&pressed| pressed).count()
    );
    board.apply_presses(&presses, config.has_diagonal_toggle);
}
