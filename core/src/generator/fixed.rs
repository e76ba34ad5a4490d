use crate::*;

/// Fixes up to `min(max_fixed_cells, active * fixed_cell_percent / 100)` random
/// active cells, giving up after `fixed_cell_attempts` samples. Never more than
/// [`MAX_FIXED_CELLS`], whatever the settings say.
pub(super) fn place<R: RandomSource>(
    board: &mut Board,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> CellCount {
    let share = u32::from(board.active_count()) * u32::from(settings.fixed_cell_percent) / 100;
    let cap = settings.max_fixed_cells.min(MAX_FIXED_CELLS);
    let target = share.min(u32::from(cap));
    let size = CellCount::from(board.size());

    let mut placed = 0;
    for _ in 0..settings.fixed_cell_attempts {
        if placed >= target {
            break;
        }
        // values below size fit in Coord
        let coords = (rng.pick(size) as Coord, rng.pick(size) as Coord);
        if board.fix(coords) {
            placed += 1;
        }
    }

    if placed < target {
        log::warn!(
            "Placed only {} of {} fixed cells after {} attempts",
            placed,
            target,
            settings.fixed_cell_attempts
        );
    }
    // bounded by max_fixed_cells
    placed as CellCount
}
