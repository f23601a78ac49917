//! Target (food) placement

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::{Cell, all_cells};

/// Used when every cell is occupied and there is nowhere to spawn
pub const FALLBACK_CELL: Cell = Cell::ZERO;

/// Pick a free cell uniformly at random.
///
/// Returns [`FALLBACK_CELL`] when `occupied` covers the whole grid.
pub fn spawn_target<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: impl IntoIterator<Item = Cell>,
    cols: i32,
    rows: i32,
) -> Cell {
    let occupied: HashSet<Cell> = occupied.into_iter().collect();
    let free: Vec<Cell> = all_cells(cols, rows)
        .filter(|cell| !occupied.contains(cell))
        .collect();

    match free.choose(rng) {
        Some(&cell) => cell,
        None => {
            log::debug!("No free cell for target on {cols}x{rows} grid, using fallback");
            FALLBACK_CELL
        }
    }
}
