use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::worm::Worm;

/// Picks a free cell for the next food item by rejection sampling.
///
/// Samples uniformly from the whole board and retries while the worm covers
/// the sample. Terminates with probability 1 while at least one free cell
/// exists; a worm that fills the board makes this loop spin forever.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, grid: Grid, worm: &Worm) -> Cell {
    debug_assert!(
        worm.len() < grid.total_cells(),
        "spawn_food: no free cells on the board ({0}×{0})",
        grid.extent(),
    );

    loop {
        let cell = grid.random_cell(rng);
        if !worm.occupies(cell) {
            return cell;
        }
    }
}
