use rand::Rng;

use crate::input::Direction;

/// Board coordinate in logical cell units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// The result may lie outside the board; bounds are the caller's concern.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square board of `extent` × `extent` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    extent: u16,
}

impl Grid {
    #[must_use]
    pub fn new(extent: u16) -> Self {
        debug_assert!(extent > 0);
        Self { extent }
    }

    /// Cells per side.
    #[must_use]
    pub fn extent(self) -> u16 {
        self.extent
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.extent) * usize::from(self.extent)
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        let extent = i32::from(self.extent);
        (0..extent).contains(&cell.x) && (0..extent).contains(&cell.y)
    }

    /// Returns the centre cell (rounded towards the bottom-right).
    #[must_use]
    pub fn center(self) -> Cell {
        let half = i32::from(self.extent / 2);
        Cell::new(half, half)
    }

    /// Picks a cell uniformly at random from the whole board.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let extent = i32::from(self.extent);
        Cell::new(rng.gen_range(0..extent), rng.gen_range(0..extent))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Cell, Grid};
    use crate::input::Direction;

    #[test]
    fn in_bounds_accepts_every_edge_cell() {
        let grid = Grid::new(20);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(19, 0)));
        assert!(grid.in_bounds(Cell::new(0, 19)));
        assert!(grid.in_bounds(Cell::new(19, 19)));
    }

    #[test]
    fn in_bounds_rejects_cells_past_each_wall() {
        let grid = Grid::new(20);

        assert!(!grid.in_bounds(Cell::new(-1, 10)));
        assert!(!grid.in_bounds(Cell::new(20, 10)));
        assert!(!grid.in_bounds(Cell::new(10, -1)));
        assert!(!grid.in_bounds(Cell::new(10, 20)));
    }

    #[test]
    fn random_cell_stays_on_board_and_covers_it() {
        let grid = Grid::new(3);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.in_bounds(cell));
            seen.insert(cell);
        }

        assert_eq!(seen.len(), grid.total_cells());
    }

    #[test]
    fn step_moves_one_cell_along_direction() {
        let origin = Cell::new(5, 5);

        assert_eq!(origin.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn center_of_default_board_is_ten_ten() {
        assert_eq!(Grid::new(20).center(), Cell::new(10, 10));
    }
}
