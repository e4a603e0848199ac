use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::Direction;

/// Ordered worm body, head first.
///
/// The worm never decides on its own when to grow: the engine calls
/// [`Worm::grow_head`] once per tick and [`Worm::drop_tail`] only when no
/// food was eaten.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Worm {
    body: VecDeque<Cell>,
}

impl Worm {
    /// Creates a straight worm with its head at `head`, trailing `length - 1`
    /// segments behind it opposite to `heading`.
    #[must_use]
    pub fn straight(head: Cell, heading: Direction, length: usize) -> Self {
        debug_assert!(length > 0);

        let behind = heading.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.step(behind);
        }

        Self { body }
    }

    /// Creates a worm from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // The body is never empty after construction.
        self.body[0]
    }

    /// Returns where the head would land moving one step in `direction`.
    ///
    /// Does not mutate; the engine decides whether to commit the move.
    #[must_use]
    pub fn advance(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepends a new head segment.
    pub fn grow_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Removes the last segment, keeping at least the head.
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
