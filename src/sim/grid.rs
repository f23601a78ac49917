//! Grid cells and movement directions

use glam::IVec2;

/// A grid cell: `x` is the column, `y` is the row (row 0 at the top)
pub type Cell = IVec2;

/// Whether `cell` lies inside a `cols` x `rows` grid
#[inline]
pub fn in_bounds(cell: Cell, cols: i32, rows: i32) -> bool {
    (0..cols).contains(&cell.x) && (0..rows).contains(&cell.y)
}

/// Iterate every cell of a `cols` x `rows` grid, column-major
pub fn all_cells(cols: i32, rows: i32) -> impl Iterator<Item = Cell> {
    (0..cols.max(0)).flat_map(move |c| (0..rows.max(0)).map(move |r| Cell::new(c, r)))
}

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on the grid
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Decide what a turn request does given the direction currently travelled.
    ///
    /// Returns the direction to buffer, or `None` when the request would
    /// reverse the snake into its own neck.
    #[inline]
    pub fn resolve_request(current: Direction, requested: Direction) -> Option<Direction> {
        if requested == current.opposite() {
            None
        } else {
            Some(requested)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for d in Direction::ALL {
            assert_eq!(d.delta() + d.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_resolve_request_rejects_reversal() {
        assert_eq!(
            Direction::resolve_request(Direction::Right, Direction::Left),
            None
        );
        assert_eq!(
            Direction::resolve_request(Direction::Right, Direction::Up),
            Some(Direction::Up)
        );
        // Re-requesting the current direction is allowed
        assert_eq!(
            Direction::resolve_request(Direction::Down, Direction::Down),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(in_bounds(Cell::new(0, 0), 32, 32));
        assert!(in_bounds(Cell::new(31, 31), 32, 32));
        assert!(!in_bounds(Cell::new(-1, 16), 32, 32));
        assert!(!in_bounds(Cell::new(16, 32), 32, 32));
    }

    #[test]
    fn test_all_cells_covers_grid() {
        let cells: Vec<Cell> = all_cells(4, 3).collect();
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|&c| in_bounds(c, 4, 3)));
    }
}
