//! The player-controlled snake
//!
//! Movement is buffered: a turn request is stored as the pending direction and
//! only applied on the next `step`. Collision is queried after stepping.

use std::collections::VecDeque;

use super::grid::{Cell, Direction, in_bounds};

/// The snake: body cells head-first, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    /// Direction applied on the last step
    current: Direction,
    /// Direction the next step will use
    pending: Direction,
    /// Set by `grow`, consumed by the next `step`
    grow_pending: bool,
}

impl Snake {
    /// Straight snake with its head at `head`, body trailing away from `direction`
    pub fn new(head: Cell, length: usize, direction: Direction) -> Self {
        let back = direction.opposite().delta();
        let body = (0..length.max(1) as i32).map(|i| head + back * i).collect();
        Self {
            body,
            current: direction,
            pending: direction,
            grow_pending: false,
        }
    }

    /// Starting snake for a session: centered, moving right
    pub fn starting(cols: i32, rows: i32, length: usize) -> Self {
        Self::new(Cell::new(cols / 2, rows / 2), length, Direction::Right)
    }

    /// Snake from explicit cells (head first). `None` if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            current: direction,
            pending: direction,
            grow_pending: false,
        })
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Body cells, head first
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: the body is never empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn current_direction(&self) -> Direction {
        self.current
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Buffer a turn for the next step. Reversals are silently dropped.
    pub fn change_direction(&mut self, requested: Direction) {
        if let Some(dir) = Direction::resolve_request(self.current, requested) {
            self.pending = dir;
        }
    }

    /// Grow by one segment on the next step
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Advance exactly one cell in the pending direction
    pub fn step(&mut self) {
        self.current = self.pending;
        let new_head = self.head() + self.current.delta();
        self.body.push_front(new_head);
        if !self.grow_pending {
            self.body.pop_back();
        }
        self.grow_pending = false;
    }

    /// Head has left the grid
    pub fn is_wall_collision(&self, cols: i32, rows: i32) -> bool {
        !in_bounds(self.head(), cols, rows)
    }

    /// Head overlaps another body cell.
    ///
    /// Evaluated on the post-step body, so the cell the tail vacated this tick
    /// does not count.
    pub fn is_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(pairs: &[(i32, i32)]) -> Vec<Cell> {
        pairs.iter().map(|&(c, r)| Cell::new(c, r)).collect()
    }

    #[test]
    fn test_starting_layout() {
        let snake = Snake::starting(32, 32, 3);
        let body: Vec<Cell> = snake.body().iter().copied().collect();
        assert_eq!(body, cells(&[(16, 16), (15, 16), (14, 16)]));
        assert_eq!(snake.current_direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_step_keeps_length() {
        let mut snake = Snake::starting(32, 32, 3);
        snake.step();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(17, 16));
        assert!(!snake.occupies(Cell::new(14, 16)));
    }

    #[test]
    fn test_grow_adds_exactly_one_segment() {
        let mut snake = Snake::starting(32, 32, 3);
        snake.grow();
        snake.step();
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growing());
        snake.step();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reversal_request_is_dropped() {
        let mut snake = Snake::starting(32, 32, 3);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Right);
        snake.step();
        assert_eq!(snake.head(), Cell::new(17, 16));
        assert!(!snake.is_self_collision());
    }

    #[test]
    fn test_reversal_checked_against_current_not_pending() {
        // Up is buffered, but the snake still travels Right until it steps,
        // so Left remains a reversal.
        let mut snake = Snake::starting(32, 32, 3);
        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Up);
        snake.step();
        assert_eq!(snake.current_direction(), Direction::Up);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Left);
    }

    #[test]
    fn test_wall_collision() {
        let mut snake = Snake::new(Cell::new(0, 16), 3, Direction::Left);
        assert!(!snake.is_wall_collision(32, 32));
        snake.step();
        assert_eq!(snake.head(), Cell::new(-1, 16));
        assert!(snake.is_wall_collision(32, 32));
    }

    #[test]
    fn test_self_collision() {
        // Head at (2,1) moving Down into (2,2), which is still body after the step
        let body = cells(&[(2, 1), (1, 1), (1, 2), (2, 2), (3, 2), (3, 3)]);
        let mut snake = Snake::from_cells(body, Direction::Right).unwrap();
        snake.change_direction(Direction::Down);
        snake.step();
        assert!(snake.is_self_collision());
    }

    #[test]
    fn test_chasing_own_tail_is_not_a_collision() {
        // 2x2 loop: the head moves into the cell the tail vacates this tick
        let body = cells(&[(1, 0), (1, 1), (0, 1), (0, 0)]);
        let mut snake = Snake::from_cells(body, Direction::Up).unwrap();
        snake.change_direction(Direction::Left);
        snake.step();
        assert_eq!(snake.head(), Cell::new(0, 0));
        assert!(!snake.is_self_collision());
    }

    #[test]
    fn test_chasing_own_tail_while_growing_collides() {
        let body = cells(&[(1, 0), (1, 1), (0, 1), (0, 0)]);
        let mut snake = Snake::from_cells(body, Direction::Up).unwrap();
        snake.change_direction(Direction::Left);
        snake.grow();
        snake.step();
        assert!(snake.is_self_collision());
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new(), Direction::Up).is_none());
    }
}
