use super::cell::{Bounds, Cell};
use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;

/// The snake: where it is and which way it's going.
///
/// The head is kept apart from the rest of the body so that it can be read
/// without unwrapping; the body is ordered from the cell just behind the head
/// to the tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    head: Cell,
    body: VecDeque<Cell>,

    /// The direction in which the snake is currently travelling
    direction: Direction,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing in `direction`, and
    /// with its body trailing straight back behind it for a total length of
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] (or less if the
    /// board edge gets in the way).
    pub(super) fn new(head: Cell, direction: Direction, bounds: Bounds) -> Snake {
        let behind = direction.reverse();
        let body = std::iter::successors(Some(head), |&c| behind.advance(c, bounds))
            .skip(1)
            .take(consts::INITIAL_SNAKE_LENGTH.saturating_sub(1))
            .collect();
        Snake {
            head,
            body,
            direction,
        }
    }

    /// Build a snake from an explicit list of cells, head first
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(
        cells: I,
        direction: Direction,
    ) -> Snake {
        let mut iter = cells.into_iter();
        let head = iter.next().expect("snake should have at least one cell");
        Snake {
            head,
            body: iter.collect(),
            direction,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Return the cells behind the head, nearest first
    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Iterate over every cell of the snake, head first
    #[cfg(test)]
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Make `cell` the new head, keeping the old head as the first body cell
    pub(super) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(self.head);
        self.head = cell;
    }

    pub(super) fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }
}
