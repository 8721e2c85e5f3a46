use rand::Rng;
use std::fmt;

/// A square on the board, addressed by row and column from the top-left
/// corner
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) row: u16,
    pub(crate) col: u16,
}

impl Cell {
    pub(crate) const fn new(row: u16, col: u16) -> Cell {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The dimensions of the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) rows: u16,
    pub(crate) cols: u16,
}

impl Bounds {
    pub(crate) const fn new(rows: u16, cols: u16) -> Bounds {
        Bounds { rows, cols }
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The cell at which a new snake's head is placed
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    /// Draw a cell uniformly at random from the whole board
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        Cell::new(rng.random_range(0..self.rows), rng.random_range(0..self.cols))
    }
}
