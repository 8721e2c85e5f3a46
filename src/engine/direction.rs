use super::cell::{Bounds, Cell};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction, or `None` if
    /// that step would leave the board.
    pub(crate) fn advance(self, cell: Cell, bounds: Bounds) -> Option<Cell> {
        let Cell { row, col } = cell;
        let next = match self {
            Direction::Up => Cell::new(row.checked_sub(1)?, col),
            Direction::Down => Cell::new(row.checked_add(1)?, col),
            Direction::Left => Cell::new(row, col.checked_sub(1)?),
            Direction::Right => Cell::new(row, col.checked_add(1)?),
        };
        bounds.contains(next).then_some(next)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BOUNDS: Bounds = Bounds::new(15, 10);

    #[rstest]
    #[case(Direction::Up, Cell::new(7, 2), Some(Cell::new(6, 2)))]
    #[case(Direction::Down, Cell::new(7, 2), Some(Cell::new(8, 2)))]
    #[case(Direction::Left, Cell::new(7, 2), Some(Cell::new(7, 1)))]
    #[case(Direction::Right, Cell::new(7, 2), Some(Cell::new(7, 3)))]
    #[case(Direction::Up, Cell::new(0, 2), None)]
    #[case(Direction::Down, Cell::new(14, 2), None)]
    #[case(Direction::Left, Cell::new(7, 0), None)]
    #[case(Direction::Right, Cell::new(7, 9), None)]
    #[case(Direction::Down, Cell::new(13, 9), Some(Cell::new(14, 9)))]
    #[case(Direction::Right, Cell::new(14, 8), Some(Cell::new(14, 9)))]
    fn test_advance(#[case] d: Direction, #[case] cell: Cell, #[case] r: Option<Cell>) {
        assert_eq!(d.advance(cell, BOUNDS), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down, true)]
    #[case(Direction::Down, Direction::Up, true)]
    #[case(Direction::Left, Direction::Right, true)]
    #[case(Direction::Right, Direction::Left, true)]
    #[case(Direction::Up, Direction::Up, false)]
    #[case(Direction::Up, Direction::Left, false)]
    #[case(Direction::Right, Direction::Down, false)]
    fn test_is_opposite(#[case] a: Direction, #[case] b: Direction, #[case] opposite: bool) {
        assert_eq!(a.is_opposite(b), opposite);
    }
}
