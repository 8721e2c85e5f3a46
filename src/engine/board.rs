use super::cell::{Bounds, Cell};
use super::direction::Direction;
use super::levels::level_for_score;
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use std::fmt;

/// The state of the playing field: everything that a single step reads and
/// writes
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(super) bounds: Bounds,
    pub(super) snake: Snake,

    /// The direction that the player most recently asked for.  It is only
    /// applied (or rejected) when the next step runs.
    pub(super) queued: Direction,

    pub(super) food: Cell,
    pub(super) score: u32,
    pub(super) level: u32,
}

impl Board {
    /// Create a board with a fresh snake in the center heading right, fresh
    /// food, no score, and level 1
    pub(super) fn new<R: Rng>(bounds: Bounds, rng: &mut R) -> Board {
        let snake = Snake::new(bounds.center(), Direction::Right, bounds);
        let food = spawn_food(rng, bounds, &snake);
        Board {
            bounds,
            snake,
            queued: Direction::Right,
            food,
            score: 0,
            level: 1,
        }
    }

    pub(super) fn queue(&mut self, direction: Direction) {
        self.queued = direction;
    }

    /// Advance the snake by one cell.
    ///
    /// On a collision, nothing but the snake's facing is changed so that the
    /// board shows the state the game ended in.
    pub(super) fn step<R: Rng>(&mut self, rng: &mut R) -> Step {
        let current = self.snake.direction();
        let direction = if self.queued.is_opposite(current) {
            current
        } else {
            self.queued
        };
        self.queued = direction;
        self.snake.turn(direction);
        let Some(head) = direction.advance(self.snake.head(), self.bounds) else {
            return Step::Collided(Collision::Wall);
        };
        if self.snake.contains(head) {
            return Step::Collided(Collision::Snake);
        }
        self.snake.push_head(head);
        if head == self.food {
            self.score = self.score.saturating_add(consts::FOOD_SCORE);
            self.food = spawn_food(rng, self.bounds, &self.snake);
            let level = level_for_score(self.score);
            let level_up = level != self.level;
            self.level = level;
            Step::Ate { level_up }
        } else {
            self.snake.pop_tail();
            Step::Moved
        }
    }
}

/// What happened during a single step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The snake moved without eating anything
    Moved,

    /// The snake ate the food and grew by one cell.  `level_up` is true if
    /// the new score put the game on a new level.
    Ate { level_up: bool },

    /// The snake ran into something; the game is over.
    Collided(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The edge of the board
    Wall,

    /// Its own body
    Snake,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "hit the wall"),
            Collision::Snake => write!(f, "bit itself"),
        }
    }
}

/// Pick a random cell for the food that is (usually) not on the snake.
///
/// Cells are drawn uniformly from the whole board and rejected if the snake
/// is on them.  After [`FOOD_PLACEMENT_ATTEMPTS`][consts::FOOD_PLACEMENT_ATTEMPTS]
/// draws, the last one is used whether it's free or not, so on a nearly full
/// board the food can end up under the snake.
pub(crate) fn spawn_food<R: Rng>(rng: &mut R, bounds: Bounds, snake: &Snake) -> Cell {
    let mut cell = bounds.random_cell(rng);
    for _ in 1..consts::FOOD_PLACEMENT_ATTEMPTS {
        if !snake.contains(cell) {
            return cell;
        }
        cell = bounds.random_cell(rng);
    }
    if snake.contains(cell) {
        log::warn!(
            "No free cell found for food after {} attempts; placing it on the snake at {cell}",
            consts::FOOD_PLACEMENT_ATTEMPTS
        );
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::levels::tick_period;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(RNG_SEED)
    }

    fn board(snake: Snake, food: Cell) -> Board {
        Board {
            bounds: Bounds::new(16, 20),
            queued: snake.direction(),
            snake,
            food,
            score: 0,
            level: 1,
        }
    }

    fn cells(board: &Board) -> Vec<Cell> {
        board.snake.cells().collect()
    }

    #[test]
    fn new_board() {
        let board = Board::new(Bounds::new(16, 20), &mut rng());
        assert_eq!(cells(&board), [Cell::new(8, 10), Cell::new(8, 9)]);
        assert_eq!(board.snake.direction(), Direction::Right);
        assert_eq!(board.queued, Direction::Right);
        assert_eq!(board.score, 0);
        assert_eq!(board.level, 1);
        assert!(board.bounds.contains(board.food));
        assert!(!board.snake.contains(board.food));
    }

    #[test]
    fn move_right_from_start() {
        let mut board = Board::new(Bounds::new(16, 20), &mut rng());
        board.food = Cell::new(0, 0);
        board.queue(Direction::Right);
        assert_eq!(board.step(&mut rng()), Step::Moved);
        assert_eq!(cells(&board), [Cell::new(8, 11), Cell::new(8, 10)]);
        assert_eq!(board.score, 0);
    }

    #[test]
    fn wall_collision() {
        let mut board = board(
            Snake::from_cells([Cell::new(0, 5), Cell::new(1, 5)], Direction::Up),
            Cell::new(10, 10),
        );
        board.queue(Direction::Up);
        assert_eq!(board.step(&mut rng()), Step::Collided(Collision::Wall));
        assert_eq!(cells(&board), [Cell::new(0, 5), Cell::new(1, 5)]);
    }

    #[rstest]
    #[case(Cell::new(4, 0), Direction::Left)]
    #[case(Cell::new(4, 19), Direction::Right)]
    #[case(Cell::new(15, 4), Direction::Down)]
    #[case(Cell::new(0, 4), Direction::Up)]
    fn every_wall_is_solid(#[case] head: Cell, #[case] direction: Direction) {
        let mut board = board(Snake::from_cells([head], direction), Cell::new(7, 7));
        assert_eq!(board.step(&mut rng()), Step::Collided(Collision::Wall));
    }

    #[test]
    fn self_collision() {
        let mut board = board(
            Snake::from_cells(
                [
                    Cell::new(5, 5),
                    Cell::new(5, 6),
                    Cell::new(6, 6),
                    Cell::new(6, 5),
                    Cell::new(6, 4),
                ],
                Direction::Left,
            ),
            Cell::new(10, 10),
        );
        board.queue(Direction::Down);
        assert_eq!(board.step(&mut rng()), Step::Collided(Collision::Snake));
        assert_eq!(board.snake.head(), Cell::new(5, 5));
        assert_eq!(board.snake.direction(), Direction::Down);
    }

    #[test]
    fn tail_counts_as_obstacle() {
        // A 2x2 loop: the head would move onto the cell the tail is about to
        // leave, which still ends the game.
        let mut board = board(
            Snake::from_cells(
                [
                    Cell::new(5, 5),
                    Cell::new(5, 6),
                    Cell::new(6, 6),
                    Cell::new(6, 5),
                ],
                Direction::Left,
            ),
            Cell::new(10, 10),
        );
        board.queue(Direction::Down);
        assert_eq!(board.step(&mut rng()), Step::Collided(Collision::Snake));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut board = board(
            Snake::from_cells(
                [Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)],
                Direction::Left,
            ),
            Cell::new(10, 10),
        );
        board.queue(Direction::Right);
        assert_eq!(board.step(&mut rng()), Step::Moved);
        assert_eq!(board.snake.direction(), Direction::Left);
        assert_eq!(board.queued, Direction::Left);
        assert_eq!(
            cells(&board),
            [Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)]
        );
    }

    #[test]
    fn rejected_reversal_is_not_retried() {
        let mut board = board(
            Snake::from_cells([Cell::new(5, 5), Cell::new(5, 4)], Direction::Right),
            Cell::new(10, 10),
        );
        board.queue(Direction::Left);
        assert_eq!(board.step(&mut rng()), Step::Moved);
        board.queue(Direction::Up);
        assert_eq!(board.step(&mut rng()), Step::Moved);
        assert_eq!(board.snake.direction(), Direction::Up);
        // Now that travel is upwards, nothing should bring back the old
        // "left" request.
        assert_eq!(board.step(&mut rng()), Step::Moved);
        assert_eq!(board.snake.head(), Cell::new(3, 6));
    }

    #[test]
    fn last_queued_direction_wins() {
        let mut board = board(
            Snake::from_cells([Cell::new(5, 5), Cell::new(5, 4)], Direction::Right),
            Cell::new(10, 10),
        );
        board.queue(Direction::Up);
        board.queue(Direction::Down);
        assert_eq!(board.step(&mut rng()), Step::Moved);
        assert_eq!(board.snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn eat_food() {
        let mut board = board(
            Snake::from_cells([Cell::new(5, 5), Cell::new(5, 4)], Direction::Right),
            Cell::new(5, 6),
        );
        assert_eq!(board.step(&mut rng()), Step::Ate { level_up: false });
        assert_eq!(
            cells(&board),
            [Cell::new(5, 6), Cell::new(5, 5), Cell::new(5, 4)]
        );
        assert_eq!(board.score, 10);
        assert_eq!(board.level, 1);
        assert!(!board.snake.contains(board.food));
    }

    #[test]
    fn level_up_on_fifty() {
        let mut board = board(
            Snake::from_cells([Cell::new(5, 5), Cell::new(5, 4)], Direction::Right),
            Cell::new(5, 6),
        );
        board.score = 40;
        assert_eq!(board.step(&mut rng()), Step::Ate { level_up: true });
        assert_eq!(board.score, 50);
        assert_eq!(board.level, 2);
        assert_eq!(tick_period(board.level), Duration::from_millis(205));
    }

    #[test]
    fn random_walk_invariants() {
        let mut rng = rng();
        let mut board = Board::new(Bounds::new(16, 20), &mut rng);
        let turns = [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];
        for i in 0..2000 {
            let before_len = board.snake.cells().count();
            let before_score = board.score;
            board.queue(turns[(i / 3) % turns.len()]);
            let step = board.step(&mut rng);
            match step {
                Step::Moved => {
                    assert_eq!(board.snake.cells().count(), before_len);
                    assert_eq!(board.score, before_score);
                }
                Step::Ate { .. } => {
                    assert_eq!(board.snake.cells().count(), before_len + 1);
                    assert_eq!(board.score, before_score + 10);
                }
                Step::Collided(_) => break,
            }
            assert_eq!(board.level, level_for_score(board.score));
            assert!(board.snake.cells().all(|c| board.bounds.contains(c)));
            let mut seen = HashSet::new();
            assert!(board.snake.cells().all(|c| seen.insert(c)));
        }
    }

    #[test]
    fn food_avoids_snake() {
        let snake = Snake::from_cells(
            (0..4).flat_map(|row| (0..4).map(move |col| Cell::new(row, col))),
            Direction::Right,
        );
        let bounds = Bounds::new(4, 5);
        let mut rng = rng();
        for _ in 0..50 {
            let food = spawn_food(&mut rng, bounds, &snake);
            assert_eq!(food.col, 4);
        }
    }

    #[test]
    fn food_on_full_board_falls_back() {
        let bounds = Bounds::new(2, 2);
        let snake = Snake::from_cells(
            [
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 0),
            ],
            Direction::Up,
        );
        let food = spawn_food(&mut rng(), bounds, &snake);
        assert!(bounds.contains(food));
        assert!(snake.contains(food));
    }
}
