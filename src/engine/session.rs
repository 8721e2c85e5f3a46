use super::board::{Board, Collision, Step};
use super::cell::{Bounds, Cell};
use super::direction::Direction;
use super::levels::tick_period;
use super::snake::Snake;
use crate::consts;
use enum_map::Enum;
use rand::Rng;
use std::time::Duration;

/// The two repeating timers that drive a game
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Timer {
    /// Fires once per snake movement; call [`Session::tick()`]
    Step,

    /// Fires once per second of play; call [`Session::count_second()`]
    Elapsed,
}

/// A timer facility supplied by whoever hosts a [`Session`]
pub(crate) trait Scheduler {
    /// Start `timer` firing every `period`, counting from now.  If `timer` is
    /// already running, its current period is abandoned.
    fn schedule(&mut self, timer: Timer, period: Duration);

    /// Stop `timer`.  A pending firing is dropped.  Cancelling a stopped timer
    /// does nothing.
    fn cancel(&mut self, timer: Timer);
}

/// Where a game is in its lifecycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    /// Freshly reset, waiting for a start command
    Idle,
    Running,
    Paused,
    /// The snake has collided with something.  The board is frozen until the
    /// next reset.
    Over,
}

/// The outcome of a [`Session::tick()`] call that actually moved the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    Moved,
    Ate { level_up: bool },
    Over(GameOver),
}

/// One-shot notification that a game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOver {
    pub(crate) score: u32,
    pub(crate) reason: Collision,
}

/// A game of Snake together with the clock that drives it.
///
/// All changes to the game go through the methods on this type.  The timers
/// are not owned here; instead, the session tells its [`Scheduler`] when to
/// start & stop them, and the host calls [`Session::tick()`] and
/// [`Session::count_second()`] when they fire.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<S, R> {
    rng: R,
    scheduler: S,
    board: Board,
    state: GameState,

    /// Seconds spent in the running state since the last reset
    elapsed: u32,
}

impl<S: Scheduler, R: Rng> Session<S, R> {
    pub(crate) fn new_with_rng(bounds: Bounds, scheduler: S, mut rng: R) -> Session<S, R> {
        let board = Board::new(bounds, &mut rng);
        Session {
            rng,
            scheduler,
            board,
            state: GameState::Idle,
            elapsed: 0,
        }
    }

    /// Stop the clock and replace the game with a fresh one in the idle
    /// state.  Works from any state.
    pub(crate) fn reset(&mut self) {
        self.stop_clock();
        self.board = Board::new(self.board.bounds, &mut self.rng);
        self.state = GameState::Idle;
        self.elapsed = 0;
        log::debug!("Game reset");
    }

    /// Start the clock on an idle game.  Does nothing in any other state.
    pub(crate) fn start(&mut self) {
        if self.state == GameState::Idle {
            self.state = GameState::Running;
            self.start_clock();
            log::info!(
                "Game started on a {}x{} board",
                self.board.bounds.rows,
                self.board.bounds.cols
            );
        }
    }

    /// Reset the game and immediately start the new one
    pub(crate) fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Pause a running game or resume a paused one.  Resuming restarts the
    /// step period from zero.  Does nothing while idle or over.
    pub(crate) fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => {
                self.stop_clock();
                self.state = GameState::Paused;
                log::debug!("Game paused");
            }
            GameState::Paused => {
                self.state = GameState::Running;
                self.start_clock();
                log::debug!("Game resumed");
            }
            GameState::Idle | GameState::Over => (),
        }
    }

    /// Ask for the snake to turn.  The request is applied on the next step,
    /// where it is dropped if it would reverse the snake into itself.  Ignored
    /// once the game is over.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if self.state != GameState::Over {
            self.board.queue(direction);
        }
    }

    /// Handle the step timer firing: move the snake once.  Returns `None` if
    /// the game is not running.
    pub(crate) fn tick(&mut self) -> Option<Tick> {
        if self.state != GameState::Running {
            return None;
        }
        match self.board.step(&mut self.rng) {
            Step::Moved => Some(Tick::Moved),
            Step::Ate { level_up } => {
                if level_up {
                    let period = self.tick_period();
                    log::info!(
                        "Reached level {}; stepping every {}ms",
                        self.board.level,
                        period.as_millis()
                    );
                    self.scheduler.schedule(Timer::Step, period);
                }
                Some(Tick::Ate { level_up })
            }
            Step::Collided(reason) => {
                self.stop_clock();
                self.state = GameState::Over;
                log::info!(
                    "Game over: snake {reason} with a score of {} after {}s",
                    self.board.score,
                    self.elapsed
                );
                Some(Tick::Over(GameOver {
                    score: self.board.score,
                    reason,
                }))
            }
        }
    }

    /// Handle the elapsed-time timer firing
    pub(crate) fn count_second(&mut self) {
        if self.state == GameState::Running {
            self.elapsed = self.elapsed.saturating_add(1);
        }
    }

    fn start_clock(&mut self) {
        let period = self.tick_period();
        self.scheduler.schedule(Timer::Step, period);
        self.scheduler.schedule(Timer::Elapsed, consts::ELAPSED_PERIOD);
    }

    fn stop_clock(&mut self) {
        self.scheduler.cancel(Timer::Step);
        self.scheduler.cancel(Timer::Elapsed);
    }
}

impl<S, R> Session<S, R> {
    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.board.snake
    }

    pub(crate) fn food(&self) -> Cell {
        self.board.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.board.score
    }

    pub(crate) fn level(&self) -> u32 {
        self.board.level
    }

    /// Seconds of play since the last reset, not counting time spent paused
    pub(crate) fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub(crate) fn bounds(&self) -> Bounds {
        self.board.bounds
    }

    /// The time between steps at the current level
    pub(crate) fn tick_period(&self) -> Duration {
        tick_period(self.board.level)
    }

    pub(crate) fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, cell: Cell) {
        self.board.food = cell;
    }
}
