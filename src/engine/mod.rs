//! The game engine: board state, the rules for a single step, the
//! level/speed curve, and the session that runs them off of injected timers.
//!
//! Nothing in here knows about the terminal.
mod board;
mod cell;
mod direction;
mod levels;
mod session;
mod snake;
pub(crate) use self::board::Collision;
pub(crate) use self::cell::{Bounds, Cell};
pub(crate) use self::direction::Direction;
pub(crate) use self::session::{GameOver, GameState, Scheduler, Session, Tick, Timer};
pub(crate) use self::snake::Snake;
