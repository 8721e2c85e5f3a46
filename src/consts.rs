//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default number of rows on the board
pub(crate) const DEFAULT_ROWS: u16 = 16;

/// Default number of columns on the board
pub(crate) const DEFAULT_COLS: u16 = 20;

/// Largest board height that fits in [`DISPLAY_SIZE`] along with the status
/// bar, the border, and the two message lines
pub(crate) const MAX_ROWS: u16 = 19;

/// Largest board width that fits in [`DISPLAY_SIZE`] given [`CELL_WIDTH`]
pub(crate) const MAX_COLS: u16 = 38;

/// Number of terminal columns used to draw one board cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 2;

/// Points awarded for each food eaten
pub(crate) const FOOD_SCORE: u32 = 10;

/// Points needed to advance one level
pub(crate) const POINTS_PER_LEVEL: u32 = 50;

/// Step period at level 1, in milliseconds
pub(crate) const BASE_TICK_MILLIS: u32 = 220;

/// Amount by which the step period shrinks per level, in milliseconds
pub(crate) const TICK_MILLIS_PER_LEVEL: u32 = 15;

/// Shortest possible step period, in milliseconds
pub(crate) const MIN_TICK_MILLIS: u32 = 60;

/// Period of the "seconds played" counter
pub(crate) const ELAPSED_PERIOD: Duration = Duration::from_secs(1);

/// How many random cells to try when placing food before settling for the
/// last one drawn
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 500;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected dialog item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
