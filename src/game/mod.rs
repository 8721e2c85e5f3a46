mod dialog;
use self::dialog::{DialogOpt, GameOverDialog};
use crate::app::Action;
use crate::command::Command;
use crate::consts;
use crate::engine::{Bounds, Cell, Direction, GameState, Session, Snake, Tick, Timer};
use crate::highscore::HighScore;
use crate::sound::{Cue, Sound};
use crate::timers::Deadlines;
use crate::util::{center_rect, format_elapsed, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// The game screen: a [`Session`] running off of the terminal's event loop,
/// plus the bits around it that the engine doesn't care about
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    session: Session<Deadlines, R>,
    high_score: HighScore,
    sound: Sound,

    /// Shown after a game ends, until the player picks an option
    dialog: Option<GameOverDialog>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(bounds: Bounds, high_score: HighScore, sound: Sound) -> Self {
        Game::new_with_rng(bounds, high_score, sound, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        bounds: Bounds,
        high_score: HighScore,
        sound: Sound,
        rng: R,
    ) -> Game<R> {
        Game {
            session: Session::new_with_rng(bounds, Deadlines::default(), rng),
            high_score,
            sound,
            dialog: None,
        }
    }

    /// Wait for either the next timer to come due or the next input event,
    /// whichever happens first, and handle it
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Action>> {
        if let Some((timer, due)) = self.session.scheduler().next_due() {
            let wait = due.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.session.scheduler_mut().rearm(timer, Instant::now());
                return Ok(self.fire(timer));
            }
        }
        Ok(self.handle_event(read()?))
    }

    fn fire(&mut self, timer: Timer) -> Option<Action> {
        match timer {
            Timer::Step => match self.session.tick()? {
                Tick::Moved => None,
                Tick::Ate { level_up } => {
                    self.ring(if level_up { Cue::LevelUp } else { Cue::Eat });
                    None
                }
                Tick::Over(over) => {
                    self.ring(Cue::GameOver);
                    let new_high_score = self.high_score.record(over.score);
                    self.dialog = Some(GameOverDialog::new(over, new_high_score));
                    new_high_score.then_some(Action::SaveHighScore(self.high_score))
                }
            },
            Timer::Elapsed => {
                self.session.count_second();
                None
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        if event == Event::FocusLost {
            if self.session.state() == GameState::Running {
                self.session.toggle_pause();
            }
            return None;
        }
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if matches!(cmd, Command::Quit | Command::Q) {
            return Some(Action::Quit);
        }
        if let Some(dialog) = self.dialog.as_mut() {
            match dialog.handle_command(cmd)? {
                DialogOpt::TryAgain => self.session.restart(),
                DialogOpt::Close => self.session.reset(),
            }
            self.dialog = None;
            return None;
        }
        match cmd {
            Command::Up => self.session.set_direction(Direction::Up),
            Command::Down => self.session.set_direction(Direction::Down),
            Command::Left => self.session.set_direction(Direction::Left),
            Command::Right => self.session.set_direction(Direction::Right),
            Command::Enter => self.session.start(),
            Command::Space | Command::P | Command::Esc => self.session.toggle_pause(),
            Command::R => self.session.reset(),
            Command::M => {
                if let Err(e) = self.sound.toggle(io::stdout()) {
                    log::warn!("Failed to ring terminal bell: {e}");
                }
            }
            Command::Quit | Command::Q | Command::Next | Command::Prev => (),
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    #[cfg(test)]
    pub(crate) fn high_score(&self) -> HighScore {
        self.high_score
    }

    fn ring(&self, cue: Cue) {
        if let Err(e) = self.sound.play(io::stdout(), cue) {
            log::warn!("Failed to ring terminal bell: {e}");
        }
    }

    fn status_line(&self) -> Line<'static> {
        Line::styled(
            format!(
                " Score: {}   High: {}   Level: {}   Time: {}   Sound: {}",
                self.session.score(),
                self.high_score.get(),
                self.session.level(),
                format_elapsed(self.session.elapsed()),
                if self.sound.enabled() { "on" } else { "off" },
            ),
            consts::STATUS_BAR_STYLE,
        )
    }

    /// The two lines shown below the board
    fn messages(&self) -> [Line<'static>; 2] {
        match self.session.state() {
            GameState::Idle => [
                Line::from(" Steer with the arrow keys, wasd, or hjkl"),
                key_hints(&[("Start", "Enter"), ("Sound", "m"), ("Quit", "q")]),
            ],
            GameState::Running => [
                Line::default(),
                key_hints(&[("Pause", "p"), ("Reset", "r"), ("Sound", "m"), ("Quit", "q")]),
            ],
            GameState::Paused => [
                Line::from(" — PAUSED —"),
                key_hints(&[("Resume", "p"), ("Reset", "r"), ("Sound", "m"), ("Quit", "q")]),
            ],
            GameState::Over => [
                Line::from(" — GAME OVER —"),
                key_hints(&[("Try Again", "r"), ("Close", "Esc"), ("Quit", "q")]),
            ],
        }
    }
}

/// Render a list of `(label, key)` pairs as `Label (key)` items joined by a
/// dash separator
fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::default();
    for (i, &(label, key)) in hints.iter().enumerate() {
        line.push_span(if i == 0 { " " } else { " — " });
        line.push_span(label);
        line.push_span(" (");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.status_line().render(status_area, buf);

        let bounds = self.session.bounds();
        let block_size = Size {
            width: bounds
                .cols
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: bounds.rows.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        canvas.draw_cell(self.session.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        canvas.draw_snake(self.session.snake(), self.session.state() == GameState::Over);

        let [msg1, msg2] = self.messages();
        msg1.render(msg1_area, buf);
        msg2.render(msg2_area, buf);

        if let Some(dialog) = self.dialog {
            let dialog_area = center_rect(
                display,
                Size {
                    width: GameOverDialog::WIDTH,
                    height: GameOverDialog::HEIGHT,
                },
            );
            dialog.render(dialog_area, buf);
        }
    }
}

/// The inside of the board's border.  Each board cell takes up
/// [`CELL_WIDTH`][consts::CELL_WIDTH] terminal columns, with the glyph in the
/// first one.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(x) = cell
            .col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cell.row) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }

    fn draw_snake(&mut self, snake: &Snake, crashed: bool) {
        for &cell in snake.body() {
            self.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that it's on top of anything it ran into
        if crashed {
            self.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            self.draw_cell(snake.head(), snake.head_symbol(), consts::SNAKE_STYLE);
        }
    }
}
