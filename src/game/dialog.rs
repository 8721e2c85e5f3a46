use crate::command::Command;
use crate::consts;
use crate::engine::{Collision, GameOver};
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up shown when a game ends, reporting the final score and offering to
/// play again
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverDialog {
    over: GameOver,

    /// Whether the final score beat the previous high score
    new_high_score: bool,

    /// The currently-selected choice
    selection: DialogOpt,
}

impl GameOverDialog {
    /// The height that should be used for the `Rect` passed to
    /// `GameOverDialog::render()`
    pub(super) const HEIGHT: u16 = 8;

    /// The width that should be used for the `Rect` passed to
    /// `GameOverDialog::render()`
    pub(super) const WIDTH: u16 = 24;

    pub(super) fn new(over: GameOver, new_high_score: bool) -> GameOverDialog {
        GameOverDialog {
            over,
            new_high_score,
            selection: DialogOpt::min(),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(super) fn handle_command(&mut self, cmd: Command) -> Option<DialogOpt> {
        match cmd {
            Command::Enter => return Some(self.selection),
            Command::R => return Some(DialogOpt::TryAgain),
            Command::Esc => return Some(DialogOpt::Close),
            Command::Up | Command::Left => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down | Command::Right => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(DialogOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(DialogOpt::max),
            _ => (),
        }
        None
    }
}

/// The choices in the game-over dialog
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum DialogOpt {
    /// Start a new game right away
    TryAgain,

    /// Go back to an idle board
    Close,
}

impl DialogOpt {
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        let (label, key) = match self {
            DialogOpt::TryAgain => ("Try Again (", "r"),
            DialogOpt::Close => ("Close (", "Esc"),
        };
        line.push_span(label);
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

fn headline(reason: Collision) -> &'static str {
    match reason {
        Collision::Wall => "You hit the wall!",
        Collision::Snake => "You bit yourself!",
    }
}

impl Widget for GameOverDialog {
    /*
     * ┌───── GAME OVER ──────┐
     * │ You hit the wall!    │
     * │ Final score: 120     │
     * │ New high score!      │
     * │                      │
     * │ » Try Again (r)      │
     * │   Close (Esc)        │
     * └──────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let mut rows = inner.rows();
        let lines = [
            Some(Line::from(headline(self.over.reason))),
            Some(Line::from(format!("Final score: {}", self.over.score))),
            self.new_high_score
                .then(|| Line::styled("New high score!", consts::KEY_STYLE)),
            None,
        ];
        for (line, row) in lines.into_iter().zip(rows.by_ref()) {
            if let Some(line) = line {
                line.render(row, buf);
            }
        }
        for (opt, row) in DialogOpt::iter().zip(rows) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog(new_high_score: bool) -> GameOverDialog {
        GameOverDialog::new(
            GameOver {
                score: 120,
                reason: Collision::Wall,
            },
            new_high_score,
        )
    }

    #[test]
    fn navigate() {
        let mut d = dialog(false);
        assert_eq!(d.handle_command(Command::Up), None);
        assert_eq!(d.selection, DialogOpt::TryAgain);
        assert_eq!(d.handle_command(Command::Down), None);
        assert_eq!(d.selection, DialogOpt::Close);
        assert_eq!(d.handle_command(Command::Down), None);
        assert_eq!(d.selection, DialogOpt::Close);
        assert_eq!(d.handle_command(Command::Next), None);
        assert_eq!(d.selection, DialogOpt::TryAgain);
        assert_eq!(d.handle_command(Command::Prev), None);
        assert_eq!(d.selection, DialogOpt::Close);
        assert_eq!(d.handle_command(Command::Enter), Some(DialogOpt::Close));
    }

    #[test]
    fn shortcuts() {
        let mut d = dialog(false);
        assert_eq!(d.handle_command(Command::Esc), Some(DialogOpt::Close));
        assert_eq!(d.handle_command(Command::R), Some(DialogOpt::TryAgain));
        assert_eq!(d.handle_command(Command::Enter), Some(DialogOpt::TryAgain));
        assert_eq!(d.handle_command(Command::Space), None);
    }

    #[test]
    fn render_new_high_score() {
        let area = Rect::new(0, 0, GameOverDialog::WIDTH, GameOverDialog::HEIGHT);
        let mut buffer = Buffer::empty(area);
        dialog(true).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌───── GAME OVER ──────┐",
            "│ You hit the wall!    │",
            "│ Final score: 120     │",
            "│ New high score!      │",
            "│                      │",
            "│ » Try Again (r)      │",
            "│   Close (Esc)        │",
            "└──────────────────────┘",
        ]);
        expected.set_style(area, Style::reset());
        expected.set_style(Rect::new(2, 3, 20, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(2, 5, 20, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(15, 5, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(11, 6, 3, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_bit_itself() {
        let area = Rect::new(0, 0, GameOverDialog::WIDTH, GameOverDialog::HEIGHT);
        let mut buffer = Buffer::empty(area);
        let mut d = GameOverDialog::new(
            GameOver {
                score: 30,
                reason: Collision::Snake,
            },
            false,
        );
        d.handle_command(Command::Down);
        d.render(area, &mut buffer);
        let text = (0..GameOverDialog::HEIGHT)
            .map(|y| {
                (0..GameOverDialog::WIDTH)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        pretty_assertions::assert_eq!(
            text,
            [
                "┌───── GAME OVER ──────┐",
                "│ You bit yourself!    │",
                "│ Final score: 30      │",
                "│                      │",
                "│                      │",
                "│   Try Again (r)      │",
                "│ » Close (Esc)        │",
                "└──────────────────────┘",
            ]
        );
    }
}
