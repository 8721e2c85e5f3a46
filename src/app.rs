use crate::command::Command;
use crate::config::Config;
use crate::game::Game;
use crate::highscore::HighScore;
use crate::sound::Sound;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    config: Config,
    game: Game,

    /// A pop-up drawn over the game.  While it's up, input goes to it and
    /// the game's timers are not serviced.
    warning: Option<Warning>,

    quitting: bool,
}

impl App {
    pub(crate) fn new(config: Config) -> App {
        let (high_score, warning) = match config.load_high_score() {
            Ok(hs) => (hs, None),
            Err(e) => {
                log::warn!("{e}");
                (HighScore::default(), Some(Warning::from(e)))
            }
        };
        let game = Game::new(config.board.bounds(), high_score, Sound::new(config.sound));
        App {
            config,
            game,
            warning,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            self.game.draw(frame);
            if let Some(ref warning) = self.warning {
                frame.render_widget(warning, get_display_area(frame.area()));
            }
        })?;
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        if let Some(ref warning) = self.warning {
            let outcome = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
                .and_then(|cmd| warning.handle_command(cmd));
            match outcome {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
        } else if let Some(action) = self.game.process_input()? {
            self.handle_action(action);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quitting = true,
            Action::SaveHighScore(hs) => {
                if let Err(e) = self.config.save_high_score(hs) {
                    log::error!("{e}");
                    self.warning = Some(Warning::from(e));
                }
            }
        }
    }
}

/// Something the game screen needs the application to do
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Quit,

    /// A game ended with a new high score; write it out
    SaveHighScore(HighScore),
}
