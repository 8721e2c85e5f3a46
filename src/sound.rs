//! Sound effects, such as they are in a terminal: rings of the bell
use std::io::{self, Write};

/// Events that get a sound
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    Eat,
    /// Eating pushed the game to a new level
    LevelUp,
    GameOver,
    /// Sound was just switched on
    SoundOn,
}

impl Cue {
    fn rings(self) -> usize {
        match self {
            Cue::Eat | Cue::SoundOn => 1,
            Cue::LevelUp | Cue::GameOver => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Sound {
    enabled: bool,
}

impl Sound {
    pub(crate) fn new(enabled: bool) -> Sound {
        Sound { enabled }
    }

    pub(crate) fn enabled(self) -> bool {
        self.enabled
    }

    /// Switch sound on or off.  Switching it on plays [`Cue::SoundOn`] so the
    /// player can hear that it works.
    pub(crate) fn toggle<W: Write>(&mut self, out: W) -> io::Result<()> {
        self.enabled = !self.enabled;
        log::debug!("Sound {}", if self.enabled { "on" } else { "off" });
        self.play(out, Cue::SoundOn)
    }

    /// Ring the terminal bell for `cue`, if sound is on
    pub(crate) fn play<W: Write>(self, mut out: W, cue: Cue) -> io::Result<()> {
        if self.enabled {
            out.write_all(&b"\x07".repeat(cue.rings()))?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_when_enabled() {
        let mut out = Vec::new();
        Sound::new(true).play(&mut out, Cue::Eat).expect("writing to a Vec should succeed");
        assert_eq!(out, b"\x07");
        Sound::new(true).play(&mut out, Cue::GameOver).expect("writing to a Vec should succeed");
        assert_eq!(out, b"\x07\x07\x07");
    }

    #[test]
    fn silent_when_disabled() {
        let mut out = Vec::new();
        Sound::new(false).play(&mut out, Cue::GameOver).expect("writing to a Vec should succeed");
        assert!(out.is_empty());
    }

    #[test]
    fn toggle() {
        let mut sound = Sound::new(true);
        let mut out = Vec::new();
        sound.toggle(&mut out).expect("writing to a Vec should succeed");
        assert!(!sound.enabled());
        assert!(out.is_empty());
        sound.toggle(&mut out).expect("writing to a Vec should succeed");
        assert!(sound.enabled());
        assert_eq!(out, b"\x07");
    }
}
