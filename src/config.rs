use crate::consts;
use crate::engine::Bounds;
use crate::highscore::{HighScore, LoadError, SaveError};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Whether sound starts out on
    pub(crate) sound: bool,

    /// Size of the board
    pub(crate) board: BoardConfig,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sound: true,
            board: BoardConfig::default(),
            files: FileConfig::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the high score should be stored: the file
    /// given in the configuration or, if that is not set, the default high
    /// score file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    fn high_score_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .high_score_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| HighScore::default_path().map(Cow::from))
    }

    /// Load the high score from its file.  If `self.files.save_high_score` is
    /// `false`, nothing is read and a zero high score is returned.
    pub(crate) fn load_high_score(&self) -> Result<HighScore, LoadError> {
        if !self.files.save_high_score {
            return Ok(HighScore::default());
        }
        let path = self.high_score_file().ok_or_else(LoadError::no_path)?;
        let hs = HighScore::load(&path)?;
        log::info!("Loaded high score {} from {}", hs.get(), path.display());
        Ok(hs)
    }

    /// Save the high score to its file.  If `self.files.save_high_score` is
    /// `false`, nothing is saved.
    pub(crate) fn save_high_score(&self, high_score: HighScore) -> Result<(), SaveError> {
        if !self.files.save_high_score {
            return Ok(());
        }
        let path = self.high_score_file().ok_or_else(SaveError::no_path)?;
        high_score.save(&path)?;
        log::info!("Saved high score {} to {}", high_score.get(), path.display());
        Ok(())
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawBoardConfig")]
pub(crate) struct BoardConfig(Bounds);

impl BoardConfig {
    pub(crate) fn bounds(self) -> Bounds {
        self.0
    }
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig(Bounds::new(consts::DEFAULT_ROWS, consts::DEFAULT_COLS))
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RawBoardConfig {
    rows: u16,
    cols: u16,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        RawBoardConfig {
            rows: consts::DEFAULT_ROWS,
            cols: consts::DEFAULT_COLS,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BoardSizeError;

    fn try_from(value: RawBoardConfig) -> Result<BoardConfig, BoardSizeError> {
        if !(2..=consts::MAX_ROWS).contains(&value.rows) {
            Err(BoardSizeError::Rows(value.rows))
        } else if !(2..=consts::MAX_COLS).contains(&value.cols) {
            Err(BoardSizeError::Cols(value.cols))
        } else {
            Ok(BoardConfig(Bounds::new(value.rows, value.cols)))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardSizeError {
    #[error("board rows must be between 2 and {max}, got {0}", max = consts::MAX_ROWS)]
    Rows(u16),
    #[error("board cols must be between 2 and {max}, got {0}", max = consts::MAX_COLS)]
    Cols(u16),
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,

    /// File to write log messages to.  No logging happens if this is unset.
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
