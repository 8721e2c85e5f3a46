mod app;
mod command;
mod config;
mod consts;
mod engine;
mod game;
mod highscore;
mod sound;
mod timers;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal

Options:
  -c, --config <path>     Read configuration from the given file
  -l, --log-file <path>   Append log messages to the given file
  -h, --help              Display this help message and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        let config = match self.config {
            Some(path) => Config::load(&path, false)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => match Config::default_path() {
                Ok(path) => Config::load(&path, true)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                Err(_) => Config::default(),
            },
        };
        if let Some(log_file) = self.log_file.as_deref().or(config.files.log_file.as_deref()) {
            init_logging(log_file)?;
        }
        log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
        let terminal = ratatui::init();
        let r = crossterm::execute!(io::stdout(), EnableFocusChange)
            .and_then(|()| App::new(config).run(terminal));
        if let Err(e) = crossterm::execute!(io::stdout(), DisableFocusChange) {
            log::warn!("Failed to disable focus reporting: {e}");
        }
        ratatui::restore();
        log::info!("Exiting");
        r.map_err(Into::into)
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        file,
    )
    .context("failed to initialize logging")
}

fn main() -> ExitCode {
    let cli = match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    match cli {
        Cli::Help => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Cli::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Cli::Run(args) => match args.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => match e.downcast_ref::<io::Error>() {
                Some(ioe) if ioe.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
                _ => {
                    eprintln!("gridsnake: {e:?}");
                    ExitCode::from(2)
                }
            },
        },
    }
}
