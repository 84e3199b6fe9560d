mod app;
mod command;
mod config;
mod consts;
mod field;
mod game;
mod input;
mod steering;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::input::{PipedKeys, TerminalKeys};
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: segsnake [-c|--config <path>]

Steer the snake with w/a/s/d or the arrow keys; quit with q.

Options:
  -c, --config <path>   Read configuration from the given file
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config })
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run { config }) => error_exit(run(config)),
        Ok(Arguments::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("segsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("segsnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    config.log().install()?;
    log::info!(
        "Starting segsnake {} with a tick period of {:?}",
        env!("CARGO_PKG_VERSION"),
        config.tick_period()
    );
    let app = App::new(config.rng(), config.tick_period());
    let mut terminal = init_terminal(ratatui::try_init, ratatui::restore)?;
    let r = if io::stdin().is_terminal() {
        app.run(&mut terminal, TerminalKeys::default())
    } else {
        app.run(&mut terminal, PipedKeys::spawn(io::stdin()))
    };
    ratatui::restore();
    log::info!("Exiting");
    r.map_err(Into::into)
}

/// Set up the terminal with `init`.  If that fails partway through, `restore`
/// is called to undo whatever part of the setup did happen, such as enabling
/// raw mode.
fn init_terminal<T, I, R>(init: I, restore: R) -> anyhow::Result<T>
where
    I: FnOnce() -> io::Result<T>,
    R: FnOnce(),
{
    init()
        .inspect_err(|_| restore())
        .context("failed to set up terminal")
}

fn error_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("segsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
