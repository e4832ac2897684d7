//! Walk Your Dog
//!
//! Main entry point for the game.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wd_core::{Collaborators, GameError, GameOptions, GameRng, OptionsError, Prompter, play};
use wd_tui::ConsoleDisplay;

/// Walk Your Dog in the terminal
#[derive(Parser, Debug)]
#[command(name = "walkdog")]
#[command(
    author,
    version,
    about = "Walk Your Dog - take a dog through five stages",
    long_about = None
)]
struct Args {
    /// Options file (defaults to $WALKDOGRC)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed, for replaying a walk
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Owner name
    #[arg(short = 'u', long = "name", value_parser = NonEmptyStringValueParser::new())]
    name: Option<String>,

    /// Plain text without colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Skip the title header
    #[arg(long = "no-header")]
    no_header: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Options file values with command-line overrides applied
    fn options(&self) -> Result<GameOptions, OptionsError> {
        let mut options = match self.config.clone().or_else(GameOptions::default_path) {
            Some(path) => GameOptions::load_from_file(&path)?,
            None => GameOptions::default(),
        };
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        if self.no_color {
            options.color = false;
        }
        if self.no_header {
            options.header = false;
        }
        Ok(options)
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "walkdog=debug,wd_core=debug,wd_tui=debug"
    } else {
        "walkdog=warn,wd_core=warn,wd_tui=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: &Args) -> Result<u8, GameError> {
    let options = args.options()?;

    let mut rng = options.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    tracing::info!(seed = rng.seed(), "starting walk");

    let mut input = Prompter::new(io::stdin().lock(), io::stdout());
    let mut display = ConsoleDisplay::new(io::stdout(), options.color);

    let result = play(&options, Collaborators::new(&mut rng, &mut display, &mut input));
    display.finish()?;

    let outcome = result?;
    tracing::info!(?outcome, "walk over");
    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err @ GameError::AgeIneligible { .. }) => {
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            tracing::error!(%err, "walk aborted");
            eprintln!("walkdog: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
