mod app;
mod render;
mod settings;
mod theme;

use anyhow::{Context, Result};
use app::App;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use settings::Settings;
use sopa_core::{wordlist_from_tokens, Backtracking};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use theme::{Theme, ThemeName};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sopa", version, about = "Generate and solve word-search puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Seed for reproducible generation (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print grids without coloring the hidden words
    #[arg(long, global = true)]
    no_highlight: bool,

    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeName>,

    /// Retractions allowed before a word list is reported as unplaceable
    #[arg(long, global = true)]
    max_retractions: Option<usize>,

    #[arg(long, global = true, value_enum)]
    strategy: Option<StrategyArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate word searches from a list of words
    Generate {
        #[arg(required = true)]
        words: Vec<String>,

        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Append the puzzles to this file in the puzzle file format
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Solve every puzzle in a file
    Solve { file: PathBuf },
    /// Interactive menu (the default)
    Menu,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Memoized,
    Chronological,
}

impl From<StrategyArg> for Backtracking {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Memoized => Backtracking::Memoized,
            StrategyArg::Chronological => Backtracking::Chronological,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut stderr = io::stderr();
            let _ = render::render_error(&mut stderr, &Theme::default(), &format!("Error: {e:#}"));
            let _ = stderr.flush();
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = Settings::default_path();
    let mut settings = Settings::load(&settings_path);
    if cli.no_highlight {
        settings.highlight = false;
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(max_retractions) = cli.max_retractions {
        settings.max_retractions = max_retractions;
    }
    if let Some(strategy) = cli.strategy {
        settings.strategy = strategy.into();
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "random seed");

    let mut stdout = io::stdout().lock();
    match cli.command.unwrap_or(Command::Menu) {
        Command::Generate {
            words,
            count,
            output,
        } => {
            let words = wordlist_from_tokens(&words).context("invalid word list")?;
            let mut app = App::new(settings, seed, None);
            let puzzles = app.generate(&words, count, &mut stdout)?;
            if let Some(path) = output {
                app.save_puzzles(&path, &puzzles)?;
                info!(path = %path.display(), count = puzzles.len(), "saved puzzles");
            }
            Ok(())
        }
        Command::Solve { file } => {
            let app = App::new(settings, seed, None);
            let missing = app.solve_file(&file, &mut stdout)?;
            info!(missing, "words not found");
            Ok(())
        }
        Command::Menu => {
            // CLI overrides apply to this session; the toggle saves the merged settings
            let mut app = App::new(settings, seed, Some(settings_path));
            let stdin = io::stdin();
            let mut input = stdin.lock();
            app.run_menu(&mut input, &mut stdout)?;
            Ok(())
        }
    }
}
