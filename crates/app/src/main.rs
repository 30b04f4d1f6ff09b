mod desktop;
mod terminal;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use services::{Clock, DictionaryScraper, DrillService};
use storage::Storage;
use tracing_subscriber::EnvFilter;

use crate::terminal::Mode;

const DEFAULT_WORDS_PATH: &str = "Oxford 5000.txt";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { origin: &'static str, raw: String },
    InvalidWordsPath { raw: String },
    ConflictingModes,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { origin, raw } => write!(f, "invalid {origin} value: {raw}"),
            ArgsError::InvalidWordsPath { raw } => write!(f, "invalid --words value: {raw:?}"),
            ArgsError::ConflictingModes => write!(f, "--gui and --terminal are mutually exclusive"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seed(origin: &'static str, raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { origin, raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  typing-drill [--words <path>] [--gui | --terminal] [--seed <n>]");
    eprintln!();
    eprintln!("Without --gui or --terminal, asks which mode to open.");
    eprintln!("Type `finish practice` at any prompt to stop.");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --words \"{DEFAULT_WORDS_PATH}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_WORDS_PATH, DRILL_SEED");
    eprintln!("  DRILL_DICTIONARY_URL, DRILL_USER_AGENT, DRILL_TRANSLATION_CLASS");
    eprintln!("  RUST_LOG (log filter, default: warn)");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    words_path: PathBuf,
    mode: Option<Mode>,
    seed: Option<u64>,
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut words_path = env("DRILL_WORDS_PATH")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH), PathBuf::from);
        let mut seed = env("DRILL_SEED")
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_seed("DRILL_SEED", value))
            .transpose()?;
        let mut mode = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--words" => {
                    let value = require_value(&mut args, "--words")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidWordsPath { raw: value });
                    }
                    words_path = PathBuf::from(value);
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    seed = Some(parse_seed("--seed", value)?);
                }
                "--gui" => mode = Some(pick_mode(mode, Mode::Window)?),
                "--terminal" => mode = Some(pick_mode(mode, Mode::Terminal)?),
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            words_path,
            mode,
            seed,
        }))
    }
}

fn pick_mode(current: Option<Mode>, requested: Mode) -> Result<Mode, ArgsError> {
    match current {
        Some(existing) if existing != requested => Err(ArgsError::ConflictingModes),
        _ => Ok(requested),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // The word list is read before asking for a mode so a missing file fails fast.
    let storage = Storage::file(&args.words_path);
    let translations = Arc::new(DictionaryScraper::from_env()?);
    let mut service = runtime.block_on(DrillService::from_storage(
        Clock::default_clock(),
        &storage,
        translations,
    ))?;
    if let Some(seed) = args.seed {
        tracing::debug!(seed, "seeded word sampling");
        service = service.with_seed(seed);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mode = match args.mode {
        Some(mode) => mode,
        None => terminal::prompt_mode(&mut input, &mut stdout)?,
    };
    tracing::info!(?mode, words = %args.words_path.display(), "mode selected");

    match mode {
        Mode::Terminal => {
            terminal::run(&runtime, &service, &mut input, &mut stdout)?;
        }
        Mode::Window => {
            drop(input);
            // The desktop launcher starts its own event loop and runtime.
            drop(runtime);
            desktop::launch(service);
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!(error = %err, "typing drill stopped");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
