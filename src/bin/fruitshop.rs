use std::io::stderr;
use std::process::ExitCode;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};

use fruitshop::{parse_str, ParseError, Transaction};

/// Any kind of error in the pipeline file reading -> row parsing -> CSV output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing input file argument")]
    MissingFile,
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("error during CSV output: {0}")]
    Csv(#[from] csv::Error),
}

fn main() -> ExitCode {
    let mut args = std::env::args_os()
        // Skip argv[0]
        .skip(1);
    let path = args.next();
    let level = args
        .next()
        .map(|level| parse_log_level(&level.to_string_lossy()))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(level);

    match path.ok_or(Error::MissingFile).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Parse(err)) => {
            error!(line = err.line_number(), row = err.row(), "{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            if matches!(err, Error::MissingFile) {
                eprintln!("Usage: fruitshop [input].csv [log_level:optional] > [output].csv");
            }
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: std::ffi::OsString) -> Result<(), Error> {
    debug!(path = %path.to_string_lossy(), "reading input");
    let input = std::fs::read_to_string(&path)?;

    let transactions = parse_str(&input)?;
    info!("parsed {} transactions", transactions.len());

    Transaction::dump_csv(&transactions, std::io::stdout().lock())?;
    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Results go to stdout, keep it clean
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_max_level(level)
        .init();
}
