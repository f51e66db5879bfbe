mod attack;
mod input;
mod priority;

use std::path::PathBuf;

use anyhow::Result;
use clap::{value_parser, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use thread_hash_core::{DEFAULT_THREAD_COUNT, MAX_THREAD_COUNT, MIN_THREAD_COUNT};

use attack::attack;

/// Multithreaded dictionary attack against crypt(3) password hashes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The file containing the password hashes, one per line.
    #[arg(short, long, value_parser)]
    input: PathBuf,

    /// The output file of the results (default stdout).
    #[arg(short, long, value_parser)]
    output: Option<PathBuf>,

    /// The dictionary file, one candidate word per line.
    #[arg(short, long, value_parser)]
    dictionary: PathBuf,

    /// The number of threads to create.
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = value_parser!(i64).range(MIN_THREAD_COUNT as i64..=MAX_THREAD_COUNT as i64),
        default_value_t = DEFAULT_THREAD_COUNT as i64
    )]
    threads: i64,

    /// Enable verbose mode.
    #[arg(short, long)]
    verbose: bool,

    /// Lower the priority of the process.
    #[arg(short, long)]
    nice: bool,
}

/// Installs the logger on the standard error.
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    attack(cli)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Cli;

    fn parse_threads(threads: &str) -> Result<i64, clap::Error> {
        Cli::try_parse_from([
            "thread_hash",
            "-i",
            "hashes.txt",
            "-d",
            "words.txt",
            "-t",
            threads,
        ])
        .map(|cli| cli.threads)
    }

    #[test]
    fn test_thread_count_range() {
        for threads in ["0", "25", "-1", "many"] {
            assert!(parse_threads(threads).is_err(), "{threads} should be rejected");
        }

        assert_eq!(1, parse_threads("1").unwrap());
        assert_eq!(24, parse_threads("24").unwrap());
    }

    #[test]
    fn test_defaults() {
        let cli =
            Cli::try_parse_from(["thread_hash", "-i", "hashes.txt", "-d", "words.txt"]).unwrap();

        assert_eq!(1, cli.threads);
        assert_eq!(None, cli.output);
        assert!(!cli.verbose);
        assert!(!cli.nice);
    }

    #[test]
    fn test_required_arguments() {
        assert!(Cli::try_parse_from(["thread_hash", "-i", "hashes.txt"]).is_err());
        assert!(Cli::try_parse_from(["thread_hash", "-d", "words.txt"]).is_err());
    }
}
