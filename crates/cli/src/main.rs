//! Y86-64 simulator CLI.
//!
//! This binary provides the entry points for running object listings. It performs:
//! 1. **Run:** Load a `.yo` listing, simulate it, and print the JSON trace to stdout.
//! 2. **Check:** Simulate a listing and compare the trace with a stored reference.
//!
//! Diagnostics go to stderr through `tracing`, so stdout carries only the trace.

mod compare;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use y86_core::common::{LoadError, MEM_MAX_SIZE};
use y86_core::sim::loader;
use y86_core::{Config, Image, Simulator, Snapshot, Status, Trace};

use crate::compare::Verdict;

#[derive(Parser, Debug)]
#[command(
    name = "y86sim",
    author,
    version,
    about = "Y86-64 instruction-level simulator",
    long_about = "Run a Y86-64 object listing (.yo) and print its execution trace as JSON.\n\nExamples:\n  y86sim run prog.yo\n  y86sim run --compact --stats < prog.yo\n  y86sim check prog.yo prog.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a listing and print the trace.
    Run {
        /// Object listing to execute (stdin when omitted).
        file: Option<PathBuf>,

        #[command(flatten)]
        opts: RunOpts,

        /// Print the trace on a single line.
        #[arg(long)]
        compact: bool,

        /// Print execution statistics to stderr.
        #[arg(long)]
        stats: bool,
    },

    /// Run a listing and compare its trace with a reference JSON file.
    Check {
        /// Object listing to execute.
        file: PathBuf,

        /// Reference trace.
        expected: PathBuf,

        #[command(flatten)]
        opts: RunOpts,
    },
}

/// Options shared by every subcommand that simulates.
#[derive(clap::Args, Debug)]
struct RunOpts {
    /// Step ceiling (overrides the configuration file).
    #[arg(long)]
    max_steps: Option<u64>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every decoded and retired instruction (sets `general.trace_instructions`).
    #[arg(long)]
    trace: bool,
}

/// Errors reported by the CLI before exiting with status 1.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("could not read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode trace: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Write(#[source] io::Error),

    #[error("trace does not match reference")]
    Mismatch,
}

/// Process exit status: `0` on success, `1` for any error or a failed check.
const fn exit_status(result: &Result<(), CliError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

impl Commands {
    const fn opts(&self) -> &RunOpts {
        match self {
            Self::Run { opts, .. } | Self::Check { opts, .. } => opts,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.command.opts().trace);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = execute(cli.command, &mut stdin.lock(), &mut stdout.lock());
    if let Err(e) = &result {
        eprintln!("error: {e}");
    }
    process::exit(exit_status(&result));
}

/// Dispatches a parsed command. `input` stands in for stdin, `out` for stdout.
fn execute(command: Commands, input: &mut impl Read, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::Run {
            file,
            opts,
            compact,
            stats,
        } => cmd_run(file.as_deref(), &opts, compact, stats, input, out),
        Commands::Check {
            file,
            expected,
            opts,
        } => cmd_check(&file, &expected, &opts, out),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins unless `--trace` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds the configuration: file first, then command-line overrides.
fn load_config(opts: &RunOpts) -> Result<Config, CliError> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = read_text(path)?;
            serde_json::from_str(&text).map_err(|source| CliError::Json {
                path: path.clone(),
                source,
            })?
        }
        None => Config::default(),
    };
    if let Some(n) = opts.max_steps {
        config.general.max_steps = n;
    }
    if opts.trace {
        config.general.trace_instructions = true;
    }
    if config.memory.size > MEM_MAX_SIZE {
        tracing::warn!(size = config.memory.size, "memory size exceeds the usual Y86-64 bound");
    }
    Ok(config)
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_image(file: Option<&Path>, config: &Config, input: &mut impl Read) -> Result<Image, CliError> {
    match file {
        Some(path) => Ok(loader::load_file(path, config.memory.size)?),
        None => {
            let mut text = String::new();
            let _ = input.read_to_string(&mut text).map_err(CliError::Stdin)?;
            Ok(loader::parse_yo(&text, config.memory.size))
        }
    }
}

fn simulate(
    file: Option<&Path>,
    opts: &RunOpts,
    input: &mut impl Read,
) -> Result<(Simulator, Trace), CliError> {
    let config = load_config(opts)?;
    let image = load_image(file, &config, input)?;
    let mut sim = Simulator::new(&image, &config);
    let trace = sim.run();
    Ok((sim, trace))
}

/// Runs a listing and writes the trace to `out`.
fn cmd_run(
    file: Option<&Path>,
    opts: &RunOpts,
    compact: bool,
    stats: bool,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let (sim, trace) = simulate(file, opts, input)?;
    let json = if compact {
        serde_json::to_string(&trace)?
    } else {
        serde_json::to_string_pretty(&trace)?
    };
    writeln!(out, "{json}").map_err(CliError::Write)?;
    if matches!(sim.status(), Status::Adr | Status::Ins) {
        eprintln!("[!] program stopped with {}", sim.status());
        sim.cpu.dump_state();
    }
    if stats {
        sim.stats().print();
    }
    Ok(())
}

/// Runs a listing and compares the trace with a stored reference.
fn cmd_check(
    file: &Path,
    expected: &Path,
    opts: &RunOpts,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let (_, trace) = simulate(Some(file), opts, &mut io::empty())?;
    let text = read_text(expected)?;
    let reference: Vec<Snapshot> = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: expected.to_path_buf(),
        source,
    })?;

    match compare::compare(trace.as_slice(), &reference) {
        Verdict::Match => {
            writeln!(out, "PASS: {} steps", trace.len()).map_err(CliError::Write)?;
            Ok(())
        }
        Verdict::Length { actual, expected } => {
            writeln!(out, "FAIL: trace has {actual} steps, reference has {expected}")
                .map_err(CliError::Write)?;
            Err(CliError::Mismatch)
        }
        Verdict::Step { index, diffs } => {
            writeln!(out, "FAIL: step {index} differs").map_err(CliError::Write)?;
            for d in diffs {
                writeln!(out, "  {d}").map_err(CliError::Write)?;
            }
            Err(CliError::Mismatch)
        }
    }
}
