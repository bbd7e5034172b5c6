//! RISC-V Instruction Trace Coverage CLI.
//!
//! Reads one or more simulator trace CSV files, samples functional coverage
//! for every retired instruction, and prints run statistics.
//!
//! # Usage
//!
//! ```text
//! riscv-cov [--config cfg.toml] [--xlen 64] [--report cov.json] trace0.csv trace1.csv
//! ```
//!
//! Set `RUST_LOG=debug` to see every trace field.

use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process;

use riscv_cov::common::CovError;
use riscv_cov::config::{Config, LoggingConfig};
use riscv_cov::cov::CoverageDb;
use riscv_cov::diag::LogSink;
use riscv_cov::report::CoverageReport;
use riscv_cov::run::CovRun;

/// Command-line arguments for the coverage run.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V Instruction Trace Coverage")]
struct Args {
    /// Trace CSV files, processed in the given order
    trace_files: Vec<PathBuf>,

    /// Configuration file (defaults to configs/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Native word width of the traced core (32 or 64)
    #[arg(long)]
    xlen: Option<u32>,

    /// Write a JSON coverage report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the log to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Main entry point.
///
/// # Behavior
///
/// 1. **Configuration**: Loads the TOML configuration and applies CLI overrides.
/// 2. **Logging**: Initializes `env_logger` (`RUST_LOG` wins over the configured level).
/// 3. **Run**: Processes all trace files; an empty list or unreadable file is fatal.
/// 4. **Teardown**: Prints run statistics and group coverage, writes the report.
///
/// Skipped rows and unexpected illegal instructions are logged as errors but
/// do not change the exit status.
fn main() {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref()).unwrap_or_else(|e| fatal(&e));

    if let Some(xlen) = args.xlen {
        config.general.xlen = xlen;
    }
    if args.report.is_some() {
        config.report.path = args.report;
    }
    if args.log_file.is_some() {
        config.logging.file = args.log_file;
    }

    let xlen = config.general.xlen_val().unwrap_or_else(|e| fatal(&e));
    init_logging(&config.logging).unwrap_or_else(|e| fatal(&e));

    let mut run = CovRun::new(CoverageDb::new(), LogSink, xlen);
    if let Err(e) = run.run_phase(&args.trace_files) {
        log::error!("{}", e);
        fatal(&e);
    }
    let (db, _, counters) = run.into_parts();

    counters.print();
    println!("GROUP COVERAGE");
    for group in db.group_coverage() {
        println!(
            "  {:<8} {:>4} / {:<4} ({:.2}%)",
            group.group,
            group.covered,
            group.total,
            group.percent()
        );
    }
    println!("==========================================================");

    if let Some(path) = &config.report.path {
        CoverageReport::new(&counters, &db)
            .write(path)
            .unwrap_or_else(|e| fatal(&e));
        println!("[*] Coverage report written to {}", path.display());
    }
}

fn init_logging(logging: &LoggingConfig) -> Result<(), CovError> {
    let env = env_logger::Env::default().default_filter_or(logging.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = &logging.file {
        let file = File::create(path).map_err(|source| CovError::Io {
            path: path.clone(),
            source,
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn fatal(e: &CovError) -> ! {
    eprintln!("\n[!] FATAL: {}", e);
    process::exit(1);
}
