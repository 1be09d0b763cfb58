//! medir: vector-multiply offload benchmark
//!
//! Times a simulated hardware-accelerated vector multiply against a
//! scalar CPU baseline, verifies the outputs lane by lane, and prints
//! wall-clock speedup plus a theoretical scaling table.
//!
//! Install: `cargo install medir`
//! Run: `medir`

use anyhow::Result;
use clap::Parser;
use medir::bench::{BenchReport, Benchmark};
use medir::config::BenchConfig;
use medir::kernel::SoftwareKernel;
use medir::scaling::{render_sweep, ScalingTable};

/// medir: vector-multiply offload benchmark
#[derive(Parser, Debug)]
#[command(name = "medir")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Times simulated hardware vector multiplication against a CPU baseline", long_about = None)]
struct Cli {
    /// Vector sizes to benchmark (repeatable; overrides the plan)
    #[arg(short, long)]
    size: Vec<usize>,

    /// Timed invocations per kernel
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Untimed invocations before the clock starts
    #[arg(short, long)]
    warmup: Option<usize>,

    /// Skip the simulated offload delay on the accelerated path
    #[arg(long)]
    no_simulation: bool,

    /// Config file path (YAML benchmark plan)
    #[arg(short, long)]
    config: Option<String>,

    /// Measure every doubling size from 8 to 4096 and summarize
    #[arg(long)]
    sweep: bool,

    /// Print only the theoretical scaling table and exit
    #[arg(long)]
    table_only: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        medir::debug::enable();
    } else {
        medir::debug::init_from_env();
    }

    let mut config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };

    // CLI overrides the plan
    if !cli.size.is_empty() {
        config.sizes = cli.size.clone();
    }
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(warmup) = cli.warmup {
        config.warmup = warmup;
    }
    if cli.no_simulation {
        config.simulation = false;
    }

    config.validate()?;

    medir::info!(
        "main",
        "plan: sizes={:?} iterations={} warmup={} simulation={}",
        config.sizes,
        config.iterations,
        config.warmup,
        config.simulation
    );

    if cli.table_only {
        ScalingTable::new().print()?;
        return Ok(());
    }

    println!("Vector Multiplication Performance Test");
    println!("======================================");
    println!();

    if cli.sweep {
        run_sweep(&config)?;
    } else {
        run_plan(&config)?;
    }

    ScalingTable::new().print()?;

    Ok(())
}

/// Runs every size in the plan and prints one report per size.
///
/// A lane mismatch is reported inside the benchmark output and does
/// not fail the process.
fn run_plan(config: &BenchConfig) -> Result<()> {
    let hardware = config.hardware_kernel();
    let software = SoftwareKernel::new();

    for &size in &config.sizes {
        println!("Running tests with vector size ({size})...");

        let report = Benchmark::new(size)
            .iterations(config.iterations)
            .warmup(config.warmup)
            .run(&hardware, &software)?;

        report.print();
    }

    Ok(())
}

/// Measures every doubling size of the default sweep and prints a
/// summary table after the per-size reports.
fn run_sweep(config: &BenchConfig) -> Result<()> {
    let hardware = config.hardware_kernel();
    let software = SoftwareKernel::new();
    let mut reports: Vec<BenchReport> = Vec::new();

    let sweep = ScalingTable::new().rows()?;
    println!("Sweeping {} vector sizes...", sweep.len());
    println!();

    for row in &sweep {
        println!("Running tests with vector size ({})...", row.size);

        let report = Benchmark::new(row.size)
            .iterations(config.iterations)
            .warmup(config.warmup)
            .run(&hardware, &software)?;

        report.print();
        reports.push(report);
    }

    print!("{}", render_sweep(&reports));

    Ok(())
}
