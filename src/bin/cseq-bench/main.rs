//! cseq-bench CLI: footprint vs. random-access latency comparison for
//! compact integer-sequence encodings.
//!
//! The report stream (tab-separated) goes to stdout; per-trial timing
//! diagnostics go to stderr.

use anyhow::Result;
use clap::Parser;
use std::io;

use cseq_bench::access::NUM_ACCESSES;
use cseq_bench::workload::{DEFAULT_NUM_ELEMENTS, DEFAULT_VALUE_BITS, WORKLOAD_SEED};
use cseq_bench::{ReportEmitter, RunConfig};

#[derive(Debug, Parser)]
#[command(name = "cseq-bench")]
#[command(about = "Compare compact integer-sequence encodings against a fixed-width baseline", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of workload elements; malformed values fall back to the default
    #[arg(value_parser = parse_num_elements, default_value_t = DEFAULT_NUM_ELEMENTS)]
    num_elements: usize,

    /// Workload generator seed
    #[arg(long, default_value_t = WORKLOAD_SEED)]
    seed: u64,

    /// Significant bits per generated value (1-64)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64), default_value_t = DEFAULT_VALUE_BITS)]
    value_bits: u32,

    /// Number of random accesses timed per trial
    #[arg(long, default_value_t = NUM_ACCESSES)]
    accesses: usize,
}

/// Malformed counts silently fall back to the default rather than failing;
/// a benchmark invocation with a typo should still produce a run.
fn parse_num_elements(s: &str) -> Result<usize, String> {
    Ok(s.parse().unwrap_or(DEFAULT_NUM_ELEMENTS))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RunConfig {
        num_elements: cli.num_elements,
        value_bits: cli.value_bits,
        seed: cli.seed,
        num_accesses: cli.accesses,
    };

    let stdout = io::stdout();
    let mut emitter = ReportEmitter::new(stdout.lock());
    cseq_bench::run(&config, &mut emitter)
}
