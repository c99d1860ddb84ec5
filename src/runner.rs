//! Trial orchestration: one timed access sweep per (encoding, pass) pair,
//! normalized against the pass's uncompressed baseline.

use std::hint::black_box;
use std::io::Write;

use anyhow::Result;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::access::{self, ACCESS_SEED, NUM_ACCESSES};
use crate::encoding::{EncodedSequence, Uncompressed, BASELINE_NAME, CANDIDATES};
use crate::report::{ReportEmitter, TrialResult};
use crate::timer::Timer;
use crate::workload::{self, DEFAULT_NUM_ELEMENTS, DEFAULT_VALUE_BITS, WORKLOAD_SEED};

/// Which workload variant the current pass sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Freshly generated values in generation order.
    Random,
    /// The same multiset, non-decreasing.
    Sorted,
}

impl Pass {
    /// Label suffix for report rows.
    pub fn suffix(self) -> &'static str {
        match self {
            Pass::Random => "random",
            Pass::Sorted => "sorted",
        }
    }
}

/// Normalization denominators taken from the pass's baseline trial.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub num_bytes: usize,
    pub elapsed_ns: u64,
}

/// Parameters of one full run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Workload element count.
    pub num_elements: usize,
    /// Significant bits per generated value.
    pub value_bits: u32,
    /// Workload generator seed.
    pub seed: u64,
    /// Access-set size per trial.
    pub num_accesses: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_elements: DEFAULT_NUM_ELEMENTS,
            value_bits: DEFAULT_VALUE_BITS,
            seed: WORKLOAD_SEED,
            num_accesses: NUM_ACCESSES,
        }
    }
}

/// Measures one trial: byte size, then one timed sweep over the sampled
/// access positions.
///
/// With `baseline == None` the trial is its own reference and reports
/// exactly 100% for both normalized columns.
pub fn run_trial(
    encoding: &dyn EncodedSequence,
    name: &str,
    pass: Pass,
    num_accesses: usize,
    baseline: Option<Baseline>,
) -> TrialResult {
    let label = format!("{name}.{}", pass.suffix());
    let num_bytes = encoding.size_in_bytes();
    let positions = access::sample(num_accesses, encoding.len(), ACCESS_SEED);

    let mut timer = Timer::new(label.clone());
    let mut sum: u64 = 0;
    for &pos in &positions {
        sum = sum.wrapping_add(encoding.read(pos));
    }
    timer.stop();
    let elapsed_ns = timer.report();

    // The accumulated sum must remain observable, or the optimizer could
    // prove the reads unused and drop the loop out of the timed region.
    // Reseeding a generator from it and consuming one draw reproduces the
    // original methodology; black_box is the belt-and-braces form. Neither
    // influences the reported numbers.
    let mut guard = ChaCha8Rng::seed_from_u64(black_box(sum));
    black_box(guard.next_u64());

    let (memory_pct, time_pct) = match baseline {
        Some(b) => (
            100.0 * num_bytes as f64 / b.num_bytes as f64,
            100.0 * elapsed_ns as f64 / b.elapsed_ns as f64,
        ),
        None => (100.0, 100.0),
    };

    TrialResult {
        label,
        num_bytes,
        elapsed_ns,
        memory_pct,
        time_pct,
    }
}

/// Runs one pass: the baseline trial first, then every candidate in
/// declared order, emitting one row each.
pub fn run_pass<W: Write>(
    values: &[u64],
    pass: Pass,
    num_accesses: usize,
    emitter: &mut ReportEmitter<W>,
) -> Result<()> {
    let baseline_trial = {
        let encoding = Uncompressed::build(values);
        run_trial(&encoding, BASELINE_NAME, pass, num_accesses, None)
    };
    let baseline = Baseline {
        num_bytes: baseline_trial.num_bytes,
        elapsed_ns: baseline_trial.elapsed_ns,
    };
    emitter.emit(&baseline_trial)?;

    for candidate in CANDIDATES {
        let encoding = (candidate.build)(values)?;
        let result = run_trial(
            encoding.as_ref(),
            candidate.name,
            pass,
            num_accesses,
            Some(baseline),
        );
        emitter.emit(&result)?;
    }
    Ok(())
}

/// Runs the full comparison: header, random pass, then sorted pass.
///
/// A zero element count is a well-defined empty run: the header is emitted
/// and no trials execute.
pub fn run<W: Write>(config: &RunConfig, emitter: &mut ReportEmitter<W>) -> Result<()> {
    emitter.header()?;
    if config.num_elements == 0 {
        return Ok(());
    }

    let random = workload::generate(config.num_elements, config.value_bits, config.seed);
    run_pass(&random, Pass::Random, config.num_accesses, emitter)?;

    let sorted = workload::to_ordered(&random);
    drop(random);
    run_pass(&sorted, Pass::Sorted, config.num_accesses, emitter)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{BitPacked, DacByte};

    #[test]
    fn baseline_trial_reports_exactly_one_hundred_percent() {
        let values = workload::generate(1000, 32, WORKLOAD_SEED);
        let encoding = Uncompressed::build(&values);
        let result = run_trial(&encoding, BASELINE_NAME, Pass::Random, 1000, None);
        assert_eq!(result.memory_pct, 100.0);
        assert_eq!(result.time_pct, 100.0);
        assert_eq!(result.num_bytes, 1000 * 8);
        assert_eq!(result.label, "uncompressed.random");
    }

    #[test]
    fn trial_normalizes_against_given_baseline() {
        let values = workload::generate(1000, 16, WORKLOAD_SEED);
        let encoding = BitPacked::build(&values).unwrap();
        let baseline = Baseline {
            num_bytes: 1000 * 8,
            elapsed_ns: 1_000_000,
        };
        let result = run_trial(&encoding, "bitpacked", Pass::Sorted, 1000, Some(baseline));
        assert_eq!(result.label, "bitpacked.sorted");
        let expected = 100.0 * result.num_bytes as f64 / 8000.0;
        assert!((result.memory_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn byte_size_is_independent_of_trial_order() {
        let values = workload::generate(2000, 20, WORKLOAD_SEED);

        let first = run_trial(
            &DacByte::build(&values).unwrap(),
            "dacbyte",
            Pass::Random,
            100,
            None,
        );
        let _other = run_trial(
            &BitPacked::build(&values).unwrap(),
            "bitpacked",
            Pass::Random,
            100,
            None,
        );
        let again = run_trial(
            &DacByte::build(&values).unwrap(),
            "dacbyte",
            Pass::Random,
            100,
            None,
        );

        assert_eq!(first.num_bytes, again.num_bytes);
    }

    #[test]
    fn empty_run_emits_header_only() {
        let config = RunConfig {
            num_elements: 0,
            ..RunConfig::default()
        };
        let mut emitter = ReportEmitter::new(Vec::new());
        run(&config, &mut emitter).unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("#method"));
    }
}
