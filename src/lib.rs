//! # cseq-bench
//!
//! A comparative benchmarking harness for compact (bit-efficient) integer
//! sequence representations. For a fixed workload it measures, per
//! encoding, the serialized footprint and the wall-clock cost of 50,000
//! random reads, normalized against a fixed-width `Vec<u64>` baseline.
//!
//! A run makes two passes over the same value multiset: `random`
//! (generation order) and `sorted` (non-decreasing), since some encodings
//! gain from monotone input. Workload generation and access sampling are
//! seeded deterministically, so every encoding in a run is probed at the
//! same positions and two runs of the same configuration see identical
//! inputs.
//!
//! ## Quick start
//!
//! ```
//! use cseq_bench::{ReportEmitter, RunConfig};
//!
//! let config = RunConfig {
//!     num_elements: 1000,
//!     ..RunConfig::default()
//! };
//! let mut emitter = ReportEmitter::new(Vec::new());
//! cseq_bench::run(&config, &mut emitter).unwrap();
//!
//! let report = String::from_utf8(emitter.into_inner()).unwrap();
//! assert!(report.starts_with("#method"));
//! ```
//!
//! Candidate encodings are consumed only through the [`EncodedSequence`]
//! contract; see [`encoding::CANDIDATES`] for the declared run order.

pub mod access;
pub mod encoding;
pub mod report;
pub mod runner;
pub mod timer;
pub mod workload;

pub use encoding::EncodedSequence;
pub use report::{ReportEmitter, TrialResult};
pub use runner::{run, Pass, RunConfig};
pub use timer::Timer;
