//! Tab-separated report emission.
//!
//! One header line, then one row per trial. The sink is any [`io::Write`],
//! stdout in the binary and an in-memory buffer in tests.

use std::io::{self, Write};

/// Column header preceding all trial rows.
pub const HEADER: &str = "#method\tnum_bytes\tns_required\t%memory_vs_unc\t%ns_vs_unc";

/// The measurement of one (encoding, pass) trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// Encoding name suffixed with the pass, e.g. `dacbyte.sorted`.
    pub label: String,
    /// Serialized byte size of the built representation.
    pub num_bytes: usize,
    /// Wall-clock nanoseconds for one sweep over the access set.
    pub elapsed_ns: u64,
    /// `100 * num_bytes / baseline_bytes`; exactly 100 for the baseline.
    pub memory_pct: f64,
    /// `100 * elapsed_ns / baseline_ns`; exactly 100 for the baseline.
    pub time_pct: f64,
}

/// Writes the report stream: a header, then one line per trial.
#[derive(Debug)]
pub struct ReportEmitter<W: Write> {
    sink: W,
}

impl<W: Write> ReportEmitter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes the header line. Call once, before any trial row.
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.sink, "{HEADER}")
    }

    /// Writes one trial row.
    pub fn emit(&mut self, result: &TrialResult) -> io::Result<()> {
        writeln!(
            self.sink,
            "{}\t{}\t{}\t{:.4}%\t{:.4}%",
            result.label, result.num_bytes, result.elapsed_ns, result.memory_pct, result.time_pct
        )
    }

    /// Consumes the emitter, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
