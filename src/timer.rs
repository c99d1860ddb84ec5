//! Scoped wall-clock measurement.
//!
//! A [`Timer`] records its start on construction and finalizes exactly once
//! when dropped, on every exit path including unwinding. Diagnostics go to
//! stderr; the report stream on stdout stays machine-parseable.

use std::time::Instant;

/// Measures elapsed wall-clock time between construction (or [`restart`])
/// and [`stop`] (or drop).
///
/// [`restart`]: Timer::restart
/// [`stop`]: Timer::stop
#[derive(Debug)]
pub struct Timer {
    name: String,
    start: Instant,
    stop: Option<Instant>,
    reported: bool,
}

impl Timer {
    /// Starts a new timer and announces it on stderr.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        eprintln!("Constructed with name {name}");
        Self {
            name,
            start: Instant::now(),
            stop: None,
            reported: false,
        }
    }

    /// Freezes the end timestamp. Later calls to [`elapsed_ns`] and the
    /// drop-time report use this instant.
    ///
    /// [`elapsed_ns`]: Timer::elapsed_ns
    pub fn stop(&mut self) {
        self.stop = Some(Instant::now());
    }

    /// Resets the start timestamp without reporting, for reuse.
    pub fn restart(&mut self) {
        self.stop = None;
        self.start = Instant::now();
    }

    /// Late-binds the label; the trial name is often only known once the
    /// trial begins.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Elapsed nanoseconds between start and stop (or now, if not stopped).
    pub fn elapsed_ns(&self) -> u64 {
        let end = self.stop.unwrap_or_else(Instant::now);
        end.duration_since(self.start).as_nanos() as u64
    }

    /// Writes the timing line to stderr and returns the elapsed nanoseconds.
    /// Marks the measurement finalized, so drop will not report again.
    pub fn report(&mut self) -> u64 {
        let ns = self.elapsed_ns();
        eprintln!("Took {ns}ns for task '{}'", self.name);
        self.reported = true;
        ns
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.reported {
            if self.stop.is_none() {
                self.stop();
            }
            self.report();
        }
    }
}
