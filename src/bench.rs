//! Benchmark driver: stimulus generation, timed kernel loops, and the
//! comparison report.
//!
//! A [`Benchmark`] times two [`VectorMultiply`] strategies over the same
//! operands, scans the outputs for the first disagreeing lane, and
//! produces a [`BenchReport`]. A mismatch is recorded in the report, not
//! treated as a failure of the run itself.

use crate::error::{Error, Result};
use crate::kernel::VectorMultiply;
use std::fmt::Write as FmtWrite;
use std::time::{Duration, Instant};

/// Timed invocations per kernel in a standard run.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Untimed invocations per kernel before the clock starts.
pub const DEFAULT_WARMUP: usize = 100;

/// Standard lane count exercised by the default run.
pub const VECTOR_SIZE: usize = 8;

/// Large lane count exercised by the default run.
pub const LARGE_VECTOR_SIZE: usize = 1024;

/// Deterministic operand pair for a given lane count.
///
/// Lane values stay in `1..=100`, so every product fits in `u16`
/// without wrapping and runs are reproducible across hosts.
#[must_use]
pub fn stimulus(len: usize) -> (Vec<u16>, Vec<u16>) {
    let a = (0..len).map(|i| (i % 100) as u16 + 1).collect();
    let b = (0..len).map(|i| ((len - i) % 100) as u16 + 1).collect();
    (a, b)
}

/// First lane where the two kernels disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Lane index of the disagreement.
    pub index: usize,
    /// Accelerated result at that lane.
    pub hardware: u16,
    /// Baseline result at that lane.
    pub software: u16,
}

/// Scans for the first lane where `hw` and `sw` disagree.
#[must_use]
pub fn first_mismatch(hw: &[u16], sw: &[u16]) -> Option<Mismatch> {
    for (i, (h, s)) in hw.iter().zip(sw).enumerate() {
        if h != s {
            return Some(Mismatch {
                index: i,
                hardware: *h,
                software: *s,
            });
        }
    }
    None
}

/// Timed comparison of an accelerated kernel against a baseline.
///
/// Operand and result buffers are allocated once per run and reused
/// across every invocation, so the timed region covers kernel work
/// only.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    size: usize,
    iterations: usize,
    warmup: usize,
}

impl Benchmark {
    /// Creates a benchmark over `size`-lane vectors with default
    /// iteration and warmup counts.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
        }
    }

    /// Sets the number of timed invocations per kernel.
    #[must_use]
    pub const fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of untimed invocations before the clock starts.
    #[must_use]
    pub const fn warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Times both kernels over identical stimulus and compares their
    /// outputs lane by lane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] for a zero lane count,
    /// [`Error::ZeroIterations`] for a zero iteration count, and
    /// propagates any kernel validation error.
    pub fn run(
        &self,
        hardware: &dyn VectorMultiply,
        software: &dyn VectorMultiply,
    ) -> Result<BenchReport> {
        if self.size == 0 {
            return Err(Error::EmptyVector);
        }
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }

        crate::debug!(
            "bench",
            "size={} iterations={} warmup={}",
            self.size,
            self.iterations,
            self.warmup
        );

        let (a, b) = stimulus(self.size);
        let mut hw_result = vec![0u16; self.size];
        let mut sw_result = vec![0u16; self.size];

        let hardware_time = self.time_kernel(hardware, &a, &b, &mut hw_result)?;
        let software_time = self.time_kernel(software, &a, &b, &mut sw_result)?;

        let mismatch = first_mismatch(&hw_result, &sw_result);
        if let Some(m) = mismatch {
            crate::warn!(
                "bench",
                "lane {} disagreed: hw={} sw={}",
                m.index,
                m.hardware,
                m.software
            );
        }

        Ok(BenchReport {
            size: self.size,
            iterations: self.iterations,
            hardware_time,
            software_time,
            mismatch,
        })
    }

    /// Runs warmup then the timed loop for one kernel. The monotonic
    /// clock brackets the whole loop, not individual calls.
    fn time_kernel(
        &self,
        kernel: &dyn VectorMultiply,
        a: &[u16],
        b: &[u16],
        out: &mut [u16],
    ) -> Result<Duration> {
        for _ in 0..self.warmup {
            kernel.multiply(a, b, out)?;
        }

        let start = Instant::now();
        for _ in 0..self.iterations {
            kernel.multiply(a, b, out)?;
        }
        let elapsed = start.elapsed();

        crate::trace!(
            "bench",
            "{}: {:.6}s over {} calls",
            kernel.name(),
            elapsed.as_secs_f64(),
            self.iterations
        );

        Ok(elapsed)
    }
}

/// Outcome of one timed comparison.
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    /// Lane count of the vectors under test.
    pub size: usize,
    /// Timed invocations per kernel.
    pub iterations: usize,
    /// Wall-clock total for the accelerated loop.
    pub hardware_time: Duration,
    /// Wall-clock total for the baseline loop.
    pub software_time: Duration,
    /// First disagreeing lane, if any.
    pub mismatch: Option<Mismatch>,
}

impl BenchReport {
    /// Baseline time divided by accelerated time.
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.software_time.as_secs_f64() / self.hardware_time.as_secs_f64()
    }

    /// True when every lane matched.
    #[must_use]
    pub fn results_match(&self) -> bool {
        self.mismatch.is_none()
    }

    /// Renders the report block as text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        if let Some(m) = self.mismatch {
            let _ = writeln!(
                output,
                "Mismatch at index {}: HW={}, SW={}",
                m.index, m.hardware, m.software
            );
        }

        let _ = writeln!(output, "Vector Size: {}", self.size);
        let _ = writeln!(
            output,
            "Hardware time: {:.6} seconds",
            self.hardware_time.as_secs_f64()
        );
        let _ = writeln!(
            output,
            "Software time: {:.6} seconds",
            self.software_time.as_secs_f64()
        );
        let _ = writeln!(output, "Speedup: {:.2} x", self.speedup());
        let _ = writeln!(
            output,
            "Results {}",
            if self.results_match() {
                "match"
            } else {
                "do not match"
            }
        );

        output
    }

    /// Writes the report to stdout followed by a blank line.
    pub fn print(&self) {
        print!("{}", self.render());
        println!();
    }
}
