//! Theoretical scaling model and its report tables.
//!
//! The model assumes the accelerator computes all lanes in parallel at
//! constant cost while the baseline scales linearly with lane count, so
//! projected speedup approaches linear as vectors grow but never quite
//! reaches it. Small vectors are further discounted by a fixed-overhead
//! term. [`render_sweep`] lays measured results alongside the
//! projection; the [`ScalingTable`] itself never consults measurements.

use crate::bench::BenchReport;
use crate::error::{Error, Result};
use std::fmt::Write as FmtWrite;

/// Projected speedup for a vector of `size` lanes.
///
/// Model: `size / (1 + 8 / size)`. The `8 / size` term charges the
/// offload overhead, which dominates small vectors and vanishes for
/// large ones.
#[must_use]
pub fn theoretical_speedup(size: usize) -> f64 {
    let n = size as f64;
    n / (1.0 + 8.0 / n)
}

/// One row of the scaling table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingRow {
    /// Lane count for this row.
    pub size: usize,
    /// Projected speedup at that lane count.
    pub speedup: f64,
}

/// Scaling table over a doubling sweep of vector sizes.
///
/// Defaults to the `8..=4096` sweep. Follows the builder pattern:
/// configure, then [`ScalingTable::render`] or [`ScalingTable::print`].
#[derive(Debug, Clone, Copy)]
pub struct ScalingTable {
    start: usize,
    end: usize,
}

impl ScalingTable {
    /// Default first lane count of the sweep.
    pub const DEFAULT_START: usize = 8;

    /// Default last lane count of the sweep.
    pub const DEFAULT_END: usize = 4096;

    /// Creates the default `8..=4096` table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }

    /// Sets the first lane count of the sweep.
    #[must_use]
    pub const fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets the last lane count of the sweep.
    #[must_use]
    pub const fn end(mut self, end: usize) -> Self {
        self.end = end;
        self
    }

    /// Computes the rows of the sweep, doubling from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] for a zero start and
    /// [`Error::InvalidSweepRange`] when start exceeds end.
    pub fn rows(&self) -> Result<Vec<ScalingRow>> {
        if self.start == 0 {
            return Err(Error::EmptyVector);
        }
        if self.start > self.end {
            return Err(Error::InvalidSweepRange {
                start: self.start,
                end: self.end,
            });
        }

        let mut rows = Vec::new();
        let mut size = self.start;
        while size <= self.end {
            rows.push(ScalingRow {
                size,
                speedup: theoretical_speedup(size),
            });
            size = match size.checked_mul(2) {
                Some(next) => next,
                None => break,
            };
        }

        Ok(rows)
    }

    /// Renders the table as text.
    ///
    /// # Errors
    ///
    /// Propagates sweep validation errors from [`ScalingTable::rows`].
    pub fn render(&self) -> Result<String> {
        let rows = self.rows()?;
        let mut output = String::new();

        let _ = writeln!(output, "Scaling Performance (simulated):");
        let _ = writeln!(output, "----------------------------");
        let _ = writeln!(output, "| Vector Size | Speedup   |");
        let _ = writeln!(output, "----------------------------");
        for row in rows {
            let _ = writeln!(output, "| {:<11} | {:<9.2} |", row.size, row.speedup);
        }
        let _ = writeln!(output, "----------------------------");

        let _ = writeln!(output);
        let _ = writeln!(output, "Note: This shows theoretical scaling based on");
        let _ = writeln!(output, "parallelism. Actual hardware would have additional");
        let _ = writeln!(output, "factors like memory bandwidth and transfer overhead.");

        Ok(output)
    }

    /// Writes the table to stdout preceded by a blank line.
    ///
    /// # Errors
    ///
    /// Propagates sweep validation errors from [`ScalingTable::rows`].
    pub fn print(&self) -> Result<()> {
        let text = self.render()?;
        println!();
        print!("{text}");
        Ok(())
    }
}

impl Default for ScalingTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a sweep summary: measured speedup per size next to the
/// theoretical projection, with a verification tally.
#[must_use]
pub fn render_sweep(reports: &[BenchReport]) -> String {
    let rule = "-".repeat(70);
    let mut output = String::new();

    let _ = writeln!(output, "Sweep Results:");
    let _ = writeln!(output, "{rule}");
    let _ = writeln!(
        output,
        "{:<12} {:<13} {:<13} {:<10} {:<12} {}",
        "Vector Size", "Hardware (s)", "Software (s)", "Speedup", "Theoretical", "Match"
    );
    let _ = writeln!(output, "{rule}");

    let mut matched = 0;
    for report in reports {
        if report.results_match() {
            matched += 1;
        }
        let _ = writeln!(
            output,
            "{:<12} {:<13.6} {:<13.6} {:<10.2} {:<12.2} {}",
            report.size,
            report.hardware_time.as_secs_f64(),
            report.software_time.as_secs_f64(),
            report.speedup(),
            theoretical_speedup(report.size),
            if report.results_match() { "yes" } else { "NO" }
        );
    }

    let _ = writeln!(output, "{rule}");
    let _ = writeln!(output, "Verified: {matched}/{} sizes", reports.len());

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_speedup_at_sweep_start() {
        // 8 / (1 + 8/8) = 4 exactly
        assert_relative_eq!(theoretical_speedup(8), 4.0);
    }

    #[test]
    fn test_speedup_at_sweep_end() {
        // 4096 / (1 + 8/4096) = 2097152/513
        assert_relative_eq!(
            theoretical_speedup(4096),
            2_097_152.0 / 513.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_default_sweep_rows() {
        let rows = ScalingTable::new().rows().unwrap();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].size, 8);
        assert_eq!(rows[9].size, 4096);
    }

    #[test]
    fn test_sweep_doubles_from_any_start() {
        let rows = ScalingTable::new().start(10).end(50).rows().unwrap();

        let sizes: Vec<usize> = rows.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![10, 20, 40]);
    }

    #[test]
    fn test_speedup_monotonic_over_sweep() {
        let rows = ScalingTable::new().rows().unwrap();

        for pair in rows.windows(2) {
            assert!(
                pair[1].speedup > pair[0].speedup,
                "speedup must grow with size: {} -> {}",
                pair[0].speedup,
                pair[1].speedup
            );
        }
    }

    #[test]
    fn test_rows_rejects_zero_start() {
        let err = ScalingTable::new().start(0).rows().unwrap_err();
        assert!(matches!(err, Error::EmptyVector));
    }

    #[test]
    fn test_rows_rejects_inverted_range() {
        let err = ScalingTable::new().start(64).end(8).rows().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSweepRange { start: 64, end: 8 }
        ));
    }

    #[test]
    fn test_render_table_layout() {
        let text = ScalingTable::new().render().unwrap();

        assert!(text.starts_with("Scaling Performance (simulated):\n"));
        assert!(text.contains("| Vector Size | Speedup   |"));
        assert!(text.contains("| 8           | 4.00      |"));
        assert!(text.contains("| 4096        | 4088.02   |"));
        assert!(text.contains("Note: This shows theoretical scaling"));
    }

    #[test]
    fn test_render_sweep_summary() {
        use crate::bench::Mismatch;
        use std::time::Duration;

        let reports = vec![
            BenchReport {
                size: 8,
                iterations: 100,
                hardware_time: Duration::from_micros(400),
                software_time: Duration::from_micros(100),
                mismatch: None,
            },
            BenchReport {
                size: 16,
                iterations: 100,
                hardware_time: Duration::from_micros(400),
                software_time: Duration::from_micros(200),
                mismatch: Some(Mismatch {
                    index: 0,
                    hardware: 2,
                    software: 1,
                }),
            },
        ];

        let text = render_sweep(&reports);

        assert!(text.starts_with("Sweep Results:\n"));
        assert!(text.contains("Vector Size"));
        assert!(text.contains("Theoretical"));
        // 8 lanes project to 4.00, measured 0.25
        assert!(text.contains("0.25"));
        assert!(text.contains("4.00"));
        assert!(text.contains("yes"));
        assert!(text.contains("NO"));
        assert!(text.ends_with("Verified: 1/2 sizes\n"));
    }

    #[test]
    fn test_render_sweep_empty() {
        let text = render_sweep(&[]);
        assert!(text.ends_with("Verified: 0/0 sizes\n"));
    }
}
