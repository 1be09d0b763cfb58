//! End-to-end harness tests through the public API.
//!
//! Covers the full pipeline: plan -> kernels -> timed run -> report,
//! plus the mismatch path with an injected faulty kernel.
//!
//! Run: cargo test --test harness_test

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::time::Duration;

use medir::bench::{Benchmark, LARGE_VECTOR_SIZE, VECTOR_SIZE};
use medir::config::BenchConfig;
use medir::error::Result;
use medir::kernel::{HardwareKernel, SoftwareKernel, VectorMultiply};
use medir::scaling::ScalingTable;

// ============================================================================
// STANDARD RUN: both default sizes, small iteration counts
// ============================================================================

#[test]
fn standard_sizes_produce_matching_reports() {
    let hardware = HardwareKernel::new();
    let software = SoftwareKernel::new();

    for size in [VECTOR_SIZE, LARGE_VECTOR_SIZE] {
        let report = Benchmark::new(size)
            .iterations(3)
            .warmup(1)
            .run(&hardware, &software)
            .unwrap();

        assert_eq!(report.size, size);
        assert_eq!(report.iterations, 3);
        assert!(
            report.results_match(),
            "kernels disagreed at size {size}: {:?}",
            report.mismatch
        );
    }
}

#[test]
fn accelerated_loop_charges_at_least_the_offload_delay() {
    let report = Benchmark::new(VECTOR_SIZE)
        .iterations(100)
        .warmup(0)
        .run(&HardwareKernel::new(), &SoftwareKernel::new())
        .unwrap();

    // sleep() never returns early, so 100 calls bound the loop from below
    assert!(
        report.hardware_time >= Duration::from_micros(100),
        "accelerated loop finished in {:?}, below the charged delay",
        report.hardware_time
    );
}

#[test]
fn runs_are_deterministic_lane_for_lane() {
    let software = SoftwareKernel::new();
    let (a, b) = medir::bench::stimulus(256);

    let mut first = vec![0u16; 256];
    let mut second = vec![0u16; 256];
    software.multiply(&a, &b, &mut first).unwrap();
    software.multiply(&a, &b, &mut second).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// REPORT FORMAT: the printed block, line by line
// ============================================================================

#[test]
fn report_block_has_expected_lines() {
    let report = Benchmark::new(VECTOR_SIZE)
        .iterations(2)
        .warmup(0)
        .run(&HardwareKernel::new(), &SoftwareKernel::new())
        .unwrap();

    let text = report.render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Vector Size: 8");
    assert!(lines[1].starts_with("Hardware time: "));
    assert!(lines[1].ends_with(" seconds"));
    assert!(lines[2].starts_with("Software time: "));
    assert!(lines[2].ends_with(" seconds"));
    assert!(lines[3].starts_with("Speedup: "));
    assert!(lines[3].ends_with(" x"));
    assert_eq!(lines[4], "Results match");
}

// ============================================================================
// MISMATCH PATH: injected fault is reported, never fatal
// ============================================================================

/// Flips one lane so the comparison must fire.
struct StuckLaneKernel {
    lane: usize,
}

impl VectorMultiply for StuckLaneKernel {
    fn multiply(&self, a: &[u16], b: &[u16], out: &mut [u16]) -> Result<()> {
        SoftwareKernel::new().multiply(a, b, out)?;
        out[self.lane] = 0xFFFF;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stuck-lane"
    }
}

#[test]
fn injected_fault_is_reported_not_fatal() {
    let faulty = StuckLaneKernel { lane: 5 };

    let report = Benchmark::new(VECTOR_SIZE)
        .iterations(2)
        .warmup(0)
        .run(&faulty, &SoftwareKernel::new())
        .unwrap();

    assert!(!report.results_match());

    let m = report.mismatch.unwrap();
    assert_eq!(m.index, 5);
    assert_eq!(m.hardware, 0xFFFF);

    let text = report.render();
    assert!(text.starts_with("Mismatch at index 5: HW=65535, SW="));
    assert!(text.contains("Results do not match"));
}

// ============================================================================
// SCALING TABLE: default sweep end to end
// ============================================================================

#[test]
fn scaling_table_covers_default_sweep() {
    let rows = ScalingTable::new().rows().unwrap();

    let sizes: Vec<usize> = rows.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096]);

    let text = ScalingTable::new().render().unwrap();
    assert!(text.contains("| 8           | 4.00      |"));
    assert!(text.contains("| 4096        | 4088.02   |"));
}

// ============================================================================
// CONFIG PIPELINE: YAML plan -> kernel -> run
// ============================================================================

#[test]
fn yaml_plan_drives_a_full_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sizes: [16]").unwrap();
    writeln!(file, "iterations: 4").unwrap();
    writeln!(file, "warmup: 0").unwrap();
    writeln!(file, "offload_delay_us: 0").unwrap();

    let config = BenchConfig::load(file.path()).unwrap();
    config.validate().unwrap();

    let hardware = config.hardware_kernel();
    assert!(hardware.is_simulation());
    assert_eq!(hardware.offload_delay(), Duration::ZERO);

    for &size in &config.sizes {
        let report = Benchmark::new(size)
            .iterations(config.iterations)
            .warmup(config.warmup)
            .run(&hardware, &SoftwareKernel::new())
            .unwrap();

        assert_eq!(report.size, 16);
        assert!(report.results_match());
    }
}

#[test]
fn invalid_plan_is_rejected_before_running() {
    let config = BenchConfig {
        sizes: vec![],
        ..BenchConfig::default()
    };

    assert!(config.validate().is_err());
}
