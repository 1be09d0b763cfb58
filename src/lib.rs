//! # Medir
//!
//! Benchmark harness for vector-multiply offload: times a simulated
//! hardware-accelerated kernel against a scalar CPU baseline over
//! identical operands, verifies the outputs lane by lane, and reports
//! wall-clock speedup.
//!
//! The accelerated path models the call cost of a real offload device
//! (a fixed delay per invocation in simulation mode), so measured
//! speedups show the crossover between per-call overhead and per-lane
//! compute. A theoretical scaling table projects speedup across a
//! doubling sweep of vector sizes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use medir::prelude::*;
//!
//! // Time 10,000 invocations of each kernel over 1024-lane vectors
//! let report = Benchmark::new(1024)
//!     .iterations(10_000)
//!     .run(&HardwareKernel::new(), &SoftwareKernel::new())?;
//!
//! report.print();
//! assert!(report.results_match());
//! ```
//!
//! ## Design
//!
//! - **Deterministic stimulus**: operands derive from lane index alone,
//!   so runs are reproducible across hosts
//! - **Strategy trait**: kernels implement [`kernel::VectorMultiply`],
//!   letting tests inject faulty variants to exercise mismatch paths
//! - **Verification first-class**: every run compares outputs and
//!   reports the first disagreeing lane without aborting

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in timing/report code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Vector-multiply kernels (accelerated path and CPU baseline).
pub mod kernel;

/// Benchmark driver: stimulus, timed loops, comparison report.
pub mod bench;

/// Theoretical scaling model and table.
pub mod scaling;

// ============================================================================
// Support Modules
// ============================================================================

/// YAML benchmark plans and defaults.
pub mod config;

/// Structured debug logging.
pub mod debug;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for medir operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use medir::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bench::{BenchReport, Benchmark, Mismatch};
    pub use crate::config::BenchConfig;
    pub use crate::error::{Error, Result};
    pub use crate::kernel::{HardwareKernel, SoftwareKernel, VectorMultiply};
    pub use crate::scaling::{render_sweep, theoretical_speedup, ScalingRow, ScalingTable};
}

// ============================================================================
// Tests
// ============================================================================
