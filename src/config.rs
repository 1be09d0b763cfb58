//! Configuration for benchmark runs.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::bench::{DEFAULT_ITERATIONS, DEFAULT_WARMUP, LARGE_VECTOR_SIZE, VECTOR_SIZE};
use crate::error::{Error, Result};
use crate::kernel::HardwareKernel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Benchmark plan loaded from YAML or built from defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Lane counts to benchmark, in order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,

    /// Timed invocations per kernel.
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Untimed invocations before the clock starts.
    #[serde(default = "default_warmup")]
    pub warmup: usize,

    /// Charge the simulated offload delay on the accelerated path.
    #[serde(default = "default_simulation")]
    pub simulation: bool,

    /// Offload delay per accelerated call, in microseconds.
    #[serde(default = "default_offload_delay_us")]
    pub offload_delay_us: u64,
}

fn default_sizes() -> Vec<usize> {
    vec![VECTOR_SIZE, LARGE_VECTOR_SIZE]
}
fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}
fn default_warmup() -> usize {
    DEFAULT_WARMUP
}
fn default_simulation() -> bool {
    true
}
fn default_offload_delay_us() -> u64 {
    1
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            iterations: default_iterations(),
            warmup: default_warmup(),
            simulation: default_simulation(),
            offload_delay_us: default_offload_delay_us(),
        }
    }
}

impl BenchConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] when the file does not exist,
    /// [`Error::Io`] for any other read failure, and a line-numbered
    /// parse error for invalid YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks the plan for values no run could execute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] when the size list is empty or
    /// contains a zero, and [`Error::ZeroIterations`] for a zero
    /// iteration count.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() || self.sizes.contains(&0) {
            return Err(Error::EmptyVector);
        }
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        Ok(())
    }

    /// Returns the offload delay as a Duration.
    #[must_use]
    pub fn offload_delay(&self) -> Duration {
        Duration::from_micros(self.offload_delay_us)
    }

    /// Builds the accelerated kernel this plan describes.
    #[must_use]
    pub fn hardware_kernel(&self) -> HardwareKernel {
        HardwareKernel::new()
            .with_delay(self.offload_delay())
            .with_simulation(self.simulation)
    }
}
