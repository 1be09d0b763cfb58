//! Vector-multiply kernels: the offload path and the CPU baseline.
//!
//! Both kernels compute the same element-wise product over `u16` lanes.
//! [`HardwareKernel`] models the accelerator call path (in simulation it
//! charges a fixed offload delay before computing), while
//! [`SoftwareKernel`] is the plain serial loop the speedup is measured
//! against.

use crate::error::{Error, Result};
use std::thread;
use std::time::Duration;

/// Offload round-trip delay charged per simulated accelerator call.
///
/// Matches the smallest sleep quantum the host OS grants, which is what
/// a driver doing a blocking DMA handoff would pay at minimum.
pub const DEFAULT_OFFLOAD_DELAY: Duration = Duration::from_micros(1);

/// Strategy for element-wise multiplication of `u16` vectors.
///
/// Implementations multiply lane `i` of `a` by lane `i` of `b` into
/// `out[i]`, wrapping on overflow. All three slices must share a length.
pub trait VectorMultiply {
    /// Multiplies `a` and `b` element-wise into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] for zero-length input and
    /// [`Error::LaneCountMismatch`] when the slice lengths disagree.
    fn multiply(&self, a: &[u16], b: &[u16], out: &mut [u16]) -> Result<()>;

    /// Short label used in reports and debug output.
    fn name(&self) -> &'static str;
}

fn check_lanes(a: &[u16], b: &[u16], out: &[u16]) -> Result<()> {
    if a.is_empty() {
        return Err(Error::EmptyVector);
    }
    if a.len() != b.len() || a.len() != out.len() {
        return Err(Error::LaneCountMismatch {
            a_len: a.len(),
            b_len: b.len(),
            out_len: out.len(),
        });
    }
    Ok(())
}

/// CPU baseline: one multiply per loop iteration, no offload cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareKernel;

impl SoftwareKernel {
    /// Creates the baseline kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VectorMultiply for SoftwareKernel {
    fn multiply(&self, a: &[u16], b: &[u16], out: &mut [u16]) -> Result<()> {
        check_lanes(a, b, out)?;

        for i in 0..a.len() {
            out[i] = a[i].wrapping_mul(b[i]);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "software"
    }
}

/// Accelerator call path.
///
/// In simulation mode each call sleeps for the configured offload delay
/// before computing, modeling the DMA handoff and completion wait of
/// the real device. With simulation off the delay is skipped and the
/// multiply runs directly; this is where a device driver would be wired
/// in.
#[derive(Debug, Clone, Copy)]
pub struct HardwareKernel {
    offload_delay: Duration,
    simulation: bool,
}

impl HardwareKernel {
    /// Creates a simulated accelerator with the default offload delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offload_delay: DEFAULT_OFFLOAD_DELAY,
            simulation: true,
        }
    }

    /// Sets the per-call offload delay charged in simulation mode.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.offload_delay = delay;
        self
    }

    /// Enables or disables simulation mode.
    #[must_use]
    pub const fn with_simulation(mut self, simulation: bool) -> Self {
        self.simulation = simulation;
        self
    }

    /// Returns the configured offload delay.
    #[must_use]
    pub const fn offload_delay(&self) -> Duration {
        self.offload_delay
    }

    /// Returns true when the kernel charges the simulated offload delay.
    #[must_use]
    pub const fn is_simulation(&self) -> bool {
        self.simulation
    }
}

impl Default for HardwareKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorMultiply for HardwareKernel {
    fn multiply(&self, a: &[u16], b: &[u16], out: &mut [u16]) -> Result<()> {
        check_lanes(a, b, out)?;

        if self.simulation {
            thread::sleep(self.offload_delay);
        }

        for ((x, y), lane) in a.iter().zip(b).zip(out.iter_mut()) {
            *lane = x.wrapping_mul(*y);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "hardware"
    }
}
