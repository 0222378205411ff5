//! Run configuration for a sweep reconstruction.
//!
//! Policy
//! - Defaults reproduce the reference animation (150 frames over a
//!   1024-column grid). Callers override individual fields; the CLI layers
//!   flags over an optional JSON file.

use serde::Deserialize;

use crate::beachline::EdgePolicy;

/// Frames per sweep when nothing else is requested.
pub const DEFAULT_FRAMES: usize = 150;
/// Sample columns across the scene's x-extent.
pub const DEFAULT_RESOLUTION: usize = 1024;

/// Sweep configuration.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepCfg {
    /// Number of directrix positions, from the scene's top toward its bottom.
    pub frames: usize,
    /// Number of grid columns (≥ 1).
    pub resolution: usize,
    pub edge_policy: EdgePolicy,
    /// Worker threads for frame precompute. `0` means available parallelism.
    pub threads: usize,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            resolution: DEFAULT_RESOLUTION,
            edge_policy: EdgePolicy::default(),
            threads: 0,
        }
    }
}

impl SweepCfg {
    /// Resolved worker count: the configured value, or the machine's available
    /// parallelism when `threads == 0`. Never zero.
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}
