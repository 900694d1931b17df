//! Simulation configuration.

use crate::constants::DEFAULT_TARGET_LEVEL;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Level index players are driven toward.
    pub target_level: usize,

    /// Random seed for reproducibility (None = seeded from entropy).
    pub seed: Option<u64>,

    /// Optional safety cap on simulated days. Off by default; the base model
    /// runs until every player reaches the target or runs out of levels.
    pub max_days: Option<u32>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-day trace).
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_level: DEFAULT_TARGET_LEVEL,
            seed: None,
            max_days: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a short deterministic balance check.
    pub fn quick_check(target_level: usize) -> Self {
        Self {
            target_level,
            seed: Some(42),
            max_days: Some(365),
            verbosity: 0,
        }
    }
}
