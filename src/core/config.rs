//! Simulation configuration with documented parameters
//!
//! All tunable values are collected here and validated eagerly before any
//! world construction or simulation step runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Full configuration for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid: GridConfig,
    pub agents: AgentConfig,
    pub dynamics: DynamicsConfig,
    pub run: RunConfig,
    /// Seed for the run RNG. Every random draw (world fill, placement,
    /// monster movement) comes from one generator seeded with this value,
    /// so equal seeds replay identical runs.
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length N of the cubic grid (N >= 2)
    pub side: usize,

    /// Fraction of the interior cells that become traversable.
    ///
    /// The boundary shell always stays blocked; the fraction applies to
    /// the interior only.
    pub free_fraction: f64,

    /// Fraction of the interior cells that stay blocked.
    ///
    /// Must sum with `free_fraction` to 1.0; both are carried explicitly
    /// so a config file states the whole partition.
    pub blocked_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Number of robots placed at start
    pub robots: usize,

    /// Number of monsters placed at start
    pub monsters: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicsConfig {
    /// Monster movement period in ticks. The movement pass only runs on
    /// ticks divisible by this value; 0 disables monster movement entirely.
    pub period: u64,

    /// Per-monster, per-pass movement probability in [0, 1]
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Hard tick limit for the loop
    pub max_ticks: u64,

    /// Consecutive unchanged-snapshot ticks before the run stops as static
    pub stasis_threshold: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                side: 8,
                free_fraction: 0.6,
                blocked_fraction: 0.4,
            },
            agents: AgentConfig {
                robots: 3,
                monsters: 5,
            },
            dynamics: DynamicsConfig {
                period: 2,
                probability: 0.5,
            },
            run: RunConfig {
                max_ticks: 200,
                stasis_threshold: 20,
            },
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency.
    ///
    /// Invalid values are fatal, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.grid.side < 2 {
            return Err(SimError::Config(format!(
                "grid side must be >= 2, got {}",
                self.grid.side
            )));
        }

        if !(0.0..=1.0).contains(&self.grid.free_fraction) {
            return Err(SimError::Config(format!(
                "free_fraction must be in [0, 1], got {}",
                self.grid.free_fraction
            )));
        }

        if !(0.0..=1.0).contains(&self.grid.blocked_fraction) {
            return Err(SimError::Config(format!(
                "blocked_fraction must be in [0, 1], got {}",
                self.grid.blocked_fraction
            )));
        }

        let sum = self.grid.free_fraction + self.grid.blocked_fraction;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(SimError::Config(format!(
                "free_fraction + blocked_fraction must be 1.0, got {}",
                sum
            )));
        }

        if !(0.0..=1.0).contains(&self.dynamics.probability) {
            return Err(SimError::Config(format!(
                "movement probability must be in [0, 1], got {}",
                self.dynamics.probability
            )));
        }

        Ok(())
    }
}
