//! Simulation output and serialization

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

/// Why the run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Every robot was destroyed
    NoRobots,
    /// No monsters remain on the grid
    NoMonsters,
    /// Occupancy stayed unchanged for the configured threshold of ticks
    Stasis,
    /// The configured tick limit was reached
    TimeLimit,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StopReason::NoRobots => "no robots remain",
            StopReason::NoMonsters => "no monsters remain",
            StopReason::Stasis => "stasis detected",
            StopReason::TimeLimit => "tick limit reached",
        };
        write!(f, "{}", s)
    }
}

/// Aggregate result of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// `None` while the run is still in progress
    pub stop_reason: Option<StopReason>,
    pub ticks: Tick,
    pub initial_robots: usize,
    pub initial_monsters: usize,
    pub robots_alive: usize,
    pub monsters_remaining: usize,
    /// Kills summed over the whole roster, destroyed robots included
    pub total_kills: u32,
    pub kill_efficiency_pct: f64,
    pub mean_kills_per_robot: f64,
    pub simulation_time_ms: u64,
}

impl SimulationOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let status = match self.stop_reason {
            Some(reason) => format!("Stopped after {} ticks ({})", self.ticks, reason),
            None => format!("Running, {} ticks so far", self.ticks),
        };
        format!(
            "{} in {}ms\n\
             Robots alive: {}/{}, monsters remaining: {}\n\
             Monsters eliminated: {} / {}  ({:.1}%)\n\
             Mean kills per robot: {:.3}",
            status,
            self.simulation_time_ms,
            self.robots_alive,
            self.initial_robots,
            self.monsters_remaining,
            self.total_kills,
            self.initial_monsters,
            self.kill_efficiency_pct,
            self.mean_kills_per_robot,
        )
    }
}
