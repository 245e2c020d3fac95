//! Simulation driver: tick loop, termination, metrics

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::robot::Robot;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Tick;
use crate::simulation::monsters;
use crate::simulation::output::{SimulationOutput, StopReason};
use crate::simulation::rules;
use crate::simulation::snapshot::WorldSnapshot;
use crate::spatial::cube::{CellKind, Cube};
use crate::world::{builder, placement};

/// One simulation run over an owned cube and robot roster.
///
/// Strictly sequential: monster dynamics, then each live robot in roster
/// order, then termination checks. Deterministic under a fixed seed.
pub struct Simulation {
    cube: Cube,
    robots: Vec<Robot>,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    tick: Tick,
    stasis_counter: u64,
    prev_snapshot: WorldSnapshot,
    initial_robots: usize,
    initial_monsters: usize,
    stop: Option<StopReason>,
    started: Instant,
}

impl Simulation {
    /// Build a world from the configuration and populate it
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut cube = builder::build_cube(&config.grid, &mut rng);
        placement::place_agents(&mut cube, &config.agents, &mut rng)?;

        Ok(Self::from_world(cube, config, rng))
    }

    /// Drive a prebuilt world. Robots are instantiated from current cube
    /// occupancy in grid scan order.
    pub fn from_world(cube: Cube, config: SimulationConfig, rng: ChaCha8Rng) -> Self {
        let robots: Vec<Robot> = cube
            .positions_of(CellKind::Robot)
            .into_iter()
            .map(Robot::new)
            .collect();
        let initial_robots = robots.len();
        let initial_monsters = cube.count(CellKind::Monster);
        let prev_snapshot = WorldSnapshot::capture(&cube);

        tracing::info!(
            side = cube.side(),
            robots = initial_robots,
            monsters = initial_monsters,
            seed = config.seed,
            "simulation ready"
        );

        Self {
            cube,
            robots,
            config,
            rng,
            tick: 0,
            stasis_counter: 0,
            prev_snapshot,
            initial_robots,
            initial_monsters,
            stop: None,
            started: Instant::now(),
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Monster cells plus live robots carrying a pending kill, so a
    /// monster overrun by R4 is not reported eliminated before the
    /// following R1 tick credits it
    fn monsters_remaining(&self) -> usize {
        let pending = self
            .robots
            .iter()
            .filter(|r| r.alive && r.pending_kill)
            .count();
        self.cube.count(CellKind::Monster) + pending
    }

    /// Advance one tick. Returns the stop reason once the run is over;
    /// further calls are no-ops.
    pub fn step(&mut self) -> Option<StopReason> {
        if self.stop.is_some() {
            return self.stop;
        }
        if self.tick >= self.config.run.max_ticks {
            self.stop = Some(StopReason::TimeLimit);
            return self.stop;
        }
        self.tick += 1;

        let moved = monsters::run_monster_pass(
            &mut self.cube,
            &self.config.dynamics,
            self.tick,
            &mut self.rng,
        );

        for robot in self.robots.iter_mut().filter(|r| r.alive) {
            rules::run_robot_tick(robot, &mut self.cube, self.tick);
        }

        let snapshot = WorldSnapshot::capture(&self.cube);
        if snapshot == self.prev_snapshot {
            self.stasis_counter += 1;
        } else {
            self.stasis_counter = 0;
            self.prev_snapshot = snapshot;
        }

        let robots_alive = self.robots.iter().filter(|r| r.alive).count();
        let monsters_remaining = self.monsters_remaining();
        tracing::debug!(
            tick = self.tick,
            robots_alive,
            monsters_remaining,
            monsters_moved = moved,
            stasis = self.stasis_counter,
            "tick complete"
        );

        if robots_alive == 0 {
            self.stop = Some(StopReason::NoRobots);
        } else if monsters_remaining == 0 {
            self.stop = Some(StopReason::NoMonsters);
        } else if self.stasis_counter >= self.config.run.stasis_threshold {
            self.stop = Some(StopReason::Stasis);
        }

        if let Some(reason) = self.stop {
            tracing::info!(tick = self.tick, %reason, "simulation stopped");
        }
        self.stop
    }

    /// Run to completion and report metrics
    pub fn run(&mut self) -> SimulationOutput {
        while self.step().is_none() {}
        self.output()
    }

    /// Metrics for the run so far
    pub fn output(&self) -> SimulationOutput {
        let total_kills: u32 = self.robots.iter().map(|r| r.kills).sum();

        let kill_efficiency_pct = if self.initial_monsters > 0 {
            100.0 * f64::from(total_kills) / self.initial_monsters as f64
        } else {
            0.0
        };
        let mean_kills_per_robot =
            f64::from(total_kills) / self.initial_robots.max(1) as f64;

        SimulationOutput {
            stop_reason: self.stop,
            ticks: self.tick,
            initial_robots: self.initial_robots,
            initial_monsters: self.initial_monsters,
            robots_alive: self.robots.iter().filter(|r| r.alive).count(),
            monsters_remaining: self.monsters_remaining(),
            total_kills,
            kill_efficiency_pct,
            mean_kills_per_robot,
            simulation_time_ms: self.started.elapsed().as_millis() as u64,
        }
    }
}
