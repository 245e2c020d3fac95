//! Per-robot episodic memory: the append-only log of tick decisions

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Tick};
use crate::simulation::rules::{Action, FrontalState, Rule};
use crate::spatial::orientation::Orientation;

/// One decision record, appended each tick the robot was alive and acted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: Tick,
    /// The rule that fired (exactly one per tick)
    pub rule: Rule,
    pub action: Action,
    /// Sensed frontal state; `None` for R1, which fires before any
    /// frontal sensing
    pub frontal: Option<FrontalState>,
    /// Five-face detection percept; `None` when R1-R4 matched and the
    /// scan was never computed
    pub detection: Option<bool>,
    pub pos_pre: Coord,
    pub ori_pre: Orientation,
    pub pos_post: Coord,
    pub ori_post: Orientation,
    /// Cumulative kill count after this tick
    pub kills: u32,
}

/// Append-only ordered log, exported wholesale at end of run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Memory {
    records: Vec<TickRecord>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TickRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
