//! Occupancy snapshots for stasis detection

use crate::core::types::Coord;
use crate::spatial::cube::{CellKind, Cube};

/// Sorted robot and monster positions at one point in time.
///
/// Compared for equality only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSnapshot {
    robots: Vec<Coord>,
    monsters: Vec<Coord>,
}

impl WorldSnapshot {
    /// Capture the current occupancy. `positions_of` scans in ascending
    /// (x, y, z) order, which is exactly `Coord`'s sort order.
    pub fn capture(cube: &Cube) -> Self {
        Self {
            robots: cube.positions_of(CellKind::Robot),
            monsters: cube.positions_of(CellKind::Monster),
        }
    }
}
