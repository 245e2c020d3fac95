//! Robot agent state

use crate::agent::memory::Memory;
use crate::core::types::Coord;
use crate::spatial::orientation::Orientation;

/// One hunting robot.
///
/// Robots are created from initial grid occupancy and stay in the roster
/// for the whole run; destruction only clears the alive flag, so kill
/// counts and memories survive to reporting and export.
#[derive(Debug, Clone)]
pub struct Robot {
    pub position: Coord,
    pub orientation: Orientation,
    /// Progress through the orthogonal rotation cycle, 0-3
    pub cycle_index: usize,
    pub kills: u32,
    /// Set when the robot advanced onto a monster (R4); the kill is
    /// credited by R1 on a later tick.
    pub pending_kill: bool,
    pub alive: bool,
    pub memory: Memory,
}

impl Robot {
    /// New robot at a starting cell, facing X+ as all robots do at spawn
    pub fn new(position: Coord) -> Self {
        Self {
            position,
            orientation: Orientation::XPlus,
            cycle_index: 0,
            kills: 0,
            pending_kill: false,
            alive: true,
            memory: Memory::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_robot_faces_x_plus() {
        let robot = Robot::new(Coord::new(1, 2, 3));
        assert_eq!(robot.orientation, Orientation::XPlus);
        assert_eq!(robot.cycle_index, 0);
        assert_eq!(robot.kills, 0);
        assert!(robot.alive);
        assert!(!robot.pending_kill);
        assert!(robot.memory.is_empty());
    }
}
