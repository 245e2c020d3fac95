//! Robot decision engine: strictly prioritized rules R1-R8
//!
//! Each tick a live robot evaluates the rules in fixed priority order and
//! exactly one fires. R1 runs before any frontal sensing; R2-R4 depend on
//! the frontal cell only; the five-face detection percept is computed
//! lazily, only when R1-R4 all failed.

use serde::{Deserialize, Serialize};

use crate::agent::memory::TickRecord;
use crate::agent::robot::Robot;
use crate::core::types::{Coord, Tick};
use crate::spatial::cube::{CellKind, Cube};
use crate::spatial::orientation::{rotate90, Orientation};

/// The rule that fired for a tick. R1-R8 are the codes used in the
/// exported memory artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// R1: the robot's own cell holds a monster (or a pending kill from a
    /// prior R4 advance) - annihilate
    SelfCellMonster,
    /// R2: frontal cell out of bounds or blocked - rotate
    FrontalBlocked,
    /// R3: frontal cell holds another robot - rotate.
    /// Local collision-avoidance stand-in; there is no cross-robot
    /// negotiation in this version.
    FrontalRobot,
    /// R4: frontal cell holds a monster - advance onto it
    FrontalMonster,
    /// R5: monster detected in the five-face window, frontal free - advance
    DetectionAdvance,
    /// R6: monster detected, frontal not free - rotate
    DetectionRotate,
    /// R7: nothing detected, frontal free - advance
    PatrolAdvance,
    /// R8: fallback - rotate
    PatrolRotate,
}

impl Rule {
    /// Wire code used in logs and CSV exports
    pub fn code(&self) -> &'static str {
        match self {
            Rule::SelfCellMonster => "R1",
            Rule::FrontalBlocked => "R2",
            Rule::FrontalRobot => "R3",
            Rule::FrontalMonster => "R4",
            Rule::DetectionAdvance => "R5",
            Rule::DetectionRotate => "R6",
            Rule::PatrolAdvance => "R7",
            Rule::PatrolRotate => "R8",
        }
    }
}

/// What the robot did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Rotate,
    Advance,
    Annihilate,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Rotate => "rotate",
            Action::Advance => "advance",
            Action::Annihilate => "annihilate",
        };
        write!(f, "{}", s)
    }
}

/// Sensed state of the frontal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontalState {
    OutOfBounds,
    Empty,
    Free,
    Robot,
    Monster,
}

impl FrontalState {
    fn sense(cube: &Cube, c: Coord) -> Self {
        match cube.try_kind(c) {
            None => FrontalState::OutOfBounds,
            Some(CellKind::Empty) => FrontalState::Empty,
            Some(CellKind::Free) => FrontalState::Free,
            Some(CellKind::Robot) => FrontalState::Robot,
            Some(CellKind::Monster) => FrontalState::Monster,
        }
    }
}

impl std::fmt::Display for FrontalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FrontalState::OutOfBounds => "out_of_bounds",
            FrontalState::Empty => "empty",
            FrontalState::Free => "free",
            FrontalState::Robot => "robot",
            FrontalState::Monster => "monster",
        };
        write!(f, "{}", s)
    }
}

/// Five-face detection: scan the frontal cell and the four lateral cells
/// (never the rear) for a monster within bounds
fn wide_range_detection(cube: &Cube, position: Coord, orientation: Orientation) -> bool {
    let frontal = orientation.frontal(position);
    if cube.try_kind(frontal) == Some(CellKind::Monster) {
        return true;
    }
    orientation
        .laterals(position)
        .iter()
        .any(|&c| cube.try_kind(c) == Some(CellKind::Monster))
}

/// Run one decision tick for a live robot. Mutates the robot and the cube,
/// appends one memory record, and returns whether the robot is still active.
pub fn run_robot_tick(robot: &mut Robot, cube: &mut Cube, tick: Tick) -> bool {
    let pos_pre = robot.position;
    let ori_pre = robot.orientation;

    // R1 fires before any frontal sensing. After an R4 advance the monster
    // mark was overwritten by the robot mark, so the pending-kill flag is
    // what carries the evidence to this check.
    if cube.kind(robot.position) == CellKind::Monster || robot.pending_kill {
        cube.set(robot.position, CellKind::Free);
        robot.kills += 1;
        robot.pending_kill = false;
        robot.alive = false;
        robot.memory.push(TickRecord {
            tick,
            rule: Rule::SelfCellMonster,
            action: Action::Annihilate,
            frontal: None,
            detection: None,
            pos_pre,
            ori_pre,
            pos_post: robot.position,
            ori_post: robot.orientation,
            kills: robot.kills,
        });
        return false;
    }

    let frontal_coord = robot.orientation.frontal(robot.position);
    let frontal = FrontalState::sense(cube, frontal_coord);

    // Lazy percept: only computed once R1-R4 cannot match
    let detection = match frontal {
        FrontalState::Free => Some(wide_range_detection(
            cube,
            robot.position,
            robot.orientation,
        )),
        _ => None,
    };

    let rule = classify(frontal, detection);
    let action = match rule {
        Rule::FrontalMonster => {
            advance(robot, cube, frontal_coord);
            robot.pending_kill = true;
            Action::Advance
        }
        Rule::DetectionAdvance | Rule::PatrolAdvance => {
            advance(robot, cube, frontal_coord);
            Action::Advance
        }
        _ => {
            rotate(robot);
            Action::Rotate
        }
    };

    robot.memory.push(TickRecord {
        tick,
        rule,
        action,
        frontal: Some(frontal),
        detection,
        pos_pre,
        ori_pre,
        pos_post: robot.position,
        ori_post: robot.orientation,
        kills: robot.kills,
    });

    true
}

/// First-match dispatch over R2-R8, given the sensed frontal state and the
/// lazily computed detection percept. Total: R8 catches any remaining case.
fn classify(frontal: FrontalState, detection: Option<bool>) -> Rule {
    match frontal {
        FrontalState::OutOfBounds | FrontalState::Empty => Rule::FrontalBlocked,
        FrontalState::Robot => Rule::FrontalRobot,
        FrontalState::Monster => Rule::FrontalMonster,
        FrontalState::Free => match detection {
            Some(true) => Rule::DetectionAdvance,
            Some(false) => Rule::PatrolAdvance,
            // Detection true with a blocked frontal (R6) and the blanket
            // fallback (R8) cannot arise through this dispatch: R2-R4
            // already consumed every non-free frontal state. The variants
            // stay in the rule vocabulary for the exported logs.
            None => Rule::PatrolRotate,
        },
    }
}

fn rotate(robot: &mut Robot) {
    let (next, next_index) = rotate90(robot.orientation, robot.cycle_index);
    robot.orientation = next;
    robot.cycle_index = next_index;
}

fn advance(robot: &mut Robot, cube: &mut Cube, target: Coord) {
    cube.set(robot.position, CellKind::Free);
    cube.set(target, CellKind::Robot);
    robot.position = target;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All-Free cube with a robot placed at the given cell
    fn world_with_robot(side: usize, at: Coord) -> (Cube, Robot) {
        let mut cube = Cube::new(side);
        for c in cube.positions_of(CellKind::Empty) {
            cube.set(c, CellKind::Free);
        }
        cube.set(at, CellKind::Robot);
        (cube, Robot::new(at))
    }

    #[test]
    fn test_r1_preempts_frontal_monster() {
        // Pending kill set and a monster dead ahead: R1 still wins
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 0, 0));
        cube.set(Coord::new(1, 0, 0), CellKind::Monster);
        robot.pending_kill = true;

        let active = run_robot_tick(&mut robot, &mut cube, 1);
        assert!(!active);
        assert!(!robot.alive);
        assert_eq!(robot.kills, 1);
        assert!(!robot.pending_kill);
        assert_eq!(robot.position, Coord::new(0, 0, 0));
        assert_eq!(cube.kind(Coord::new(0, 0, 0)), CellKind::Free);

        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::SelfCellMonster);
        assert_eq!(record.action, Action::Annihilate);
        assert_eq!(record.frontal, None);
        assert_eq!(record.detection, None);
    }

    #[test]
    fn test_r2_boundary_rotates_in_place() {
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(2, 1, 1));
        // Facing X+ into the boundary
        let active = run_robot_tick(&mut robot, &mut cube, 1);
        assert!(active);
        assert_eq!(robot.position, Coord::new(2, 1, 1));
        assert_eq!(robot.orientation, Orientation::YPlus);
        assert_eq!(robot.cycle_index, 1);

        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::FrontalBlocked);
        assert_eq!(record.frontal, Some(FrontalState::OutOfBounds));
        // R2 matched before the five-face scan; the percept stays unset
        assert_eq!(record.detection, None);
    }

    #[test]
    fn test_r2_empty_cell_rotates() {
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 1, 1));
        cube.set(Coord::new(1, 1, 1), CellKind::Empty);

        run_robot_tick(&mut robot, &mut cube, 1);
        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::FrontalBlocked);
        assert_eq!(record.frontal, Some(FrontalState::Empty));
        assert_eq!(robot.position, Coord::new(0, 1, 1));
    }

    #[test]
    fn test_r3_frontal_robot_rotates() {
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 1, 1));
        cube.set(Coord::new(1, 1, 1), CellKind::Robot);

        run_robot_tick(&mut robot, &mut cube, 1);
        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::FrontalRobot);
        assert_eq!(record.action, Action::Rotate);
        assert_eq!(robot.position, Coord::new(0, 1, 1));
    }

    #[test]
    fn test_r4_advances_onto_monster_with_deferred_kill() {
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 0, 0));
        cube.set(Coord::new(1, 0, 0), CellKind::Monster);

        let active = run_robot_tick(&mut robot, &mut cube, 1);
        assert!(active);
        assert_eq!(robot.position, Coord::new(1, 0, 0));
        assert!(robot.pending_kill);
        // No kill credit yet; that happens at R1 next tick
        assert_eq!(robot.kills, 0);
        assert_eq!(cube.kind(Coord::new(0, 0, 0)), CellKind::Free);
        assert_eq!(cube.kind(Coord::new(1, 0, 0)), CellKind::Robot);

        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::FrontalMonster);
        assert_eq!(record.frontal, Some(FrontalState::Monster));
        assert_eq!(record.detection, None);
    }

    #[test]
    fn test_r5_detection_advances() {
        // Monster on a lateral face, frontal free
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 0, 0));
        cube.set(Coord::new(0, 1, 0), CellKind::Monster);

        run_robot_tick(&mut robot, &mut cube, 1);
        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::DetectionAdvance);
        assert_eq!(record.detection, Some(true));
        assert_eq!(robot.position, Coord::new(1, 0, 0));
    }

    #[test]
    fn test_r7_clear_view_advances() {
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 0, 0));

        run_robot_tick(&mut robot, &mut cube, 1);
        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::PatrolAdvance);
        assert_eq!(record.detection, Some(false));
        assert_eq!(robot.position, Coord::new(1, 0, 0));
        assert_eq!(robot.orientation, Orientation::XPlus);
    }

    #[test]
    fn test_rear_monster_not_detected() {
        // Monster directly behind: the five-face window excludes the rear,
        // so the robot patrols forward as if nothing were there
        let (mut cube, mut robot) = world_with_robot(5, Coord::new(2, 2, 2));
        cube.set(Coord::new(1, 2, 2), CellKind::Monster);

        run_robot_tick(&mut robot, &mut cube, 1);
        let record = &robot.memory.records()[0];
        assert_eq!(record.rule, Rule::PatrolAdvance);
        assert_eq!(record.detection, Some(false));
    }

    #[test]
    fn test_one_record_per_tick() {
        let (mut cube, mut robot) = world_with_robot(3, Coord::new(0, 0, 0));
        for t in 1..=5 {
            if !run_robot_tick(&mut robot, &mut cube, t) {
                break;
            }
        }
        assert_eq!(robot.memory.len(), 5);
    }
}
