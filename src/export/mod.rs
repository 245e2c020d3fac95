//! Memory export: one CSV per robot, keyed by its final position

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::agent::robot::Robot;
use crate::core::error::Result;

const HEADER: &str = "t,rule,action,frontal,detection,pos_pre,ori_pre,pos_post,ori_post,kills";

/// Double-quote a field when it contains a comma (position tuples do)
fn csv_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Render a robot's memory as CSV text
pub fn memory_csv(robot: &Robot) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for record in robot.memory.records() {
        let frontal = record.frontal.map(|f| f.to_string()).unwrap_or_default();
        let detection = record.detection.map(|d| d.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            record.tick,
            record.rule.code(),
            record.action,
            frontal,
            detection,
            csv_field(&record.pos_pre.to_string()),
            record.ori_pre,
            csv_field(&record.pos_post.to_string()),
            record.ori_post,
            record.kills,
        );
    }
    out
}

fn file_stem(robot: &Robot) -> String {
    let p = robot.position;
    format!("robot_{}_{}_{}", p.x, p.y, p.z)
}

/// Write one robot's memory to `<dir>/robot_{x}_{y}_{z}.csv` and return
/// the written path.
///
/// Roster exports go through [`export_all`], which disambiguates when two
/// robots ended at the same cell.
pub fn export_memory(robot: &Robot, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.csv", file_stem(robot)));
    std::fs::write(&path, memory_csv(robot))?;
    Ok(path)
}

/// Export the whole roster, destroyed robots included.
///
/// Destroyed robots stay in the roster, so two robots can share a final
/// cell (one dies there, a monster wanders onto the freed cell, another
/// robot repeats the kill). Name collisions get a roster-order suffix
/// (`robot_1_0_0_1.csv`) so no memory is overwritten.
pub fn export_all(robots: &[Robot], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut seen: HashMap<String, usize> = HashMap::new();

    robots
        .iter()
        .map(|robot| {
            let stem = file_stem(robot);
            let dup = seen.entry(stem.clone()).or_insert(0);
            let name = if *dup == 0 {
                format!("{}.csv", stem)
            } else {
                format!("{}_{}.csv", stem, dup)
            };
            *dup += 1;

            let path = dir.join(name);
            std::fs::write(&path, memory_csv(robot))?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Coord;
    use crate::simulation::rules::run_robot_tick;
    use crate::spatial::cube::{CellKind, Cube};

    fn robot_with_history() -> Robot {
        let mut cube = Cube::new(3);
        for c in cube.positions_of(CellKind::Empty) {
            cube.set(c, CellKind::Free);
        }
        cube.set(Coord::new(0, 0, 0), CellKind::Robot);
        cube.set(Coord::new(1, 0, 0), CellKind::Monster);

        let mut robot = Robot::new(Coord::new(0, 0, 0));
        run_robot_tick(&mut robot, &mut cube, 1); // R4 advance
        run_robot_tick(&mut robot, &mut cube, 2); // R1 annihilate
        robot
    }

    fn temp_export_dir(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gridhunt_{}_{}", tag, std::process::id()))
    }

    #[test]
    fn test_csv_shape_and_quoting() {
        let robot = robot_with_history();
        let csv = memory_csv(&robot);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines.len(), 3);

        // R4 row: frontal sensed as monster, percept never computed
        assert!(lines[1].starts_with("1,R4,advance,monster,,"));
        assert!(lines[1].contains("\"(0, 0, 0)\""));
        assert!(lines[1].contains("\"(1, 0, 0)\""));

        // R1 row: no frontal sensing at all, kill credited
        assert!(lines[2].starts_with("2,R1,annihilate,,,"));
        assert!(lines[2].ends_with(",1"));
    }

    #[test]
    fn test_export_writes_file_keyed_by_final_position() {
        let robot = robot_with_history();
        let dir = temp_export_dir("export");
        let path = export_memory(&robot, &dir).unwrap();
        assert!(path.ends_with("robot_1_0_0.csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(HEADER));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_shared_final_cell_keeps_both_memories() {
        // Two robots destroyed at the same cell on different runs: a
        // monster can wander onto a freed cell, so a second robot can
        // repeat the R4/R1 kill at the first one's grave
        let first = robot_with_history();
        let second = robot_with_history();
        assert_eq!(first.position, second.position);

        let dir = temp_export_dir("collision");
        let paths = export_all(&[first, second], &dir).unwrap();

        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1], "colliding names must be disambiguated");
        assert!(paths[0].ends_with("robot_1_0_0.csv"));
        assert!(paths[1].ends_with("robot_1_0_0_1.csv"));

        let files = std::fs::read_dir(&dir).unwrap().count();
        assert_eq!(files, 2, "no memory file may be overwritten");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
