//! Cubic cell grid for the simulated world

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;

/// What a single cell holds. Exactly one kind per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Blocked, impassable
    Empty,
    /// Traversable
    Free,
    /// Occupied by a robot
    Robot,
    /// Occupied by a monster
    Monster,
}

/// The six axis-aligned unit offsets, for 6-neighbor queries
const NEIGHBOR_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// N×N×N cell store, flat Vec indexed as (x·N + y)·N + z
#[derive(Debug, Clone)]
pub struct Cube {
    side: usize,
    cells: Vec<CellKind>,
}

impl Cube {
    /// Create a cube with every cell `Empty`
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![CellKind::Empty; side * side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        let n = self.side as i32;
        c.x >= 0 && c.x < n && c.y >= 0 && c.y < n && c.z >= 0 && c.z < n
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        (c.x as usize * self.side + c.y as usize) * self.side + c.z as usize
    }

    /// Cell kind at an in-bounds coordinate.
    ///
    /// Panics on an out-of-range coordinate; callers probing near the
    /// boundary use [`try_kind`](Self::try_kind).
    #[inline]
    pub fn kind(&self, c: Coord) -> CellKind {
        assert!(self.in_bounds(c), "coordinate {} out of bounds", c);
        self.cells[self.index(c)]
    }

    /// Cell kind, or `None` when the coordinate is out of bounds
    #[inline]
    pub fn try_kind(&self, c: Coord) -> Option<CellKind> {
        if self.in_bounds(c) {
            Some(self.cells[self.index(c)])
        } else {
            None
        }
    }

    /// Overwrite the cell kind at an in-bounds coordinate.
    ///
    /// Panics on an out-of-range coordinate.
    #[inline]
    pub fn set(&mut self, c: Coord, kind: CellKind) {
        assert!(self.in_bounds(c), "coordinate {} out of bounds", c);
        let idx = self.index(c);
        self.cells[idx] = kind;
    }

    /// In-bounds 6-neighbors of a coordinate, in fixed offset order
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy, dz)| c.offset(dx, dy, dz))
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// All coordinates holding the given kind, in grid scan order (x, y, z)
    pub fn positions_of(&self, kind: CellKind) -> Vec<Coord> {
        let n = self.side as i32;
        let mut out = Vec::new();
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let c = Coord::new(x, y, z);
                    if self.cells[self.index(c)] == kind {
                        out.push(c);
                    }
                }
            }
        }
        out
    }

    /// Number of cells holding the given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }
}
