//! The six axis-aligned facings and their rotation arithmetic

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;

/// Facing direction of a robot, one of the six axis-aligned units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    XPlus,
    XMinus,
    YPlus,
    YMinus,
    ZPlus,
    ZMinus,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::XPlus,
        Orientation::XMinus,
        Orientation::YPlus,
        Orientation::YMinus,
        Orientation::ZPlus,
        Orientation::ZMinus,
    ];

    /// Unit offset along this facing
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            Orientation::XPlus => (1, 0, 0),
            Orientation::XMinus => (-1, 0, 0),
            Orientation::YPlus => (0, 1, 0),
            Orientation::YMinus => (0, -1, 0),
            Orientation::ZPlus => (0, 0, 1),
            Orientation::ZMinus => (0, 0, -1),
        }
    }

    pub fn opposite(&self) -> Orientation {
        match self {
            Orientation::XPlus => Orientation::XMinus,
            Orientation::XMinus => Orientation::XPlus,
            Orientation::YPlus => Orientation::YMinus,
            Orientation::YMinus => Orientation::YPlus,
            Orientation::ZPlus => Orientation::ZMinus,
            Orientation::ZMinus => Orientation::ZPlus,
        }
    }

    /// The fixed 4-entry rotation cycle for this facing.
    ///
    /// An explicit lookup table, never derived geometrically at runtime:
    /// the entry order determines turn determinism and must stay stable.
    /// Right-hand 90° turn order about the facing axis.
    pub fn rotation_cycle(&self) -> [Orientation; 4] {
        match self {
            Orientation::XPlus => [
                Orientation::YPlus,
                Orientation::ZPlus,
                Orientation::YMinus,
                Orientation::ZMinus,
            ],
            Orientation::XMinus => [
                Orientation::YPlus,
                Orientation::ZMinus,
                Orientation::YMinus,
                Orientation::ZPlus,
            ],
            Orientation::YPlus => [
                Orientation::XPlus,
                Orientation::ZMinus,
                Orientation::XMinus,
                Orientation::ZPlus,
            ],
            Orientation::YMinus => [
                Orientation::XPlus,
                Orientation::ZPlus,
                Orientation::XMinus,
                Orientation::ZMinus,
            ],
            Orientation::ZPlus => [
                Orientation::XPlus,
                Orientation::YPlus,
                Orientation::XMinus,
                Orientation::YMinus,
            ],
            Orientation::ZMinus => [
                Orientation::XPlus,
                Orientation::YMinus,
                Orientation::XMinus,
                Orientation::YPlus,
            ],
        }
    }

    /// Coordinate one step ahead along this facing (may be out of bounds;
    /// callers classify)
    pub fn frontal(&self, from: Coord) -> Coord {
        let (dx, dy, dz) = self.offset();
        from.offset(dx, dy, dz)
    }

    /// The four coordinates one step along each rotation-cycle entry,
    /// in table order. The rear cell is never among them.
    pub fn laterals(&self, from: Coord) -> [Coord; 4] {
        let cycle = self.rotation_cycle();
        [
            cycle[0].frontal(from),
            cycle[1].frontal(from),
            cycle[2].frontal(from),
            cycle[3].frontal(from),
        ]
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Orientation::XPlus => "X+",
            Orientation::XMinus => "X-",
            Orientation::YPlus => "Y+",
            Orientation::YMinus => "Y-",
            Orientation::ZPlus => "Z+",
            Orientation::ZMinus => "Z-",
        };
        write!(f, "{}", s)
    }
}

/// 90° turn: the rotation-cycle entry at `cycle_index mod 4`, plus the
/// advanced index. Four successive turns from index 0 step through all
/// four orthogonal facings exactly once and wrap the index back to 0.
pub fn rotate90(orientation: Orientation, cycle_index: usize) -> (Orientation, usize) {
    let cycle = orientation.rotation_cycle();
    (cycle[cycle_index % 4], (cycle_index + 1) % 4)
}
