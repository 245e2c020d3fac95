//! Layered text rendering of the cube
//!
//! This module is READ-ONLY - it never modifies simulation state.

use crate::core::types::Coord;
use crate::spatial::cube::{CellKind, Cube};

fn symbol(kind: CellKind) -> char {
    match kind {
        CellKind::Empty => '█',
        CellKind::Free => '░',
        CellKind::Robot => 'R',
        CellKind::Monster => 'M',
    }
}

/// Render the cube as one N×N text block per z layer
pub fn render_layers(cube: &Cube) -> String {
    let n = cube.side() as i32;
    let mut out = String::new();
    for z in 0..n {
        out.push_str(&format!("Layer z={}\n", z));
        for y in 0..n {
            for x in 0..n {
                out.push(symbol(cube.kind(Coord::new(x, y, z))));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
