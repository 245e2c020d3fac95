//! World construction: cube shell and interior fill

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GridConfig;
use crate::core::types::Coord;
use crate::spatial::cube::{CellKind, Cube};

/// Build a populated cube: every cell starts `Empty`, the boundary shell
/// stays `Empty`, and a fraction of the interior becomes `Free`.
///
/// The free fraction applies to the interior only and is honored exactly:
/// `round(free_fraction * interior_count)` cells are freed, chosen from a
/// shuffled interior list rather than sampled per cell.
pub fn build_cube(config: &GridConfig, rng: &mut ChaCha8Rng) -> Cube {
    let mut cube = Cube::new(config.side);

    let mut interior = interior_coords(config.side);
    interior.shuffle(rng);

    let free_count = (config.free_fraction * interior.len() as f64).round() as usize;
    for &c in interior.iter().take(free_count) {
        cube.set(c, CellKind::Free);
    }

    tracing::info!(
        side = config.side,
        interior = interior.len(),
        free = free_count,
        "cube built"
    );

    cube
}

/// Interior coordinates: 1..side-1 on every axis. A side of 2 has no
/// interior and yields an all-blocked cube.
fn interior_coords(side: usize) -> Vec<Coord> {
    let n = side as i32;
    let mut out = Vec::new();
    for x in 1..n - 1 {
        for y in 1..n - 1 {
            for z in 1..n - 1 {
                out.push(Coord::new(x, y, z));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid(side: usize, free: f64) -> GridConfig {
        GridConfig {
            side,
            free_fraction: free,
            blocked_fraction: 1.0 - free,
        }
    }

    #[test]
    fn test_boundary_shell_stays_blocked() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cube = build_cube(&grid(5, 1.0), &mut rng);
        let n = 5;
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let on_shell =
                        x == 0 || y == 0 || z == 0 || x == n - 1 || y == n - 1 || z == n - 1;
                    let c = Coord::new(x, y, z);
                    if on_shell {
                        assert_eq!(cube.kind(c), CellKind::Empty, "shell cell {} freed", c);
                    } else {
                        assert_eq!(cube.kind(c), CellKind::Free);
                    }
                }
            }
        }
    }

    #[test]
    fn test_free_fraction_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let cube = build_cube(&grid(6, 0.5), &mut rng);
        // Interior is 4^3 = 64 cells; half become free
        assert_eq!(cube.count(CellKind::Free), 32);
    }

    #[test]
    fn test_minimal_side_has_no_interior() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cube = build_cube(&grid(2, 0.6), &mut rng);
        assert_eq!(cube.count(CellKind::Free), 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        let a = build_cube(&grid(6, 0.6), &mut rng_a);
        let b = build_cube(&grid(6, 0.6), &mut rng_b);
        assert_eq!(
            a.positions_of(CellKind::Free),
            b.positions_of(CellKind::Free)
        );
    }
}
