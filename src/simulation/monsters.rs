//! Monster dynamics: periodic, probabilistic local movement

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::DynamicsConfig;
use crate::core::types::Tick;
use crate::spatial::cube::{CellKind, Cube};

/// Run one movement pass over all monsters.
///
/// Gated on the configured period and probability; a pass on a non-scheduled
/// tick does nothing. Monster positions are snapshotted and shuffled before
/// any move, so a monster relocated earlier in the pass is not re-evaluated.
/// Returns the number of monsters that moved.
pub fn run_monster_pass(
    cube: &mut Cube,
    config: &DynamicsConfig,
    tick: Tick,
    rng: &mut ChaCha8Rng,
) -> usize {
    if config.period == 0 || tick % config.period != 0 || config.probability <= 0.0 {
        return 0;
    }

    let mut positions = cube.positions_of(CellKind::Monster);
    positions.shuffle(rng);

    let mut moved = 0;
    for pos in positions {
        // A merge earlier in this pass may have consumed this cell
        if cube.kind(pos) != CellKind::Monster {
            continue;
        }

        if rng.gen::<f64>() >= config.probability {
            continue;
        }

        // Confirm a destination before vacating: a trapped monster stays
        // put rather than being transiently erased
        let candidates: Vec<_> = cube
            .neighbors(pos)
            .into_iter()
            .filter(|&c| {
                let kind = cube.kind(c);
                kind != CellKind::Empty && kind != CellKind::Robot
            })
            .collect();

        let Some(&target) = candidates.choose(rng) else {
            continue;
        };

        // Landing on another monster is a merge: occupancy absorbs,
        // the count silently drops by one
        cube.set(pos, CellKind::Free);
        cube.set(target, CellKind::Monster);
        moved += 1;
    }

    moved
}
