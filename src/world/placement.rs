//! Agent placement on traversable cells

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::config::AgentConfig;
use crate::core::error::{Result, SimError};
use crate::spatial::cube::{CellKind, Cube};

/// Place the configured robots and monsters on unique free cells.
///
/// Fails with a capacity error before mutating anything when the request
/// exceeds the free-cell supply.
pub fn place_agents(cube: &mut Cube, config: &AgentConfig, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut free = cube.positions_of(CellKind::Free);
    let requested = config.robots + config.monsters;
    if requested > free.len() {
        return Err(SimError::Capacity {
            requested,
            available: free.len(),
        });
    }

    free.shuffle(rng);
    for &c in free.iter().take(config.robots) {
        cube.set(c, CellKind::Robot);
    }
    for &c in free.iter().skip(config.robots).take(config.monsters) {
        cube.set(c, CellKind::Monster);
    }

    tracing::info!(
        robots = config.robots,
        monsters = config.monsters,
        free_cells = free.len(),
        "agents placed"
    );

    Ok(())
}
