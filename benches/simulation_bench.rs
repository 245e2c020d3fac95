//! Criterion benchmark: one full seeded run at the default parameters

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridhunt::core::config::{
    AgentConfig, DynamicsConfig, GridConfig, RunConfig, SimulationConfig,
};
use gridhunt::simulation::driver::Simulation;

fn bench_config() -> SimulationConfig {
    SimulationConfig {
        grid: GridConfig {
            side: 10,
            free_fraction: 0.6,
            blocked_fraction: 0.4,
        },
        agents: AgentConfig {
            robots: 5,
            monsters: 12,
        },
        dynamics: DynamicsConfig {
            period: 2,
            probability: 0.5,
        },
        run: RunConfig {
            max_ticks: 200,
            stasis_threshold: 20,
        },
        seed: 42,
    }
}

fn full_run(c: &mut Criterion) {
    c.bench_function("full_seeded_run", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(black_box(bench_config())).unwrap();
            black_box(sim.run())
        })
    });
}

criterion_group!(benches, full_run);
criterion_main!(benches);
