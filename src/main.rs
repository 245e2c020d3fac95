//! Gridhunt entry point
//!
//! Runs one robot-vs-monster hunt simulation and reports kill-efficiency
//! metrics. Deterministic under a fixed seed.

use std::path::PathBuf;

use clap::Parser;

use gridhunt::core::config::{
    AgentConfig, DynamicsConfig, GridConfig, RunConfig, SimulationConfig,
};
use gridhunt::core::error::Result;
use gridhunt::export;
use gridhunt::render::render_layers;
use gridhunt::simulation::driver::Simulation;

/// Robot-vs-monster hunt simulation on a 3D grid
#[derive(Parser, Debug)]
#[command(name = "gridhunt")]
#[command(about = "Run one robot-vs-monster hunt simulation on a 3D grid")]
struct Args {
    /// Side length N of the cubic grid
    #[arg(long, default_value_t = 8)]
    side: usize,

    /// Fraction of interior cells that are traversable
    #[arg(long, default_value_t = 0.6)]
    free_fraction: f64,

    /// Number of robots
    #[arg(long, default_value_t = 3)]
    robots: usize,

    /// Number of monsters
    #[arg(long, default_value_t = 5)]
    monsters: usize,

    /// Random seed for deterministic runs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Monster movement period in ticks (0 disables movement)
    #[arg(long, default_value_t = 2)]
    period: u64,

    /// Per-monster movement probability
    #[arg(long, default_value_t = 0.5)]
    probability: f64,

    /// Maximum ticks before the run stops
    #[arg(long, default_value_t = 200)]
    max_ticks: u64,

    /// Unchanged-occupancy ticks before the run stops as static
    #[arg(long, default_value_t = 20)]
    stasis_threshold: u64,

    /// Directory for the per-robot memory CSVs
    #[arg(long, default_value = "memories")]
    export_dir: PathBuf,

    /// Load a full TOML configuration instead of the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Render the grid every tick
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridhunt=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            SimulationConfig {
                grid: GridConfig {
                    side: args.side,
                    free_fraction: args.free_fraction,
                    blocked_fraction: 1.0 - args.free_fraction,
                },
                agents: AgentConfig {
                    robots: args.robots,
                    monsters: args.monsters,
                },
                dynamics: DynamicsConfig {
                    period: args.period,
                    probability: args.probability,
                },
                run: RunConfig {
                    max_ticks: args.max_ticks,
                    stasis_threshold: args.stasis_threshold,
                },
                seed,
            }
        }
    };

    // Always echoed so any run can be replayed
    println!("Seed: {}", config.seed);

    let mut sim = Simulation::new(config)?;

    println!("=== Initial state ===");
    println!("{}", render_layers(sim.cube()));

    while sim.step().is_none() {
        if args.verbose {
            println!("--- Tick {} ---", sim.tick());
            println!("{}", render_layers(sim.cube()));
        }
    }

    let output = sim.output();

    println!("=== Final state ===");
    println!("{}", render_layers(sim.cube()));

    let paths = export::export_all(sim.robots(), &args.export_dir)?;
    for path in &paths {
        println!("Memory saved to: {}", path.display());
    }

    match args.format.as_str() {
        "json" => println!("{}", output.to_json()),
        _ => println!("{}", output.summary()),
    }

    Ok(())
}
