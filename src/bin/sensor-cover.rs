//! Command-line entry point: runs one search on a sensor-placement
//! instance and prints the best placement with its coverage overlay.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sensor_cover::bees::{BeesConfig, BeesRunner};
use sensor_cover::coverage::{Overlay, Position, SensorCoverage, SensorState, Terrain};
use sensor_cover::sa::{ExpSchedule, SaConfig, SaRunner};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sensor-cover", about = "Maximize sensor coverage of a signal terrain")]
struct Cli {
    /// Terrain file: one row per line of whitespace-separated 0/1 cells.
    /// Defaults to the built-in 6x6 instance.
    #[arg(long, global = true)]
    terrain: Option<PathBuf>,

    /// Coverage capacity per sensor, e.g. `3,2,2,1`.
    #[arg(long, global = true, value_delimiter = ',')]
    capacities: Option<Vec<usize>>,

    /// Random seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    algorithm: Algorithm,
}

#[derive(Subcommand)]
enum Algorithm {
    /// Population search with elite and scout bees.
    Bees {
        #[arg(long, default_value_t = 20)]
        generations: usize,
        #[arg(long, default_value_t = 45)]
        population: usize,
        #[arg(long, default_value_t = 3)]
        sites: usize,
        #[arg(long, default_value_t = 1)]
        elite_sites: usize,
        #[arg(long, default_value_t = 3)]
        patch_size: usize,
        #[arg(long, default_value_t = 0.05)]
        patch_decay: f64,
        #[arg(long, default_value_t = 7)]
        elite_bees: usize,
        #[arg(long, default_value_t = 2)]
        other_bees: usize,
    },
    /// Simulated annealing from an explicit start placement.
    Anneal {
        /// Start positions as `row,col` pairs. Defaults to the built-in
        /// start for the built-in instance.
        #[arg(long = "sensor", value_parser = parse_position)]
        sensors: Vec<Position>,
        #[arg(long, default_value_t = 100.0)]
        k: f64,
        #[arg(long, default_value_t = 0.005)]
        lambda: f64,
        #[arg(long, default_value_t = 2000)]
        limit: usize,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row in `{s}`: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column in `{s}`: {e}"))?;
    Ok(Position::new(row, col))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn load_problem(cli: &Cli) -> Result<SensorCoverage> {
    let classic = SensorCoverage::classic();
    let terrain = match &cli.terrain {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading terrain {}", path.display()))?;
            text.parse::<Terrain>()
                .with_context(|| format!("parsing terrain {}", path.display()))?
        }
        None => classic.terrain().clone(),
    };
    let capacities = cli
        .capacities
        .clone()
        .unwrap_or_else(|| classic.capacities().to_vec());
    if capacities.is_empty() {
        bail!("at least one sensor capacity is required");
    }
    Ok(SensorCoverage::new(Arc::new(terrain), capacities))
}

fn report(state: &SensorState, score: usize) {
    let positions: Vec<String> = state.positions().iter().map(Position::to_string).collect();
    println!("Sensor positions -> [{}]", positions.join(", "));
    println!("Covered signal cells -> {score} of {}", state.terrain().signal_count());
    println!();
    print!("{}", Overlay::bare(state.terrain()));
    println!();
    print!("{}", Overlay::new(state));
}

fn main() -> Result<()> {
    enable_tracing();
    let cli = Cli::parse();
    let problem = load_problem(&cli)?;

    match cli.algorithm {
        Algorithm::Bees {
            generations,
            population,
            sites,
            elite_sites,
            patch_size,
            patch_decay,
            elite_bees,
            other_bees,
        } => {
            let mut config = BeesConfig::default()
                .with_max_generations(generations)
                .with_population_size(population)
                .with_sites(sites, elite_sites)
                .with_patch_size(patch_size)
                .with_patch_size_decay_probability(patch_decay)
                .with_recruits(elite_bees, other_bees);
            config.seed = cli.seed;

            let result = BeesRunner::run_with_observer(&problem, &config, |imp| {
                info!(
                    generation = imp.generation,
                    score = imp.score,
                    positions = ?imp.solution.positions(),
                    "improved placement"
                );
            })?;
            report(&result.best, result.best_score);
        }
        Algorithm::Anneal {
            sensors,
            k,
            lambda,
            limit,
        } => {
            let start = if sensors.is_empty() && cli.terrain.is_none() && cli.capacities.is_none() {
                SensorCoverage::classic_start()
            } else {
                sensors
            };
            let initial = problem.state(start).context("invalid start placement")?;
            let schedule = ExpSchedule::new(k, lambda, limit);
            let config = SaConfig {
                seed: cli.seed,
                ..SaConfig::default()
            };

            let result = SaRunner::run(&problem, initial, &schedule, &config)?;
            info!(
                steps = result.steps,
                accepted = result.accepted_moves,
                best_seen = result.best_value,
                "annealing done"
            );
            report(&result.state, result.state.objective());
        }
    }

    Ok(())
}
