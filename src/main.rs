//! Weighted A* weight sweep over a road map.
//!
//! # Usage
//!
//! ```bash
//! # Sweep the default weights between two nodes
//! wastar --map map.csv --start 44,118 --goal 512,87
//!
//! # Compare both heuristics on chosen weights, random endpoints
//! wastar --map map.csv --seed 7 --weights 0,1,2,4 --heuristic euclidean --heuristic manhattan
//!
//! # Everything from a file, flags still override
//! wastar --config sweep.toml --output results/
//! ```

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wastar::config::SweepConfig;
use wastar::errors::{ConfigError, MapError, PathPlannerError, ReportError};
use wastar::geometry::Coordinate;
use wastar::graph::{NodeLocator, RoadGraph};
use wastar::harness::{run_comparison, suboptimality, HeuristicSweep};
use wastar::heuristics::HeuristicKind;
use wastar::map_file::load_graph;
use wastar::report::{write_comparison_file, write_summary_file, PathOverlay};


#[derive(Parser)]
#[command(name = "wastar")]
#[command(about = "Compare weighted A* heuristic weights on a road map")]
struct Args {
    /// Sweep configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Road-segment map, one `id,startX,startY,endX,endY` per line
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Start node as X,Y
    #[arg(long, allow_hyphen_values = true)]
    start: Option<Coordinate>,

    /// Goal node as X,Y
    #[arg(long, allow_hyphen_values = true)]
    goal: Option<Coordinate>,

    /// Comma separated weights, swept in the given order
    #[arg(short, long, value_delimiter = ',')]
    weights: Vec<f64>,

    /// Heuristic to sweep, repeat to compare several
    #[arg(long = "heuristic", value_enum)]
    heuristics: Vec<HeuristicKind>,

    /// Keep segments one-way instead of mirroring them
    #[arg(long)]
    directed: bool,

    /// Snap start and goal onto the nearest graph nodes
    #[arg(long)]
    snap: bool,

    /// Seed for picking a random start/goal pair when none is given
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for CSV and SVG reports
    #[arg(short, long)]
    output: Option<PathBuf>,
}


#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Search(#[from] PathPlannerError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("{0}")]
    Endpoints(String),
}


fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wastar=info")),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(args)?;
    config.validate()?;

    // validate() guarantees a map path
    let Some(map_path) = config.map.as_ref() else {
        return Err(ConfigError::Invalid("no map file given".into()).into());
    };
    let graph = load_graph(map_path, config.mirror)?;
    let (start, goal) = pick_endpoints(&graph, &config)?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "sweeping {start} -> {goal}");

    let sweeps = run_comparison(&graph, start, goal, &config.heuristics, &config.weights)?;

    // the table goes out before any file is written, a failed report cannot lose results
    print_table(start, goal, &sweeps);
    write_reports(&config, &graph, &sweeps)?;

    Ok(())
}


/// Config file first, then command line flags on top
fn resolve_config(args: Args) -> Result<SweepConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };

    if args.map.is_some() {
        config.map = args.map;
    }
    if args.start.is_some() || args.goal.is_some() {
        config.start = args.start;
        config.goal = args.goal;
    }
    if !args.weights.is_empty() {
        config.weights = args.weights;
    }
    if !args.heuristics.is_empty() {
        config.heuristics = args.heuristics;
    }
    if args.directed {
        config.mirror = false;
    }
    if args.snap {
        config.snap = true;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    Ok(config)
}


fn pick_endpoints(graph: &RoadGraph, config: &SweepConfig) -> Result<(Coordinate, Coordinate), CliError> {
    let (start, goal) = match (config.start, config.goal) {
        (Some(start), Some(goal)) => (start, goal),
        _ => {
            let picked = match config.seed {
                Some(seed) => graph.random_pair(&mut StdRng::seed_from_u64(seed)),
                None => graph.random_pair(&mut rand::rng()),
            };
            let (start, goal) = picked
                .ok_or_else(|| CliError::Endpoints("map needs at least two nodes for a random pair".into()))?;
            info!("picked random endpoints {start} -> {goal}");
            (start, goal)
        }
    };

    if !config.snap {
        return Ok((start, goal));
    }

    let locator = NodeLocator::new(graph);
    let snap = |point: Coordinate| {
        let snapped = locator
            .snap(graph, point)
            .ok_or_else(|| CliError::Endpoints(format!("cannot snap {point} onto an empty map")))?;
        if snapped != point {
            warn!("snapped {point} to nearest node {snapped}");
        }
        Ok::<_, CliError>(snapped)
    };
    Ok((snap(start)?, snap(goal)?))
}


fn print_table(start: Coordinate, goal: Coordinate, sweeps: &[HeuristicSweep]) {
    println!("Weighted A* sweep {start} -> {goal}");
    for sweep in sweeps {
        let baseline = sweep.baseline_cost();
        println!();
        println!(
            "heuristic: {} (admissible: {}, estimate at start: {:.3})",
            sweep.heuristic,
            sweep.heuristic.is_admissible(),
            sweep.heuristic.estimate(start, goal)
        );
        println!("{:>8} {:>14} {:>8} {:>11} {:>12} {:>9}", "weight", "cost", "length", "iterations", "time (ms)", "vs best");
        for entry in &sweep.entries {
            match entry.metrics() {
                Some(m) => {
                    let ratio = baseline
                        .and_then(|b| suboptimality(m, b))
                        .map(|r| format!("{r:.3}"))
                        .unwrap_or_else(|| "-".into());
                    println!(
                        "{:>8} {:>14.3} {:>8} {:>11} {:>12.3} {:>9}",
                        m.weight,
                        m.cost,
                        m.length,
                        m.iterations,
                        m.elapsed.as_secs_f64() * 1e3,
                        ratio
                    );
                }
                None => println!("{:>8} {:>14}", entry.weight, "no path"),
            }
        }
        println!("{} of {} weights found a path", sweep.found().count(), sweep.entries.len());
    }
}


fn write_reports(config: &SweepConfig, graph: &RoadGraph, sweeps: &[HeuristicSweep]) -> Result<(), ReportError> {
    std::fs::create_dir_all(&config.output)?;

    for sweep in sweeps {
        let name = sweep.heuristic.name();
        write_summary_file(config.output.join(format!("summary_{name}.csv")), &sweep.entries)?;
        PathOverlay::default().save(
            config.output.join(format!("paths_{name}.svg")),
            graph,
            &format!("weighted A*, {name} heuristic"),
            &sweep.entries,
        )?;
    }
    if sweeps.len() > 1 {
        write_comparison_file(config.output.join("comparison.csv"), sweeps)?;
    }
    Ok(())
}
