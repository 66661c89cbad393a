use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::errors::PathPlannerError;
use crate::geometry::Coordinate;
use crate::graph::RoadGraph;
use crate::graph_algos::{search, SearchResult, WeightedAStar};
use crate::heuristics::HeuristicKind;


/// Measurements of one successful run
#[derive(Clone, Debug, PartialEq)]
pub struct RunMetrics {
    pub weight: f64,
    pub cost: f64,
    pub length: usize, // nodes on the path
    pub iterations: usize,
    pub elapsed: Duration,
}

impl RunMetrics {
    fn from_result(weight: f64, result: &SearchResult, elapsed: Duration) -> Self {
        Self {
            weight,
            cost: result.cost,
            length: result.path_len(),
            iterations: result.iterations,
            elapsed,
        }
    }
}


#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    Found { metrics: RunMetrics, path: Vec<Coordinate> },
    NoPath,
}


/// One weight of a sweep and what happened at it
#[derive(Clone, Debug, PartialEq)]
pub struct SweepEntry {
    pub weight: f64,
    pub outcome: RunOutcome,
}

impl SweepEntry {

    pub fn metrics(&self) -> Option<&RunMetrics> {
        match &self.outcome {
            RunOutcome::Found { metrics, .. } => Some(metrics),
            RunOutcome::NoPath => None,
        }
    }

    pub fn path(&self) -> Option<&[Coordinate]> {
        match &self.outcome {
            RunOutcome::Found { path, .. } => Some(path),
            RunOutcome::NoPath => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, RunOutcome::Found { .. })
    }
}


/// Sweep results for one named heuristic
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicSweep {
    pub heuristic: HeuristicKind,
    pub entries: Vec<SweepEntry>,
}

impl HeuristicSweep {
    /// Metrics of the runs that found a path, in sweep order
    pub fn found(&self) -> impl Iterator<Item = &RunMetrics> + '_ {
        found(&self.entries)
    }

    pub fn baseline_cost(&self) -> Option<f64> {
        baseline_cost(&self.entries)
    }
}


/// Run weighted A* once per weight, in the given order
/// An unreachable goal at one weight is recorded as [`RunOutcome::NoPath`] and the sweep carries on.
/// Errors that would hit every weight the same way fail the whole sweep before the first search,
/// checked in the same order as a single search: weights, then start, then goal
pub fn run_sweep<H>(graph: &RoadGraph, start: Coordinate, goal: Coordinate, heuristic: H, weights: &[f64]) -> Result<Vec<SweepEntry>, PathPlannerError>
where
    H: Fn(Coordinate, Coordinate) -> f64,
{
    check_weights(weights)?;
    for node in [start, goal] {
        if !graph.contains(&node) {
            return Err(PathPlannerError::UnknownNode(node));
        }
    }
    run_sweep_with(weights, |weight| search(graph, start, goal, &heuristic, weight))
}


/// Sweep driver over an arbitrary search call
/// `run` receives each weight and performs one complete search with it
pub fn run_sweep_with<F>(weights: &[f64], mut run: F) -> Result<Vec<SweepEntry>, PathPlannerError>
where
    F: FnMut(f64) -> Result<SearchResult, PathPlannerError>,
{
    check_weights(weights)?;

    let mut entries = Vec::with_capacity(weights.len());
    for &weight in weights {
        let started = Instant::now();
        let result = run(weight);
        let elapsed = started.elapsed();

        let outcome = match result {
            Ok(result) => {
                let metrics = RunMetrics::from_result(weight, &result, elapsed);
                info!(
                    weight,
                    cost = metrics.cost,
                    length = metrics.length,
                    iterations = metrics.iterations,
                    elapsed_us = elapsed.as_micros() as u64,
                    "search finished"
                );
                RunOutcome::Found { metrics, path: result.path }
            }
            Err(PathPlannerError::NoPathFound) => {
                warn!(weight, "no path at weight {weight}");
                RunOutcome::NoPath
            }
            Err(e) => return Err(e),
        };
        entries.push(SweepEntry { weight, outcome });
    }

    Ok(entries)
}


fn check_weights(weights: &[f64]) -> Result<(), PathPlannerError> {
    for &weight in weights {
        WeightedAStar::new(weight)?;
    }
    Ok(())
}


/// Run the same weight sweep for each named heuristic, in the given order
pub fn run_comparison(graph: &RoadGraph, start: Coordinate, goal: Coordinate, heuristics: &[HeuristicKind], weights: &[f64]) -> Result<Vec<HeuristicSweep>, PathPlannerError> {
    heuristics
        .iter()
        .map(|&heuristic| {
            info!(%heuristic, weights = weights.len(), "starting sweep");
            let entries = run_sweep(graph, start, goal, heuristic.as_fn(), weights)?;
            Ok(HeuristicSweep { heuristic, entries })
        })
        .collect()
}


/// Reference cost for judging the other runs
/// The cost at weight 1 when that run found a path, otherwise the cheapest found cost
pub fn baseline_cost(entries: &[SweepEntry]) -> Option<f64> {
    found(entries)
        .find(|m| m.weight == 1.0)
        .or_else(|| found(entries).min_by(|a, b| a.cost.total_cmp(&b.cost)))
        .map(|m| m.cost)
}

/// Metrics of the entries that found a path, in sweep order
pub fn found(entries: &[SweepEntry]) -> impl Iterator<Item = &RunMetrics> + '_ {
    entries.iter().filter_map(SweepEntry::metrics)
}

/// Ratio of a run's cost to the baseline, 1.0 means equally cheap
pub fn suboptimality(metrics: &RunMetrics, baseline: f64) -> Option<f64> {
    if baseline > 0.0 {
        Some(metrics.cost / baseline)
    } else if metrics.cost == 0.0 {
        Some(1.0)
    } else {
        None
    }
}
