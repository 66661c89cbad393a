//! Weighted A* over road-segment graphs, with tooling to sweep the heuristic
//! weight and compare cost, path length, iterations and runtime.
//!
//! ```rust,ignore
//! use wastar::{graph::{EdgeRecord, RoadGraph}, geometry::Coordinate, heuristics, search};
//!
//! let graph = RoadGraph::from_records([EdgeRecord::new(0, 0, 3, 0), EdgeRecord::new(3, 0, 3, 4)], true);
//! let result = search(&graph, Coordinate::new(0, 0), Coordinate::new(3, 4), heuristics::euclidean, 1.0)?;
//! assert_eq!(result.cost, 7.0);
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod harness;
pub mod heuristics;
pub mod map_file;
pub mod report;

pub use errors::PathPlannerError;
pub use geometry::Coordinate;
pub use graph::{EdgeRecord, RoadGraph};
pub use graph_algos::{search, SearchResult, WeightedAStar};
pub use harness::{run_comparison, run_sweep, RunMetrics, RunOutcome, SweepEntry};
