use thiserror::Error;
use crate::geometry::Coordinate;


/// Failures of a single search call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathPlannerError {
    #[error("node {0} is not in the graph")]
    UnknownNode(Coordinate), // start or goal never appeared in an edge record
    #[error("no path found")]
    NoPathFound, // goal is unreachable from start
    #[error("invalid weight {0}: must be finite and >= 0")]
    InvalidWeight(f64),
}


/// Failures while reading road-segment map files
#[derive(Error, Debug)]
pub enum MapError {
    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse map: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("map contains no edge records")]
    Empty,
}


/// Failures while writing CSV / SVG reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}


/// Failures while loading a sweep configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

