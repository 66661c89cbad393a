use std::path::{Path, PathBuf};
use serde::Deserialize;
use tracing::info;

use crate::errors::ConfigError;
use crate::geometry::Coordinate;
use crate::graph_algos::WeightedAStar;
use crate::heuristics::HeuristicKind;


/// Everything needed to run a sweep from the command line
/// Every field can come from a TOML file, command line flags override it
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Road-segment map file
    pub map: Option<PathBuf>,

    /// Start node as `[x, y]`
    pub start: Option<Coordinate>,

    /// Goal node as `[x, y]`
    pub goal: Option<Coordinate>,

    /// Heuristic weights, run in this order
    #[serde(default = "default_weights")]
    pub weights: Vec<f64>,

    /// Heuristics to compare (default: euclidean)
    #[serde(default = "default_heuristics")]
    pub heuristics: Vec<HeuristicKind>,

    /// Treat every segment as two-way (default: true)
    #[serde(default = "default_mirror")]
    pub mirror: bool,

    /// Move start and goal onto the nearest graph node when they are not nodes
    #[serde(default)]
    pub snap: bool,

    /// Seed for picking a random start/goal pair when none is given
    pub seed: Option<u64>,

    /// Directory for the CSV summaries and SVG overlays (default: results)
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_weights() -> Vec<f64> {
    vec![0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0]
}

fn default_heuristics() -> Vec<HeuristicKind> {
    vec![HeuristicKind::Euclidean]
}

fn default_mirror() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from("results")
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            map: None,
            start: None,
            goal: None,
            weights: default_weights(),
            heuristics: default_heuristics(),
            mirror: default_mirror(),
            snap: false,
            seed: None,
            output: default_output(),
        }
    }
}

impl SweepConfig {

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!("loaded config {}", path.display());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks that can be made before the map is loaded
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.is_none() {
            return Err(ConfigError::Invalid("no map file given".into()));
        }
        if self.weights.is_empty() {
            return Err(ConfigError::Invalid("no weights to sweep".into()));
        }
        if let Some(bad) = self.weights.iter().find(|&&w| WeightedAStar::new(w).is_err()) {
            return Err(ConfigError::Invalid(format!("weight {bad} must be finite and >= 0")));
        }
        if self.heuristics.is_empty() {
            return Err(ConfigError::Invalid("no heuristics to compare".into()));
        }
        if self.start.is_some() != self.goal.is_some() {
            return Err(ConfigError::Invalid("start and goal must be given together".into()));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = SweepConfig::from_toml("").unwrap();
        assert_eq!(config, SweepConfig::default());
        assert!(config.mirror);
        assert_eq!(config.weights, vec![0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_full_file() {
        let config = SweepConfig::from_toml(r#"
            map = "data/map.csv"
            start = [10, 20]
            goal = [-3, 4]
            weights = [1, 2.5]
            heuristics = ["manhattan", "euclidean"]
            mirror = false
            snap = true
            seed = 42
            output = "out"
        "#).unwrap();

        assert_eq!(config.map, Some(PathBuf::from("data/map.csv")));
        assert_eq!(config.start, Some(Coordinate::new(10, 20)));
        assert_eq!(config.goal, Some(Coordinate::new(-3, 4)));
        assert_eq!(config.weights, vec![1.0, 2.5]);
        assert_eq!(config.heuristics, vec![HeuristicKind::Manhattan, HeuristicKind::Euclidean]);
        assert!(!config.mirror);
        assert!(config.snap);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output, PathBuf::from("out"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(matches!(SweepConfig::from_toml("wieghts = [1.0]"), Err(ConfigError::Parse(_))));
        assert!(matches!(SweepConfig::from_toml("heuristics = [\"chebyshev\"]"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate() {
        let mut config = SweepConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.map = Some(PathBuf::from("map.csv"));
        assert!(config.validate().is_ok());

        config.weights = vec![1.0, -1.0];
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.weights = vec![1.0];
        config.start = Some(Coordinate::new(0, 0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
