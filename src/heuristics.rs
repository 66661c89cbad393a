use std::fmt;
use clap::ValueEnum;
use serde::Deserialize;
use crate::geometry::Coordinate;


/// Straight-line distance to the goal
/// Admissible and consistent, since edge costs are straight-line distances too
pub fn euclidean(a: Coordinate, b: Coordinate) -> f64 {
    a.distance(&b)
}

/// Taxicab distance to the goal
/// Overestimates on any diagonal segment, so it is not admissible here
pub fn manhattan(a: Coordinate, b: Coordinate) -> f64 {
    a.taxicab(&b)
}


/// Named heuristic, selectable from the command line or a config file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    Euclidean,
    Manhattan,
}

impl HeuristicKind {

    pub fn estimate(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            HeuristicKind::Euclidean => euclidean(a, b),
            HeuristicKind::Manhattan => manhattan(a, b),
        }
    }

    /// Plain function pointer, usable wherever the engine expects a heuristic
    pub fn as_fn(&self) -> fn(Coordinate, Coordinate) -> f64 {
        match self {
            HeuristicKind::Euclidean => euclidean,
            HeuristicKind::Manhattan => manhattan,
        }
    }

    pub fn is_admissible(&self) -> bool {
        matches!(self, HeuristicKind::Euclidean)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_manhattan_overestimates_diagonals() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, 4);

        assert_relative_eq!(euclidean(a, b), 5.0);
        assert_relative_eq!(manhattan(a, b), 7.0);
        assert!(manhattan(a, b) > euclidean(a, b));
    }

    #[test]
    fn test_non_negative_and_symmetric() {
        let points = [
            Coordinate::new(-5, 2),
            Coordinate::new(7, -3),
            Coordinate::new(0, 0),
            Coordinate::new(i32::MAX as i64, i32::MIN as i64),
        ];
        for &a in &points {
            for &b in &points {
                for kind in [HeuristicKind::Euclidean, HeuristicKind::Manhattan] {
                    let h = kind.estimate(a, b);
                    assert!(h >= 0.0);
                    assert!(h.is_finite());
                    assert_eq!(h, kind.estimate(b, a));
                    assert_eq!(h, (kind.as_fn())(a, b));
                }
            }
            assert_eq!(euclidean(a, a), 0.0);
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(HeuristicKind::Euclidean.to_string(), "euclidean");
        assert_eq!(HeuristicKind::from_str("manhattan", true), Ok(HeuristicKind::Manhattan));
        assert!(HeuristicKind::Euclidean.is_admissible());
        assert!(!HeuristicKind::Manhattan.is_admissible());
    }
}
