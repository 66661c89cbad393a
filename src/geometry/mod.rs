use std::{fmt, str::FromStr};
use num_traits::{Num, Signed, Float};
use serde::Deserialize;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).hypot(y1 - y2)
}


/// Integer map position, also the identity of a graph node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "(i64, i64)")]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, the true cost of an edge between two adjacent nodes
    pub fn distance(&self, other: &Coordinate) -> f64 {
        euclidean(self.x as f64, self.y as f64, other.x as f64, other.y as f64)
    }

    /// Taxicab distance, computed in f64 so extreme coordinates cannot overflow
    pub fn taxicab(&self, other: &Coordinate) -> f64 {
        manhattan_distance(self.x as f64, self.y as f64, other.x as f64, other.y as f64)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    /// Parses "x,y" (whitespace around either number is allowed)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
        let x = x.trim().parse::<i64>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
        let y = y.trim().parse::<i64>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
        Ok(Self { x, y })
    }
}


/// Axis-aligned bounding box of a set of coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {

    /// Smallest box containing every point, None for an empty iterator
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds { min: first, max: first };
        for p in points {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Horizontal extent, in f64 since the span of two i64 can exceed i64
    pub fn width(&self) -> f64 {
        self.max.x as f64 - self.min.x as f64
    }

    pub fn height(&self) -> f64 {
        self.max.y as f64 - self.min.y as f64
    }
}
