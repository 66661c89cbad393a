mod nearest;

pub use nearest::NodeLocator;

use rand::Rng;
use tracing::debug;
use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::geometry::{Bounds, Coordinate};


/// One raw road segment, `(startX, startY, endX, endY)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl EdgeRecord {
    pub fn new(start_x: i64, start_y: i64, end_x: i64, end_y: i64) -> Self {
        Self {
            start: Coordinate::new(start_x, start_y),
            end: Coordinate::new(end_x, end_y),
        }
    }
}


/// Adjacency lists keyed by coordinate
/// Node order and neighbor order both follow the order of the input records
/// Built once and only read afterwards, any number of searches can borrow it
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    adjacency: FxIndexMap<Coordinate, Vec<Coordinate>>,
}

impl RoadGraph {

    /// Build a graph from edge records
    /// With `mirror` set every segment is walkable both ways
    pub fn from_records<I>(records: I, mirror: bool) -> Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = RoadGraph::default();
        for record in records {
            graph.insert_edge(record.start, record.end);
            if mirror {
                graph.insert_edge(record.end, record.start);
            } else {
                // end points are still nodes, even without outgoing edges
                graph.adjacency.entry(record.end).or_default();
            }
        }
        debug!(nodes = graph.node_count(), edges = graph.edge_count(), mirror, "built road graph");
        graph
    }

    fn insert_edge(&mut self, from: Coordinate, to: Coordinate) {
        let neighbors = self.adjacency.entry(from).or_default();
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }

    /// Adjacent nodes in insertion order
    /// An unknown node is an error, not an empty list
    pub fn neighbors(&self, node: &Coordinate) -> Result<&[Coordinate], PathPlannerError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(PathPlannerError::UnknownNode(*node))
    }

    pub fn contains(&self, node: &Coordinate) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (a mirrored segment counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each undirected segment once, for drawing
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.adjacency.iter().flat_map(move |(&from, neighbors)| {
            neighbors.iter().filter_map(move |&to| {
                // a mirrored pair is reported from its smaller endpoint only
                let mirrored = self.adjacency.get(&to).is_some_and(|back| back.contains(&from));
                if mirrored && to < from {
                    None
                } else {
                    Some((from, to))
                }
            })
        })
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.nodes())
    }

    /// Two distinct nodes picked uniformly at random, None with fewer than two nodes
    /// The pair is not guaranteed to be connected
    pub fn random_pair<R: Rng>(&self, rng: &mut R) -> Option<(Coordinate, Coordinate)> {
        let n = self.node_count();
        if n < 2 {
            return None;
        }
        let first = rng.random_range(0..n);
        // draw from the remaining n - 1 nodes and skip over the first pick
        let mut second = rng.random_range(0..n - 1);
        if second >= first {
            second += 1;
        }
        let (&start, _) = self.adjacency.get_index(first)?;
        let (&goal, _) = self.adjacency.get_index(second)?;
        Some((start, goal))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i64, y: i64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_mirrored_edges() {
        let graph = RoadGraph::from_records([
            EdgeRecord::new(0, 0, 3, 0),
            EdgeRecord::new(3, 0, 3, 4),
        ], true);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(&c(0, 0)).unwrap(), &[c(3, 0)]);
        assert_eq!(graph.neighbors(&c(3, 0)).unwrap(), &[c(0, 0), c(3, 4)]);
        assert_eq!(graph.neighbors(&c(3, 4)).unwrap(), &[c(3, 0)]);
    }

    #[test]
    fn test_duplicate_records_do_not_duplicate_edges() {
        // B->A appears both as its own record and as the mirror of A->B
        let graph = RoadGraph::from_records([
            EdgeRecord::new(0, 0, 1, 0),
            EdgeRecord::new(1, 0, 0, 0),
            EdgeRecord::new(0, 0, 1, 0),
        ], true);

        assert_eq!(graph.neighbors(&c(0, 0)).unwrap(), &[c(1, 0)]);
        assert_eq!(graph.neighbors(&c(1, 0)).unwrap(), &[c(0, 0)]);
        assert_eq!(graph.segments().count(), 1);
    }

    #[test]
    fn test_directed_records() {
        let graph = RoadGraph::from_records([EdgeRecord::new(0, 0, 1, 0)], false);

        assert!(graph.contains(&c(1, 0)));
        assert_eq!(graph.neighbors(&c(0, 0)).unwrap(), &[c(1, 0)]);
        assert!(graph.neighbors(&c(1, 0)).unwrap().is_empty());
        assert_eq!(graph.segments().collect::<Vec<_>>(), vec![(c(0, 0), c(1, 0))]);
    }

    #[test]
    fn test_unknown_node() {
        let graph = RoadGraph::from_records([EdgeRecord::new(0, 0, 1, 0)], true);

        assert_eq!(graph.neighbors(&c(5, 5)), Err(PathPlannerError::UnknownNode(c(5, 5))));
        assert!(!graph.contains(&c(5, 5)));
    }

    #[test]
    fn test_random_pair() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let graph = RoadGraph::from_records([
            EdgeRecord::new(0, 0, 1, 0),
            EdgeRecord::new(1, 0, 2, 0),
        ], true);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let (start, goal) = graph.random_pair(&mut rng).unwrap();
            assert_ne!(start, goal);
            assert!(graph.contains(&start));
            assert!(graph.contains(&goal));
        }

        let single = RoadGraph::from_records([EdgeRecord::new(0, 0, 0, 0)], true);
        assert_eq!(single.random_pair(&mut rng), None);
    }

    #[test]
    fn test_neighbor_order_follows_input() {
        let graph = RoadGraph::from_records([
            EdgeRecord::new(0, 0, 0, 5),
            EdgeRecord::new(0, 0, -2, 0),
            EdgeRecord::new(0, 0, 9, 9),
        ], true);

        assert_eq!(graph.neighbors(&c(0, 0)).unwrap(), &[c(0, 5), c(-2, 0), c(9, 9)]);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![c(0, 0), c(0, 5), c(-2, 0), c(9, 9)]);

        let bounds = graph.bounds().unwrap();
        assert_eq!(bounds.min, c(-2, 0));
        assert_eq!(bounds.max, c(9, 9));
    }
}
