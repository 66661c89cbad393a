use kdtree::KdTree;
use kdtree::distance::squared_euclidean;
use tracing::warn;

use crate::geometry::Coordinate;
use super::RoadGraph;


/// Spatial index over the nodes of a road graph
/// Used to snap user-supplied positions onto the closest node before a search,
/// the engine itself only accepts exact nodes
pub struct NodeLocator {
    tree: KdTree<f64, Coordinate, [f64; 2]>,
}

impl NodeLocator {

    pub fn new(graph: &RoadGraph) -> Self {
        let mut tree = KdTree::new(2);
        for node in graph.nodes() {
            // integer coordinates are always finite, so insertion cannot fail
            if let Err(e) = tree.add([node.x as f64, node.y as f64], node) {
                warn!("skipping node {node} in spatial index: {e}");
            }
        }
        Self { tree }
    }

    /// Closest node to a position, None for an empty graph or a non-finite position
    pub fn nearest(&self, x: f64, y: f64) -> Option<Coordinate> {
        self.tree
            .nearest(&[x, y], 1, &squared_euclidean)
            .ok()?
            .first()
            .map(|&(_, node)| *node)
    }

    /// Snap a coordinate onto the graph, returning it unchanged when it is already a node
    pub fn snap(&self, graph: &RoadGraph, point: Coordinate) -> Option<Coordinate> {
        if graph.contains(&point) {
            return Some(point);
        }
        self.nearest(point.x as f64, point.y as f64)
    }
}
