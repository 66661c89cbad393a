//! Shared fixtures for the integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use wastar::{Coordinate, EdgeRecord, RoadGraph};


/// Random road graph with `nodes` distinct points in a 50 x 50 box
/// Every node gets one to three segments to other nodes, so it may be disconnected
pub fn random_graph(seed: u64, nodes: usize) -> RoadGraph {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut points: Vec<Coordinate> = Vec::with_capacity(nodes);
    while points.len() < nodes {
        let p = Coordinate::new(rng.random_range(0..50), rng.random_range(0..50));
        if !points.contains(&p) {
            points.push(p);
        }
    }

    let mut records = Vec::new();
    for (i, &from) in points.iter().enumerate() {
        for _ in 0..rng.random_range(1..=3) {
            let j = rng.random_range(0..nodes);
            if j != i {
                let to = points[j];
                records.push(EdgeRecord::new(from.x, from.y, to.x, to.y));
            }
        }
    }
    RoadGraph::from_records(records, true)
}


/// All-pairs shortest path costs by Floyd-Warshall, indexed in graph node order
pub struct Distances {
    nodes: Vec<Coordinate>,
    dist: Vec<Vec<f64>>,
}

impl Distances {
    pub fn new(graph: &RoadGraph) -> Self {
        let nodes: Vec<Coordinate> = graph.nodes().collect();
        let n = nodes.len();
        let mut dist = vec![vec![f64::INFINITY; n]; n];

        for (i, node) in nodes.iter().enumerate() {
            dist[i][i] = 0.0;
            for neighbor in graph.neighbors(node).unwrap() {
                let j = nodes.iter().position(|c| c == neighbor).unwrap();
                dist[i][j] = dist[i][j].min(node.distance(neighbor));
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                    }
                }
            }
        }
        Self { nodes, dist }
    }

    pub fn nodes(&self) -> &[Coordinate] {
        &self.nodes
    }

    pub fn between(&self, a: usize, b: usize) -> f64 {
        self.dist[a][b]
    }
}


/// Sum of edge lengths, panicking if two consecutive nodes are not adjacent
pub fn walk_cost(graph: &RoadGraph, path: &[Coordinate]) -> f64 {
    path.windows(2)
        .map(|pair| {
            assert!(
                graph.neighbors(&pair[0]).unwrap().contains(&pair[1]),
                "{} and {} are not adjacent", pair[0], pair[1]
            );
            pair[0].distance(&pair[1])
        })
        .sum()
}
