use crate::errors::PathPlannerError;
use crate::collections::FxIndexMap;
use crate::geometry::Coordinate;
use crate::graph::RoadGraph;
use super::{shortest_path, GraphNodeMap, PathRecord};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};



/// Frontier entry on the weighted A* open list
/// Ordered by f_cost, then cost, then push sequence (first pushed wins)
#[derive(Debug)]
struct Node {
    index: usize, // index in the closed_list - maps to the coordinate of the node
    cost: f64, // g(n), cost to reach this node when it was pushed
    f_cost: f64, // g(n) + weight * h(n)
    sequence: usize, // push order, final tie-break
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every key is compared in reverse
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Node {}


/// Outcome of a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub goal: Coordinate,
    pub cost: f64, // sum of euclidean edge lengths along the path
    pub path: Vec<Coordinate>, // start to goal, both inclusive
    pub iterations: usize, // frontier pops, the goal pop included
}

impl SearchResult {

    /// Number of nodes on the path
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}


/// Everything the expansion learned, handed back for path reconstruction
struct Expansion {
    closed_list: GraphNodeMap<Coordinate, f64>,
    trail: Vec<PathRecord>,
    goal: Option<(usize, f64)>, // record and cost of the goal when it was popped
    iterations: usize,
}


/// Weighted A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// f(n) = g(n) + weight * h(n)
/// weight 0 is uniform-cost search, 1 is plain A*, above 1 leans towards greedy best-first
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedAStar {
    weight: f64,
}

impl WeightedAStar {

    /// Rejects negative, NaN and infinite weights
    pub fn new(weight: f64) -> Result<Self, PathPlannerError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PathPlannerError::InvalidWeight(weight));
        }
        Ok(Self { weight })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// From start node, expand through the graph until the goal is popped from the frontier
    /// Edge cost is always the euclidean length of the edge, the heuristic only steers the order
    pub fn search<H>(&self, graph: &RoadGraph, start: Coordinate, goal: Coordinate, heuristic: H) -> Result<SearchResult, PathPlannerError>
    where
        H: Fn(Coordinate, Coordinate) -> f64,
        {

        if !graph.contains(&start) {
            return Err(PathPlannerError::UnknownNode(start));
        }
        if !graph.contains(&goal) {
            return Err(PathPlannerError::UnknownNode(goal));
        }

        let Expansion { closed_list, trail, goal: reached, iterations } = self.build_graph(graph, start, goal, &heuristic)?;

        match reached {
            Some((record, cost)) => {
                let path = shortest_path(&closed_list, &trail, record)?;
                debug!(weight = self.weight, iterations, cost, len = path.len(), "reached {goal} from {start}");
                Ok(SearchResult { goal, cost, path, iterations })
            }
            None => {
                debug!(weight = self.weight, iterations, "no path from {start} to {goal}");
                Err(PathPlannerError::NoPathFound)
            }
        }
    }


    /// Traverses the graph using weighted A*
    /// Returns a map of nodes with their best path record and smallest known cost,
    /// the trail of path records, the goal record and the number of frontier pops
    fn build_graph<H>(&self, graph: &RoadGraph, start: Coordinate, goal: Coordinate, heuristic: &H) -> Result<Expansion, PathPlannerError>
    where
        H: Fn(Coordinate, Coordinate) -> f64,
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

        // Reached nodes with (path record, best cost so far)
        let mut closed_list: GraphNodeMap<Coordinate, f64> = FxIndexMap::default();

        // Every path step ever recorded, a record is never changed once pushed
        let mut trail: Vec<PathRecord> = Vec::new();

        let mut iterations = 0;
        let mut sequence = 0;

        let start_index = closed_list.insert_full(start, (0, 0.0)).0;
        trail.push(PathRecord { node: start_index, parent: usize::MAX });
        open_list.push(Node {
            index: start_index,
            cost: 0.0,
            f_cost: self.weight * heuristic(start, goal),
            sequence,
        });

        while let Some(Node { index, cost, .. }) = open_list.pop() {
            iterations += 1;

            let Some((&node, &(record, best))) = closed_list.get_index(index) else {
                continue;
            };

            // A cheaper path to this node was pushed after this entry and has already been expanded
            // Expanding it again could not improve any neighbor, so the pop is counted and dropped
            if cost > best {
                continue;
            }

            if node == goal {
                return Ok(Expansion { closed_list, trail, goal: Some((record, best)), iterations });
            }

            trace!(%node, cost = best, "expanding");

            for &neighbor in graph.neighbors(&node)? {

                let new_cost = best + node.distance(&neighbor);
                let new_record = trail.len();

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        let i = e.index();
                        e.insert((new_record, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        // strictly cheaper only, equal costs would re-expand forever on ties
                        if new_cost < e.get().1 {
                            e.insert((new_record, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };
                trail.push(PathRecord { node: neighbor_index, parent: record });

                sequence += 1;
                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost + self.weight * heuristic(neighbor, goal),
                    sequence,
                });
            }
        }

        Ok(Expansion { closed_list, trail, goal: None, iterations })
    }
}


/// Run one weighted A* search
/// Fails with InvalidWeight before anything else, then UnknownNode for start or goal,
/// and NoPathFound when the goal cannot be reached
pub fn search<H>(graph: &RoadGraph, start: Coordinate, goal: Coordinate, heuristic: H, weight: f64) -> Result<SearchResult, PathPlannerError>
where
    H: Fn(Coordinate, Coordinate) -> f64,
{
    WeightedAStar::new(weight)?.search(graph, start, goal, heuristic)
}
