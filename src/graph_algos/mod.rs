
pub mod a_star;
mod shortest_path;

use shortest_path::{shortest_path, PathRecord};

use crate::collections::FxIndexMap;

pub use a_star::{search, SearchResult, WeightedAStar};

/// Type alias for the node map built during a search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (record_index, cost) where:
/// - record_index points at the last step of the best known path to this node
/// - cost is the best known cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
