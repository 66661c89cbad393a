use crate::errors::PathPlannerError;
use super::GraphNodeMap;


/// One step of a path kept during the search
/// Records are append-only, a path is the chain of parents ending at a record,
/// so a path stays valid even after one of its nodes is reached more cheaply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PathRecord {
    pub node: usize, // index of the node in the node map
    pub parent: usize, // index of the previous record, usize::MAX at the start
}


/// Construct the path ending at a record
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their best record and cost
/// trail: every record created during the search
/// record: index of the last record of the path
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, trail: &[PathRecord], record: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current = record;

    while current != usize::MAX {
        let Some(&PathRecord { node, parent }) = trail.get(current) else {
            return Err(PathPlannerError::NoPathFound);
        };
        let Some((node, _)) = node_map.get_index(node) else {
            return Err(PathPlannerError::NoPathFound);
        };
        // parents are always recorded before their children
        if parent != usize::MAX && parent >= current {
            return Err(PathPlannerError::NoPathFound);
        }
        path.push(node.clone());
        current = parent;
    }

    path.reverse();

    if path.is_empty() {
        return Err(PathPlannerError::NoPathFound);
    }

    Ok(path)
}
