use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Source-to-target vertex sequence, or `None` if the target is unreachable
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        match self.distances.get(target) {
            Some(Some(_)) => walk_parents(&self.predecessors, self.source, target),
            _ => None,
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}

/// Follows parent pointers back from `target` to `source` and returns the path in
/// source-to-target order.
///
/// Gives `None` if the chain breaks or runs longer than the graph, which only
/// happens when the parents were produced from a graph with negative weights.
pub(crate) fn walk_parents(
    parents: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        current = parents.get(current).copied().flatten()?;
        path.push(current);

        if path.len() > parents.len() {
            warn!("Parent chain from {} does not reach {}, likely a cycle", target, source);
            return None;
        }
    }

    path.reverse();
    Some(path)
}
