//! Independent queries over one shared graph, run in parallel.
//!
//! The graph is only read. Each query allocates its own run state and heap.

use rayon::prelude::*;

use crate::algorithm::dijkstra::{run, Dijkstra, RunState};
use crate::algorithm::{SearchConfig, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Full single-source results for every source, in input order
pub fn shortest_paths_from_sources<W, G>(
    graph: &G,
    sources: &[usize],
    config: &SearchConfig,
) -> Vec<Result<ShortestPathResult<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    let dijkstra = Dijkstra::with_config(config.clone());
    sources
        .par_iter()
        .map(|&source| dijkstra.compute_shortest_paths(graph, source))
        .collect()
}

/// Source-target distances for every pair, in input order
pub fn pairwise_distances<W, G>(
    graph: &G,
    pairs: &[(usize, usize)],
    config: &SearchConfig,
) -> Vec<Result<W>>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    pairs
        .par_iter()
        .map(|&(source, target)| {
            let mut state = RunState::new(graph.vertex_count());
            run(graph, source, Some(target), &mut state, config)?;
            Ok(state.distance(target))
        })
        .collect()
}
