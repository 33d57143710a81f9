use crate::algorithm::dijkstra::{run, RunState, RunStats};
use crate::algorithm::SearchConfig;
use crate::graph::{DirectedGraph, Graph, MutableGraph, Weight};
use crate::Result;

/// Owns a graph plus the run state of its most recent query.
///
/// Build the graph with [`add_edge`](Self::add_edge), then query it with
/// [`dijkstra`](Self::dijkstra) or [`reconstruct_path`](Self::reconstruct_path).
/// Every query resets the run state, so results never leak between calls.
///
/// ```
/// use indexed_sssp::ShortestPathEngine;
///
/// let mut engine = ShortestPathEngine::<u64>::new(3);
/// engine.add_edge(0, 1, 4).unwrap();
/// engine.add_edge(1, 2, 1).unwrap();
/// assert_eq!(engine.dijkstra(0, 2).unwrap(), 5);
/// assert_eq!(engine.reconstruct_path(0, 2).unwrap(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<W>
where
    W: Weight,
{
    graph: DirectedGraph<W>,
    state: RunState<W>,
    config: SearchConfig,
}

impl<W> ShortestPathEngine<W>
where
    W: Weight,
{
    /// Creates an engine over vertices `0..n` with no edges
    pub fn new(n: usize) -> Self {
        Self::from_graph(DirectedGraph::new(n))
    }

    /// Wraps an already built graph
    pub fn from_graph(graph: DirectedGraph<W>) -> Self {
        let state = RunState::new(graph.vertex_count());
        ShortestPathEngine {
            graph,
            state,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search settings
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn graph(&self) -> &DirectedGraph<W> {
        &self.graph
    }

    /// Appends a directed edge. Fails with `InvalidVertex` if either end is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Shortest distance from `source` to `target`; `W::infinity()` if unreachable.
    pub fn dijkstra(&mut self, source: usize, target: usize) -> Result<W> {
        run(&self.graph, source, Some(target), &mut self.state, &self.config)?;
        Ok(self.state.distance(target))
    }

    /// Re-runs the search and returns the source-to-target vertex sequence.
    /// An empty vector means `target` is unreachable.
    pub fn reconstruct_path(&mut self, source: usize, target: usize) -> Result<Vec<usize>> {
        self.dijkstra(source, target)?;
        Ok(self.state.path_to(source, target))
    }

    /// Distances computed by the last query
    pub fn distances(&self) -> &[W] {
        self.state.distances()
    }

    /// Parent pointers computed by the last query
    pub fn parents(&self) -> &[Option<usize>] {
        self.state.parents()
    }

    /// Counters from the last query
    pub fn last_stats(&self) -> &RunStats {
        self.state.stats()
    }
}
