use log::{debug, trace, warn};

use crate::algorithm::traits::walk_parents;
use crate::algorithm::{SearchConfig, ShortestPathAlgorithm, ShortestPathResult, StalePolicy};
use crate::data_structures::PriorityQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records pushed into the heap, including the source
    pub pushes: usize,
    /// Records popped from the heap
    pub pops: usize,
    /// Popped records whose vertex was already settled
    pub stale_pops: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Superseded records removed under `StalePolicy::Evict`
    pub evictions: usize,
    /// Largest heap size observed
    pub peak_queue_len: usize,
}

/// Distance, settled-flag and parent arrays for one run.
///
/// Each concurrent query needs its own `RunState`; the graph itself can be shared.
#[derive(Debug, Clone)]
pub struct RunState<W>
where
    W: Weight,
{
    dist: Vec<W>,
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    stats: RunStats,
}

impl<W> RunState<W>
where
    W: Weight,
{
    /// Allocates state for `n` vertices, every distance at infinity
    pub fn new(n: usize) -> Self {
        RunState {
            dist: vec![W::infinity(); n],
            visited: vec![false; n],
            parent: vec![None; n],
            stats: RunStats::default(),
        }
    }

    /// Best known distances, indexed by vertex
    pub fn distances(&self) -> &[W] {
        &self.dist
    }

    /// Distance of one vertex; infinity when unreachable or out of range
    pub fn distance(&self, vertex: usize) -> W {
        self.dist.get(vertex).copied().unwrap_or_else(W::infinity)
    }

    /// Predecessor of each vertex in the shortest path tree
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// True once the vertex's distance is final
    pub fn is_settled(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Vertex sequence from `source` to `target`, empty when `target` is unreachable
    pub fn path_to(&self, source: usize, target: usize) -> Vec<usize> {
        if self.distance(target).is_infinite() {
            return Vec::new();
        }
        walk_parents(&self.parent, source, target).unwrap_or_default()
    }

    /// Converts into the all-targets result form
    pub fn into_result(self, source: usize) -> ShortestPathResult<W> {
        let distances = self
            .dist
            .into_iter()
            .map(|d| if d.is_infinite() { None } else { Some(d) })
            .collect();

        ShortestPathResult {
            distances,
            predecessors: self.parent,
            source,
        }
    }

    fn reset(&mut self, n: usize) {
        self.dist.clear();
        self.dist.resize(n, W::infinity());
        self.visited.clear();
        self.visited.resize(n, false);
        self.parent.clear();
        self.parent.resize(n, None);
        self.stats = RunStats::default();
    }
}

/// Runs the relax loop from `source`, stopping early once `target` is settled.
///
/// `state` is reset first, so it may be reused across runs. Stale heap records are
/// recognised by the settled flag when popped; under `StalePolicy::Evict` they are
/// removed as soon as they are superseded instead.
pub fn run<W, G>(
    graph: &G,
    source: usize,
    target: Option<usize>,
    state: &mut RunState<W>,
    config: &SearchConfig,
) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::InvalidVertex(source));
    }
    if let Some(target) = target {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
    }
    if config.validate_weights {
        if let Some(edge) = graph.find_negative_edge() {
            return Err(Error::NegativeWeight {
                from: edge.from,
                to: edge.to,
            });
        }
    }

    debug!(
        "Dijkstra from {} to {:?} over {} vertices, {} edges",
        source,
        target,
        graph.vertex_count(),
        graph.edge_count()
    );

    state.reset(graph.vertex_count());
    state.dist[source] = W::zero();

    let mut queue = PriorityQueue::with_capacity(config.heap_capacity);
    queue.push(source, W::zero());
    state.stats.pushes = 1;
    state.stats.peak_queue_len = 1;

    while let Some((u, dist_u)) = queue.pop() {
        state.stats.pops += 1;

        if config.is_cancelled() {
            warn!("Dijkstra from {} interrupted after {} pops", source, state.stats.pops);
            return Err(Error::Interrupted);
        }

        if state.visited[u] {
            state.stats.stale_pops += 1;
            continue;
        }
        state.visited[u] = true;

        // Nothing left in the queue can improve a settled target
        if Some(u) == target {
            break;
        }

        for edge in graph.outgoing_edges(u) {
            let v = edge.to;
            if state.visited[v] {
                continue;
            }

            let candidate = dist_u.saturating_add(edge.weight);
            let current = state.dist[v];
            if candidate >= current {
                continue;
            }

            if config.stale_policy == StalePolicy::Evict
                && !current.is_infinite()
                && queue.remove(v, current)
            {
                state.stats.evictions += 1;
            }

            trace!("Relaxed {} -> {}: {:?} -> {:?}", u, v, current, candidate);
            state.dist[v] = candidate;
            state.parent[v] = Some(u);
            queue.push(v, candidate);

            state.stats.relaxations += 1;
            state.stats.pushes += 1;
            state.stats.peak_queue_len = state.stats.peak_queue_len.max(queue.len());
        }
    }

    debug!("Dijkstra from {} finished: {:?}", source, state.stats);
    Ok(())
}

/// Classic Dijkstra's algorithm over the whole graph, with no early exit
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    config: SearchConfig,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates an instance using the given settings
    pub fn with_config(config: SearchConfig) -> Self {
        Dijkstra { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let mut state = RunState::new(graph.vertex_count());
        run(graph, source, None, &mut state, &self.config)?;
        Ok(state.into_result(source))
    }
}
