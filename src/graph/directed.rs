use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::{Edge, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex, indexed by vertex id
    adjacency: Vec<Vec<Edge<W>>>,

    /// Total number of edges across all lists
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new graph with vertices `0..vertices` and no edges
    pub fn new(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.find_negative_edge().is_none()
    }

    /// Iterates over every edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adjacency.iter().flatten()
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new(0)
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or(Error::InvalidVertex(from))?;
        edges.push(Edge { from, to, weight });
        self.edge_count += 1;
        Ok(())
    }
}
