use std::fmt::Debug;

use crate::graph::{Edge, Weight};
use crate::Result;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in insertion order.
    /// Out-of-range vertices have no edges.
    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).iter().any(|edge| edge.to == to)
    }

    /// Finds the first edge carrying a negative weight, if any
    fn find_negative_edge(&self) -> Option<&Edge<W>> {
        (0..self.vertex_count())
            .flat_map(|v| self.outgoing_edges(v).iter())
            .find(|edge| edge.weight.is_negative())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge. Parallel edges and self-loops are accepted as-is.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
