//! Indexed SSSP - Dijkstra shortest paths over an indexed binary min-heap
//!
//! This library pairs a binary min-heap that tracks the array positions of every stored
//! value (so any element, not just the root, can be removed in O(log n)) with a
//! Dijkstra shortest-path engine that drives it using lazy decrease-key.
//!
//! Edge weights must be non-negative. Negative weights are not detected unless weight
//! validation is switched on in [`SearchConfig`].

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, engine::ShortestPathEngine, SearchConfig, ShortestPathAlgorithm,
    ShortestPathResult, StalePolicy,
};
pub use data_structures::{IndexedBinaryHeap, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, Edge, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Shortest path search was interrupted")]
    Interrupted,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
