pub mod directed;
pub mod generators;
pub mod traits;
pub mod weight;

pub use directed::DirectedGraph;
pub use traits::{Graph, MutableGraph};
pub use weight::Weight;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}
