pub mod batch;
pub mod config;
pub mod dijkstra;
pub mod engine;
pub mod traits;

pub use config::{SearchConfig, StalePolicy};
pub use dijkstra::{RunState, RunStats};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
