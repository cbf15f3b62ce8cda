//! Builds the province adjacency mapping from raw relation lines.
pub mod adjacency;
pub mod builder;

pub use adjacency::{AdjacencyMap, Neighbours};
pub use builder::{BuildOutput, RelationGraphBuilder};
