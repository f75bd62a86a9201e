use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod brute_force;
pub mod dijkstra;
pub mod path;

pub use dijkstra::{shortest_path, shortest_path_matching, Dijkstra};

/// Ways a search can fail. Both abort the search without a partial path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An edge with a negative (or NaN) weight was reached.
    #[error("edge weight is negative")]
    InvalidWeight,

    /// Every reachable vertex was finalized without reaching the destination.
    #[error("no path found")]
    NoPathFound,
}

/// A shortest path as the sequence of edges from start to goal, and its total
/// weight. The path from a vertex to itself has no edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<E, W> {
    pub edges: Vec<E>,
    pub weight: W,
}

impl<E, W> Path<E, W> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
