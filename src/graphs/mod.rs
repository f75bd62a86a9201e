use std::{fmt::Debug, hash::Hash, ops::Add};

use num_traits::Zero;

pub mod edge;
pub mod generated;
pub mod graph_factory;
pub mod graph_functions;
pub mod vec_graph;

pub type VertexId = u32;

/// Edge weights and cumulative path weights.
///
/// Anything that can be added, compared and has a zero qualifies, so both
/// integer and floating point weights work. Weights are expected to be
/// non-negative; the search reports anything below zero (or incomparable to
/// zero, like `NaN`) as an invalid weight. The weight of every explored path
/// has to fit into the type; integer sums that overflow are not detected.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Zero + Debug {}

impl<W> Weight for W where W: Copy + PartialOrd + Add<Output = W> + Zero + Debug {}

/// The access contract between a graph and the search.
///
/// The search never asks for the whole graph, only for the outgoing edges of
/// the vertex it currently expands. Implementations may therefore describe
/// graphs that are implicit or even infinite.
pub trait Graph {
    type Vertex: Clone + Eq + Hash;
    type Edge;
    type Weight: Weight;

    /// Appends the outgoing edges of `tail` to `edges`.
    ///
    /// The buffer is owned by the caller and reused between calls, so
    /// implementations must append and never assume it starts out empty.
    fn out_edges(&self, tail: &Self::Vertex, edges: &mut Vec<Self::Edge>);

    /// Weight of `edge`, which was produced by `out_edges(tail, ..)`.
    fn weight(&self, tail: &Self::Vertex, edge: &Self::Edge) -> Self::Weight;

    /// Vertex `edge` leads to.
    fn head(&self, edge: &Self::Edge) -> Self::Vertex;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type Weight = G::Weight;

    fn out_edges(&self, tail: &Self::Vertex, edges: &mut Vec<Self::Edge>) {
        (**self).out_edges(tail, edges)
    }

    fn weight(&self, tail: &Self::Vertex, edge: &Self::Edge) -> Self::Weight {
        (**self).weight(tail, edge)
    }

    fn head(&self, edge: &Self::Edge) -> Self::Vertex {
        (**self).head(edge)
    }
}
