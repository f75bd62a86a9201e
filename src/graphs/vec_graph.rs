use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Graph, VertexId, Weight,
};

/// Explicit graph stored as one adjacency list per vertex.
///
/// Each adjacency list is sorted by head, and there is at most one edge per
/// (tail, head) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VecGraph<W> {
    edges: Vec<Vec<TaillessEdge<W>>>,
}

impl<W> Default for VecGraph<W> {
    fn default() -> Self {
        VecGraph { edges: Vec::new() }
    }
}

impl<W: Weight> VecGraph<W> {
    pub fn new() -> VecGraph<W> {
        VecGraph::default()
    }

    /// Graph on the vertices `0..number_of_vertices` without any edges.
    pub fn with_vertices(number_of_vertices: u32) -> VecGraph<W> {
        VecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds a graph from a list of edges. Of several parallel edges only the
    /// lightest one is kept.
    pub fn from_edges(edges: &[WeightedEdge<W>]) -> VecGraph<W> {
        let mut graph = VecGraph::default();

        edges.iter().for_each(|edge| {
            let is_lighter = graph
                .get_weight(edge.tail(), edge.head())
                .map_or(true, |current| edge.weight() < current);
            if is_lighter {
                graph.set_weight(edge.tail(), edge.head(), Some(edge.weight()));
            }
        });

        graph
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.iter().map(|edges| edges.len() as u32).sum()
    }

    pub fn edges(&self, tail: VertexId) -> impl ExactSizeIterator<Item = WeightedEdge<W>> + '_ {
        self.edges
            .get(tail as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |tailless_edge| tailless_edge.set_tail(tail))
    }

    pub fn all_edges(&self) -> Vec<WeightedEdge<W>> {
        (0..self.number_of_vertices())
            .flat_map(|tail| self.edges(tail))
            .collect()
    }

    pub fn get_weight(&self, tail: VertexId, head: VertexId) -> Option<W> {
        let edges_sharing_tail = self.edges.get(tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&head, |tailless_edge| tailless_edge.head())
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight())
    }

    /// Connects `tail` and `head` with the given weight, or disconnects them
    /// if `weight` is `None`.
    pub fn set_weight(&mut self, tail: VertexId, head: VertexId, weight: Option<W>) {
        // Both endpoints must be valid vertices afterwards.
        let max_edge_endpoint = std::cmp::max(tail, head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[tail as usize];
        let edge_index =
            edges_sharing_tail.binary_search_by_key(&head, |tailless_edge| tailless_edge.head());

        match (weight, edge_index) {
            (Some(weight), Ok(index)) => edges_sharing_tail[index].set_weight(weight),
            (Some(weight), Err(index)) => {
                edges_sharing_tail.insert(index, TaillessEdge::new(head, weight))
            }
            (None, Ok(index)) => {
                edges_sharing_tail.remove(index);
            }
            (None, Err(_)) => {}
        }
    }

    pub fn set_edge(&mut self, edge: &WeightedEdge<W>) {
        self.set_weight(edge.tail(), edge.head(), Some(edge.weight()));
    }

    pub fn add_edge_bidirectional(&mut self, edge: &WeightedEdge<W>) {
        self.set_edge(edge);
        self.set_edge(&edge.reversed());
    }
}

impl<W: Weight> Graph for VecGraph<W> {
    type Vertex = VertexId;
    type Edge = WeightedEdge<W>;
    type Weight = W;

    fn out_edges(&self, tail: &VertexId, edges: &mut Vec<WeightedEdge<W>>) {
        edges.extend(self.edges(*tail));
    }

    fn weight(&self, _tail: &VertexId, edge: &WeightedEdge<W>) -> W {
        edge.weight()
    }

    fn head(&self, edge: &WeightedEdge<W>) -> VertexId {
        edge.head()
    }
}
