use serde::{Deserialize, Serialize};

use super::VertexId;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Hash, Debug)]
pub struct WeightedEdge<W> {
    tail: VertexId,
    head: VertexId,
    weight: W,
}

impl<W: Copy> WeightedEdge<W> {
    pub fn new(tail: VertexId, head: VertexId, weight: W) -> WeightedEdge<W> {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge<W> {
        WeightedEdge {
            head: self.tail,
            tail: self.head,
            weight: self.weight,
        }
    }
}

/// Edge as stored in an adjacency list, where the tail is implied by the
/// list the edge lives in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaillessEdge<W> {
    head: VertexId,
    weight: W,
}

impl<W: Copy> TaillessEdge<W> {
    pub fn new(head: VertexId, weight: W) -> TaillessEdge<W> {
        TaillessEdge { head, weight }
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge<W> {
        WeightedEdge::new(tail, self.head, self.weight)
    }
}
