//! Graphs whose edges are computed from the vertex instead of being stored.
//!
//! Most of them are infinite, so they can only be searched by an algorithm
//! that discovers edges on demand.

use ahash::{HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, Graph, VertexId};

/// Vertices `0..len`, with an edge of weight one from every vertex to its
/// successor. A closed cycle also connects `len - 1` back to `0`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CycleGraph {
    len: VertexId,
    closed: bool,
}

impl CycleGraph {
    /// The modular cycle `i -> (i + 1) mod len`.
    pub fn closed(len: VertexId) -> CycleGraph {
        CycleGraph { len, closed: true }
    }

    /// The chain `0 -> 1 -> ... -> len - 1` without the edge back to `0`.
    pub fn open(len: VertexId) -> CycleGraph {
        CycleGraph { len, closed: false }
    }
}

impl Graph for CycleGraph {
    type Vertex = VertexId;
    type Edge = WeightedEdge<u32>;
    type Weight = u32;

    fn out_edges(&self, tail: &VertexId, edges: &mut Vec<WeightedEdge<u32>>) {
        let tail = *tail;
        if tail >= self.len {
            return;
        }
        if tail + 1 < self.len {
            edges.push(WeightedEdge::new(tail, tail + 1, 1));
        } else if self.closed {
            edges.push(WeightedEdge::new(tail, 0, 1));
        }
    }

    fn weight(&self, _tail: &VertexId, edge: &WeightedEdge<u32>) -> u32 {
        edge.weight()
    }

    fn head(&self, edge: &WeightedEdge<u32>) -> VertexId {
        edge.head()
    }
}

/// The non-negative integers, where `v` leads to `v + 1`, `v - 1`, `v / 2`
/// (for even `v`) and `2 v`.
///
/// Every edge leaving `v` weighs `1 + 1 / v`, so steps get cheaper the larger
/// the numbers involved are. Edges only store their head; the weight is
/// derived from the tail handed to [`Graph::weight`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberLattice;

impl Graph for NumberLattice {
    type Vertex = u64;
    type Edge = u64;
    type Weight = f64;

    fn out_edges(&self, tail: &u64, edges: &mut Vec<u64>) {
        let tail = *tail;
        edges.push(tail + 1);
        if tail > 0 {
            edges.push(tail - 1);
            if tail % 2 == 0 {
                edges.push(tail / 2);
            }
            edges.push(2 * tail);
        }
    }

    fn weight(&self, tail: &u64, _edge: &u64) -> f64 {
        if *tail == 0 {
            1.0
        } else {
            1.0 + 1.0 / *tail as f64
        }
    }

    fn head(&self, edge: &u64) -> u64 {
        *edge
    }
}

/// The infinite complete binary tree in heap numbering: `v` has the children
/// `2 v` and `2 v + 1`, every edge weighs one. Vertex `0` has no edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryTree;

impl Graph for BinaryTree {
    type Vertex = VertexId;
    type Edge = WeightedEdge<u32>;
    type Weight = u32;

    fn out_edges(&self, tail: &VertexId, edges: &mut Vec<WeightedEdge<u32>>) {
        let tail = *tail;
        // The tree is cut off where the children would overflow.
        if tail == 0 || tail > VertexId::MAX / 2 {
            return;
        }
        edges.push(WeightedEdge::new(tail, 2 * tail, 1));
        edges.push(WeightedEdge::new(tail, 2 * tail + 1, 1));
    }

    fn weight(&self, _tail: &VertexId, edge: &WeightedEdge<u32>) -> u32 {
        edge.weight()
    }

    fn head(&self, edge: &WeightedEdge<u32>) -> VertexId {
        edge.head()
    }
}

pub type Cell = (i64, i64);

/// Direction of a move between neighbouring grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    North,
    East,
    South,
    West,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::North, Step::East, Step::South, Step::West];

    pub fn apply(self, (x, y): Cell) -> Cell {
        match self {
            Step::North => (x, y + 1),
            Step::East => (x + 1, y),
            Step::South => (x, y - 1),
            Step::West => (x - 1, y),
        }
    }
}

/// The unbounded grid with four-neighbourhood and unit steps. Cells listed as
/// walls can neither be entered nor left.
#[derive(Clone, Debug, Default)]
pub struct GridGraph {
    walls: HashSet<Cell>,
}

impl GridGraph {
    pub fn new() -> GridGraph {
        GridGraph {
            walls: HashSet::new(),
        }
    }

    pub fn with_walls(walls: impl IntoIterator<Item = Cell>) -> GridGraph {
        GridGraph {
            walls: walls.into_iter().collect(),
        }
    }

    pub fn is_wall(&self, cell: &Cell) -> bool {
        self.walls.contains(cell)
    }
}

impl Graph for GridGraph {
    type Vertex = Cell;
    type Edge = (Cell, Step);
    type Weight = u32;

    fn out_edges(&self, tail: &Cell, edges: &mut Vec<(Cell, Step)>) {
        if self.is_wall(tail) {
            return;
        }
        edges.extend(
            Step::ALL
                .into_iter()
                .filter(|step| !self.is_wall(&step.apply(*tail)))
                .map(|step| (*tail, step)),
        );
    }

    fn weight(&self, _tail: &Cell, _edge: &(Cell, Step)) -> u32 {
        1
    }

    fn head(&self, (tail, step): &(Cell, Step)) -> Cell {
        step.apply(*tail)
    }
}
