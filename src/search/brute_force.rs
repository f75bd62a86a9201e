//! Reference shortest path weights for small, explicit graphs.
//!
//! Bellman-Ford relaxation rounds over every edge. Slow, but independent of
//! any priority queue, which makes it a good oracle for testing.

use crate::graphs::{vec_graph::VecGraph, VertexId, Weight};

/// Weight of a shortest path from `source` to every vertex, `None` if the
/// vertex can not be reached.
pub fn shortest_path_weights<W: Weight>(graph: &VecGraph<W>, source: VertexId) -> Vec<Option<W>> {
    let mut weights = vec![None; graph.number_of_vertices() as usize];
    if let Some(source_weight) = weights.get_mut(source as usize) {
        *source_weight = Some(W::zero());
    }

    let edges = graph.all_edges();
    for _ in 0..graph.number_of_vertices() {
        let mut changed = false;

        for edge in edges.iter() {
            let Some(tail_weight) = weights[edge.tail() as usize] else {
                continue;
            };
            let alternative_weight = tail_weight + edge.weight();
            let head_weight = &mut weights[edge.head() as usize];
            if head_weight.map_or(true, |current| alternative_weight < current) {
                *head_weight = Some(alternative_weight);
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    weights
}

pub fn shortest_path_weight<W: Weight>(
    graph: &VecGraph<W>,
    source: VertexId,
    target: VertexId,
) -> Option<W> {
    if source == target {
        return Some(W::zero());
    }
    shortest_path_weights(graph, source)
        .get(target as usize)
        .copied()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::{shortest_path_weight, shortest_path_weights};
    use crate::graphs::{edge::WeightedEdge, vec_graph::VecGraph};

    #[test]
    fn weights_on_small_graph() {
        let graph = VecGraph::from_edges(&[
            WeightedEdge::new(0, 1, 5),
            WeightedEdge::new(0, 2, 1),
            WeightedEdge::new(2, 1, 1),
            WeightedEdge::new(3, 0, 1),
        ]);

        assert_eq!(
            shortest_path_weights(&graph, 0),
            vec![Some(0), Some(2), Some(1), None]
        );
        assert_eq!(shortest_path_weight(&graph, 3, 1), Some(3));
        assert_eq!(shortest_path_weight(&graph, 7, 7), Some(0));
        assert_eq!(shortest_path_weight(&graph, 7, 1), None);
    }
}
