use num_traits::Zero;

use super::Graph;
use crate::search::Path;

/// Walks `edges` starting at `start` and returns the vertex the walk ends at
/// together with the accumulated weight.
///
/// Fails if an edge is not one of the out edges of the vertex reached so far.
pub fn walk<G>(
    graph: &G,
    start: &G::Vertex,
    edges: &[G::Edge],
) -> Result<(G::Vertex, G::Weight), String>
where
    G: Graph,
    G::Edge: PartialEq,
{
    let mut vertex = start.clone();
    let mut weight = G::Weight::zero();
    let mut out_edges = Vec::new();

    for (index, edge) in edges.iter().enumerate() {
        out_edges.clear();
        graph.out_edges(&vertex, &mut out_edges);
        if !out_edges.contains(edge) {
            return Err(format!("edge {} does not continue the path", index));
        }

        weight = weight + graph.weight(&vertex, edge);
        vertex = graph.head(edge);
    }

    Ok((vertex, weight))
}

/// Check if a path is correct: connected, starting at `start`, ending in a
/// vertex accepted by `is_target` and with the weight it claims.
pub fn validate_path<G, F>(
    graph: &G,
    start: &G::Vertex,
    is_target: F,
    path: &Path<G::Edge, G::Weight>,
) -> Result<(), String>
where
    G: Graph,
    G::Edge: PartialEq,
    F: Fn(&G::Vertex) -> bool,
{
    let (end, weight) = walk(graph, start, &path.edges)?;

    if !is_target(&end) {
        return Err("last vertex of path is not a target".to_string());
    }
    if weight != path.weight {
        return Err(format!(
            "wrong path weight, edges sum up to {:?} but path claims {:?}",
            weight, path.weight
        ));
    }

    Ok(())
}
