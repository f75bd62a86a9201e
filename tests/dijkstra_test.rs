use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
    hash::Hash,
};

use lazy_paths::{
    graphs::{
        edge::WeightedEdge,
        generated::{BinaryTree, CycleGraph, GridGraph, NumberLattice},
        graph_functions::{validate_path, walk},
        vec_graph::VecGraph,
        Graph,
    },
    search::{brute_force::shortest_path_weights, shortest_path, shortest_path_matching, SearchError},
};

fn get_small_graph() -> VecGraph<u32> {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let mut graph = VecGraph::new();
    for (tail, head, weight) in [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ] {
        graph.add_edge_bidirectional(&WeightedEdge::new(tail, head, weight));
    }
    graph
}

/// Heap entry of the reference search, ordered by weight only.
struct HeapEntry<V> {
    weight: f64,
    vertex: V,
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// Textbook Dijkstra with lazy deletion on a std binary heap, used to check
/// searches on infinite graphs where brute force is not an option.
fn reference_weight<G, F>(graph: &G, start: G::Vertex, is_target: F) -> Option<f64>
where
    G: Graph<Weight = f64>,
    G::Vertex: Hash + Eq + Clone,
    F: Fn(&G::Vertex) -> bool,
{
    let mut weights: HashMap<G::Vertex, f64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    weights.insert(start.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        weight: 0.0,
        vertex: start,
    }));

    let mut edges = Vec::new();
    while let Some(Reverse(HeapEntry { weight, vertex })) = heap.pop() {
        if weight > weights[&vertex] {
            continue;
        }
        if is_target(&vertex) {
            return Some(weight);
        }

        edges.clear();
        graph.out_edges(&vertex, &mut edges);
        for edge in edges.iter() {
            let alternative_weight = weight + graph.weight(&vertex, edge);
            let head = graph.head(edge);
            if weights
                .get(&head)
                .map_or(true, |&current| alternative_weight < current)
            {
                weights.insert(head.clone(), alternative_weight);
                heap.push(Reverse(HeapEntry {
                    weight: alternative_weight,
                    vertex: head,
                }));
            }
        }
    }

    None
}

#[test]
fn small_graph_against_brute_force() {
    let graph = get_small_graph();

    for source in 0..graph.number_of_vertices() {
        let expected = shortest_path_weights(&graph, source);
        for target in 0..graph.number_of_vertices() {
            let path = shortest_path(&graph, &source, &target).unwrap();
            assert_eq!(Some(path.weight), expected[target as usize]);
            assert_eq!(
                validate_path(&graph, &source, |vertex| *vertex == target, &path),
                Ok(())
            );
        }
    }
}

#[test]
fn small_graph_unique_path() {
    let graph = get_small_graph();

    let path = shortest_path(&graph, &0, &6).unwrap();
    assert_eq!(path.weight, 11);
    let vertices: Vec<_> = path.edges.iter().map(|edge| edge.head()).collect();
    assert_eq!(vertices, vec![10, 9, 7, 6]);
    assert_eq!(path.edges[0].tail(), 0);
}

#[test]
fn cycle_to_itself_is_empty() {
    let graph = CycleGraph::closed(10);
    let path = shortest_path(&graph, &5, &5).unwrap();
    assert!(path.edges.is_empty());
    assert_eq!(path.weight, 0);
}

#[test]
fn cycle_forward() {
    let graph = CycleGraph::closed(10);
    let path = shortest_path(&graph, &5, &8).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.weight, 3);
    assert_eq!(
        path.edges,
        vec![
            WeightedEdge::new(5, 6, 1),
            WeightedEdge::new(6, 7, 1),
            WeightedEdge::new(7, 8, 1)
        ]
    );

    // Going backwards means going all the way around.
    let path = shortest_path(&graph, &5, &3).unwrap();
    assert_eq!(path.len(), 8);
    assert_eq!(walk(&graph, &5, &path.edges), Ok((3, 8)));
}

#[test]
fn open_cycle_has_no_way_back() {
    let graph = CycleGraph::open(10);
    assert_eq!(
        shortest_path(&graph, &5, &3),
        Err(SearchError::NoPathFound)
    );
    assert_eq!(shortest_path(&graph, &5, &9).map(|path| path.len()), Ok(4));
}

#[test]
fn number_lattice() {
    let graph = NumberLattice;
    let path = shortest_path(&graph, &100, &1000).unwrap();

    assert_eq!(
        validate_path(&graph, &100, |vertex| *vertex == 1000, &path),
        Ok(())
    );
    let expected = reference_weight(&graph, 100, |vertex| *vertex == 1000).unwrap();
    assert!(
        (path.weight - expected).abs() < 1e-9,
        "{} is not minimal, expected {}",
        path.weight,
        expected
    );
    // Walking up by one all the way costs more than 900.
    assert!(path.weight < 20.0);
}

#[test]
fn number_lattice_to_multiple_targets() {
    let graph = NumberLattice;
    let is_target = |vertex: &u64| *vertex > 100 && *vertex % 7 == 0;
    let path = shortest_path_matching(&graph, &100, is_target).unwrap();

    // Doubling twice and stepping back down beats walking up to 105.
    let (end, weight) = walk(&graph, &100, &path.edges).unwrap();
    assert!(is_target(&end));
    assert_eq!(end, 399);
    assert_eq!(weight, path.weight);

    let expected = reference_weight(&graph, 100, is_target).unwrap();
    assert!((path.weight - expected).abs() < 1e-9);
}

#[test]
fn binary_tree() {
    let graph = BinaryTree;
    let path = shortest_path(&graph, &1, &1000).unwrap();

    assert_eq!(path.len(), 9);
    assert_eq!(path.weight, 9);
    assert_eq!(path.edges[0], WeightedEdge::new(1, 3, 1));
    let heads: Vec<_> = path.edges.iter().map(|edge| edge.head()).collect();
    assert_eq!(heads, vec![3, 7, 15, 31, 62, 125, 250, 500, 1000]);
}

#[test]
fn grid_around_wall() {
    let graph = GridGraph::with_walls((-2..=2).map(|y| (1, y)));

    let path = shortest_path(&graph, &(0, 0), &(2, 0)).unwrap();
    assert_eq!(path.weight, 8);
    assert_eq!(
        validate_path(&graph, &(0, 0), |cell| *cell == (2, 0), &path),
        Ok(())
    );

    let path = shortest_path_matching(&graph, &(0, 0), |&(x, _)| x >= 2).unwrap();
    assert_eq!(path.weight, 5);
}

#[test]
fn grid_enclosed_start() {
    // The start is walled in on all four sides. Searching for an unreachable
    // cell in an infinite graph only terminates because of the walls.
    let graph = GridGraph::with_walls([(1, 0), (-1, 0), (0, 1), (0, -1)]);
    assert_eq!(
        shortest_path(&graph, &(0, 0), &(5, 5)).map(|path| path.weight),
        Err(SearchError::NoPathFound)
    );
}
