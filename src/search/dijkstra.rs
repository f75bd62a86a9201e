use std::cmp::Ordering;

use num_traits::Zero;
use tracing::{debug, warn};

use super::{Path, SearchError};
use crate::{
    graphs::Graph,
    queue::{
        indexed_heap::{IndexedHeap, Position},
        CandidateId, SearchCandidate,
    },
};

type Candidate<G> = SearchCandidate<<G as Graph>::Vertex, <G as Graph>::Edge, <G as Graph>::Weight>;

/// Shortest path from `start` to `target`.
pub fn shortest_path<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
) -> Result<Path<G::Edge, G::Weight>, SearchError> {
    Dijkstra::new(graph).shortest_path(start, target)
}

/// Shortest path from `start` to the closest vertex for which `is_target`
/// holds.
pub fn shortest_path_matching<G, F>(
    graph: &G,
    start: &G::Vertex,
    is_target: F,
) -> Result<Path<G::Edge, G::Weight>, SearchError>
where
    G: Graph,
    F: Fn(&G::Vertex) -> bool,
{
    Dijkstra::new(graph).shortest_path_matching(start, is_target)
}

/// Dijkstra's algorithm on a graph that is explored lazily.
///
/// The struct owns all buffers a search needs, so repeated queries on the
/// same graph reuse their allocations.
pub struct Dijkstra<'a, G: Graph> {
    graph: &'a G,
    queue: IndexedHeap<G::Vertex, G::Edge, G::Weight>,
    // Finalized candidates in extraction order. Predecessors point in here.
    finalized: Vec<Candidate<G>>,
    edges: Vec<G::Edge>,
}

impl<'a, G: Graph> Dijkstra<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Dijkstra {
            graph,
            queue: IndexedHeap::new(),
            finalized: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn shortest_path(
        &mut self,
        start: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Path<G::Edge, G::Weight>, SearchError> {
        self.shortest_path_matching(start, |vertex| vertex == target)
    }

    pub fn shortest_path_matching<F>(
        &mut self,
        start: &G::Vertex,
        is_target: F,
    ) -> Result<Path<G::Edge, G::Weight>, SearchError>
    where
        F: Fn(&G::Vertex) -> bool,
    {
        self.clear();

        match self.search(start, is_target) {
            Ok(goal) => {
                let path = self.path_to(goal);
                debug!(
                    search_space_size = self.search_space_size(),
                    edges = path.len(),
                    weight = ?path.weight,
                    "path found"
                );
                Ok(path)
            }
            Err(err) => {
                debug!(search_space_size = self.search_space_size(), %err, "search failed");
                Err(err)
            }
        }
    }

    /// Number of vertices finalized by the last query.
    pub fn search_space_size(&self) -> usize {
        self.finalized.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.finalized.clear();
        self.edges.clear();
    }

    fn search<F>(&mut self, start: &G::Vertex, is_target: F) -> Result<CandidateId, SearchError>
    where
        F: Fn(&G::Vertex) -> bool,
    {
        self.queue.insert(SearchCandidate::start(start.clone()));

        loop {
            let candidate = self.queue.extract_min().ok_or(SearchError::NoPathFound)?;
            let id = self.finalized.len();
            let is_goal = is_target(&candidate.vertex);
            self.finalized.push(candidate);

            if is_goal {
                return Ok(id);
            }
            self.relax_out_edges(id)?;
        }
    }

    fn relax_out_edges(&mut self, id: CandidateId) -> Result<(), SearchError> {
        let Dijkstra {
            graph,
            queue,
            finalized,
            edges,
        } = self;
        let tail = &finalized[id];

        edges.clear();
        graph.out_edges(&tail.vertex, edges);

        for edge in edges.drain(..) {
            let edge_weight = graph.weight(&tail.vertex, &edge);
            if !matches!(
                edge_weight.partial_cmp(&G::Weight::zero()),
                Some(Ordering::Greater | Ordering::Equal)
            ) {
                warn!(weight = ?edge_weight, "invalid edge weight, aborting search");
                return Err(SearchError::InvalidWeight);
            }

            let weight = tail.weight + edge_weight;
            let head = graph.head(&edge);
            match queue.position(&head) {
                Position::Finalized => {}
                Position::Unseen => queue.insert(SearchCandidate::new(head, edge, weight, id)),
                Position::Queued(slot) => {
                    if weight < queue.candidate(slot).weight {
                        queue.decrease_key(&head, weight, edge, id);
                    }
                }
            }
        }

        Ok(())
    }

    /// Follows the predecessors from `goal` back to the start. Leaves the
    /// edges of the chain taken out of the arena.
    fn path_to(&mut self, goal: CandidateId) -> Path<G::Edge, G::Weight> {
        let weight = self.finalized[goal].weight;

        let mut edges = Vec::new();
        let mut current = Some(goal);
        while let Some(id) = current {
            let candidate = &mut self.finalized[id];
            edges.extend(candidate.via.take());
            current = candidate.predecessor;
        }
        edges.reverse();

        Path { edges, weight }
    }
}
