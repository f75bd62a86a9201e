use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::{CandidateId, SearchCandidate};
use crate::graphs::Weight;

/// Where a vertex stands relative to the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Never inserted.
    Unseen,
    /// Waiting in the queue at the given slot.
    Queued(usize),
    /// Extracted; its weight is final.
    Finalized,
}

/// Binary min-heap of search candidates keyed by their weight.
///
/// Next to the heap array it keeps an index from vertex to slot, which makes
/// it possible to lower the weight of a queued vertex in O(log n) instead of
/// inserting it a second time. Extracted vertices stay in the index as
/// [`Position::Finalized`] until the heap is cleared.
pub struct IndexedHeap<V, E, W> {
    candidates: Vec<SearchCandidate<V, E, W>>,
    index: HashMap<V, Position>,
}

impl<V, E, W> Default for IndexedHeap<V, E, W> {
    fn default() -> Self {
        IndexedHeap {
            candidates: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V, E, W> IndexedHeap<V, E, W>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all queued and finalized vertices but keeps the allocations.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn position(&self, vertex: &V) -> Position {
        self.index.get(vertex).copied().unwrap_or(Position::Unseen)
    }

    /// The candidate at `slot`, as returned by [`IndexedHeap::position`].
    pub fn candidate(&self, slot: usize) -> &SearchCandidate<V, E, W> {
        &self.candidates[slot]
    }

    /// Queues a candidate for a vertex that has not been seen before.
    pub fn insert(&mut self, candidate: SearchCandidate<V, E, W>) {
        debug_assert_eq!(self.position(&candidate.vertex), Position::Unseen);

        let slot = self.candidates.len();
        self.index
            .insert(candidate.vertex.clone(), Position::Queued(slot));
        self.candidates.push(candidate);
        self.sift_up(slot);
    }

    /// Removes the candidate with the smallest weight and marks its vertex as
    /// finalized.
    pub fn extract_min(&mut self) -> Option<SearchCandidate<V, E, W>> {
        if self.candidates.is_empty() {
            return None;
        }

        let min = self.candidates.swap_remove(0);
        if let Some(position) = self.index.get_mut(&min.vertex) {
            *position = Position::Finalized;
        }

        if !self.candidates.is_empty() {
            self.update_index(0);
            self.sift_down(0);
        }

        Some(min)
    }

    /// Replaces the route to a queued vertex by a cheaper one.
    ///
    /// `weight` has to be smaller than the current weight of the vertex.
    /// Vertices that are not queued are left alone.
    pub fn decrease_key(&mut self, vertex: &V, weight: W, via: E, predecessor: CandidateId) {
        debug_assert!(
            matches!(self.position(vertex), Position::Queued(_)),
            "decrease_key on a vertex that is not queued"
        );
        let Position::Queued(slot) = self.position(vertex) else {
            return;
        };

        let candidate = &mut self.candidates[slot];
        debug_assert!(weight < candidate.weight);
        candidate.weight = weight;
        candidate.via = Some(via);
        candidate.predecessor = Some(predecessor);

        self.fix(slot);
    }

    /// Restores the heap order after the weight at `slot` changed.
    fn fix(&mut self, slot: usize) {
        if !self.sift_down(slot) {
            self.sift_up(slot);
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.candidates[i].weight < self.candidates[j].weight
    }

    fn update_index(&mut self, slot: usize) {
        if let Some(position) = self.index.get_mut(&self.candidates[slot].vertex) {
            *position = Position::Queued(slot);
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.less(child, parent) {
                break;
            }

            self.candidates.swap(parent, child);
            self.update_index(child);
            child = parent;
        }
        self.update_index(child);
    }

    /// Returns whether the candidate at `start` moved.
    fn sift_down(&mut self, start: usize) -> bool {
        let len = self.candidates.len();

        let mut parent = start;
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, parent) {
                break;
            }

            self.candidates.swap(parent, child);
            self.update_index(parent);
            parent = child;
        }

        if parent > start {
            self.update_index(parent);
            return true;
        }
        false
    }
}
