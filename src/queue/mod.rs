use num_traits::Zero;

pub mod indexed_heap;

/// Index of a finalized candidate in the arena kept by the search.
pub type CandidateId = usize;

/// A vertex reached by the search, together with the cheapest known way of
/// getting there.
///
/// `via` is the edge the vertex was reached by and `predecessor` the
/// finalized candidate that edge leaves from. Only the start candidate has
/// neither.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCandidate<V, E, W> {
    pub vertex: V,
    pub via: Option<E>,
    pub weight: W,
    pub predecessor: Option<CandidateId>,
}

impl<V, E, W: Zero> SearchCandidate<V, E, W> {
    pub fn start(vertex: V) -> Self {
        SearchCandidate {
            vertex,
            via: None,
            weight: W::zero(),
            predecessor: None,
        }
    }

    pub fn new(vertex: V, via: E, weight: W, predecessor: CandidateId) -> Self {
        SearchCandidate {
            vertex,
            via: Some(via),
            weight,
            predecessor: Some(predecessor),
        }
    }
}
