use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::graphs::VertexId;

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: VertexId,
    pub target: VertexId,
}

impl ShortestPathRequest {
    /// A random request with `source != target` on a graph with the given
    /// number of vertices, or `None` if there are fewer than two.
    pub fn random<R: Rng>(rng: &mut R, number_of_vertices: u32) -> Option<ShortestPathRequest> {
        if number_of_vertices <= 1 {
            return None;
        }

        let source = rng.gen_range(0..number_of_vertices);
        let mut target = rng.gen_range(0..number_of_vertices - 1);
        if target >= source {
            target += 1;
        }

        Some(ShortestPathRequest { source, target })
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// weight of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub weight: Option<u32>,
    pub search_space_size: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestTimingResult {
    pub test_case: ShortestPathTestCase,
    pub timing_in_seconds: f64,
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{ShortestPathRequest, ShortestPathTestCase};

    #[test]
    fn random_requests_never_loop() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(ShortestPathRequest::random(&mut rng, 1), None);

        for _ in 0..1000 {
            let request = ShortestPathRequest::random(&mut rng, 3).unwrap();
            assert_ne!(request.source, request.target);
            assert!(request.source < 3 && request.target < 3);
        }
    }

    #[test]
    fn test_case_json_layout() {
        let test_case = ShortestPathTestCase {
            request: ShortestPathRequest {
                source: 1,
                target: 2,
            },
            weight: None,
            search_space_size: 4,
        };

        let json = serde_json::to_string(&test_case).unwrap();
        assert_eq!(
            json,
            r#"{"request":{"source":1,"target":2},"weight":null,"search_space_size":4}"#
        );
        let parsed: ShortestPathTestCase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, test_case);
    }
}
