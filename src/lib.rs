//! Shortest paths on graphs that are explored while searching.
//!
//! A graph only has to tell the search which edges leave a vertex, how much
//! an edge weighs and where it leads (see [`graphs::Graph`]). It never has to
//! exist in memory as a whole, so the same search runs on adjacency lists as
//! well as on infinite, implicitly defined graphs.
//!
//! ```
//! use lazy_paths::{graphs::generated::BinaryTree, search::shortest_path};
//!
//! let path = shortest_path(&BinaryTree, &1, &1000).unwrap();
//! assert_eq!(path.weight, 9);
//! ```

pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;
