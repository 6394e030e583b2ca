//! # Maximum Bipartite Matching Library
//!
//! dinitz computes a maximum matching of a bipartite graph with Dinic's blocking
//! flow algorithm specialized to unit capacities. The graph is turned into a
//! flow network with a synthetic source feeding every left vertex and a
//! synthetic sink fed by every right vertex. Phases of breadth-first level graph
//! construction and depth-first path search with dead-end pruning then augment
//! the matching until no augmenting path is left.
//!
//! ```
//! use dinitz::{maximum_matching, FlowNetwork, GraphInput};
//!
//! let input: GraphInput = "4\nAnibel\nBrom\nCyra\nDax\n2\n1 3\n2 4\n".parse().unwrap();
//! let mut network = FlowNetwork::from_input(&input).unwrap();
//! let matching = maximum_matching(&mut network);
//! assert_eq!(matching.to_string(), "Anibel / Cyra\nBrom / Dax\n2 total matches\n");
//! ```

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate regex;

pub mod adjacency;
pub mod bipartite;
pub mod engine;
pub mod error;
pub mod input;
pub mod level_graph;
pub mod matching;
pub mod network;

/// Index of a vertex in a flow network
pub type Vertex = usize;

pub use crate::engine::{maximum_matching, Engine, State, Stats};
pub use crate::error::GraphError;
pub use crate::input::GraphInput;
pub use crate::level_graph::LevelGraph;
pub use crate::matching::{MatchedPair, Matching};
pub use crate::network::FlowNetwork;
