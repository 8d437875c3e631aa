//! # modmax
//!
//! Greedy modularity maximization for community detection in undirected,
//! optionally edge-weighted graphs.
//!
//! Given a graph, find disjoint groups of nodes where connections inside a
//! group are denser than a random graph with the same degrees would
//! predict.
//!
//! ## The Modularity Objective
//!
//! Both detectors optimize **modularity** Q:
//!
//! ```text
//! Q = (1/2m) × Σ[A_ij − γ(k_i × k_j)/(2m)] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = total edge weight (sum of all edges)
//! - A_ij = edge weight between i and j
//! - k_i = weighted degree of node i
//! - γ = resolution parameter
//! - δ(c_i, c_j) = 1 if i and j are in the same community
//!
//! **Intuition**: for each pair in the same community, add (actual edges) −
//! (expected edges). A good partition has Q > 0, meaning more internal
//! edges than chance.
//!
//! ## The Resolution Parameter γ
//!
//! - **γ = 1**: standard modularity (default)
//! - **γ > 1**: smaller communities (higher penalty for merging)
//! - **γ < 1**: larger communities (lower penalty for merging)
//!
//! Plain modularity has a resolution limit (it cannot see communities
//! smaller than about √(2m)), so γ is the knob for finer or coarser
//! structure.
//!
//! ## Algorithms
//!
//! ### [`GreedyModularity`] (recommended)
//!
//! The Clauset-Newman-Moore agglomeration: every node starts as its own
//! community, and the connected pair with the largest modularity gain is
//! merged until no merge improves Q (or an explicit target count is
//! reached). Pair gains live in an updatable priority structure, so merges
//! are cheap even on large sparse graphs.
//!
//! ### [`NaiveModularity`]
//!
//! The same agglomeration with the priority structure replaced by a full
//! rescan of all connected pairs each round. Quadratic and only sensible
//! for small graphs or for cross-checking the fast path; both variants
//! share one tie-breaking rule and return identical partitions.
//!
//! ## Usage
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use modmax::{CommunityDetection, GreedyModularity};
//!
//! // Two triangles joined by a single edge.
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
//! for (a, b) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
//!     graph.add_edge(nodes[a], nodes[b], ());
//! }
//!
//! let partition = GreedyModularity::new().detect(&graph).unwrap();
//! assert_eq!(partition.len(), 2);
//! // Largest community first; each is a sorted list of node indices.
//! assert_eq!(partition.communities()[0].len(), 3);
//! ```
//!
//! Weighted graphs go through [`CommunityDetection::detect_weighted`] with
//! an edge-weight selector; [`metrics`] scores and compares partitions.
//!
//! ## References
//!
//! - Clauset, Newman, Moore (2004). "Finding community structure in very
//!   large networks." Physical Review E 70, 066111.
//! - Newman & Girvan (2004). "Finding and evaluating community structure
//!   in networks."

/// Error types used across `modmax`.
pub mod error;
pub mod metrics;
pub mod partition;

mod graph;
mod greedy;
mod history;
mod naive;
mod queue;
mod state;
mod traits;


pub use error::{Error, Result};
pub use greedy::GreedyModularity;
pub use naive::NaiveModularity;
pub use partition::Partition;
pub use traits::CommunityDetection;
