//! Community detection traits.

use crate::error::{Error, Result};
use crate::partition::Partition;
use petgraph::graph::UnGraph;

/// Trait for modularity-maximizing community detection algorithms.
pub trait CommunityDetection {
    /// Detect communities in an unweighted graph (every edge counts 1.0).
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Partition> {
        self.detect_weighted(graph, |_: &E| 1.0)
    }

    /// Detect communities, reading each edge's weight through `weight`.
    ///
    /// Weights must be finite and non-negative.
    fn detect_weighted<N, E, F>(&self, graph: &UnGraph<N, E>, weight: F) -> Result<Partition>
    where
        F: Fn(&E) -> f64;

    /// Get the resolution parameter (if applicable).
    fn resolution(&self) -> f64 {
        1.0
    }
}

/// Shared option validation for the detection entry points.
///
/// The resolution and a zero target are rejected outright; an empty graph is
/// then handled by the caller (it is a valid input with an empty result), so
/// the target-vs-node-count bound only applies to non-empty graphs.
pub(crate) fn validate_options(
    resolution: f64,
    target: Option<usize>,
    n_nodes: usize,
) -> Result<()> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(Error::InvalidResolution { resolution });
    }
    match target {
        Some(0) => Err(Error::InvalidCommunityCount {
            requested: 0,
            n_nodes,
        }),
        Some(t) if n_nodes > 0 && t > n_nodes => Err(Error::InvalidCommunityCount {
            requested: t,
            n_nodes,
        }),
        _ => Ok(()),
    }
}
