use core::fmt;

/// Result alias for `modmax`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the community detection entry points.
///
/// All variants describe invalid input rejected before any computation
/// begins; a detection run never fails partway through.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An edge weight was negative or not a finite number.
    InvalidEdgeWeight {
        /// The offending weight.
        weight: f64,
    },

    /// The resolution parameter was non-positive or not finite.
    InvalidResolution {
        /// The offending resolution.
        resolution: f64,
    },

    /// Invalid number of communities requested.
    InvalidCommunityCount {
        /// Requested count.
        requested: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// A partition handed to a scoring function does not partition the graph.
    InvalidPartition {
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEdgeWeight { weight } => {
                write!(f, "edge weight must be finite and non-negative, got {weight}")
            }
            Error::InvalidResolution { resolution } => {
                write!(f, "resolution must be finite and positive, got {resolution}")
            }
            Error::InvalidCommunityCount { requested, n_nodes } => {
                write!(f, "cannot aggregate {n_nodes} nodes into {requested} communities")
            }
            Error::InvalidPartition { reason } => {
                write!(f, "invalid partition: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
