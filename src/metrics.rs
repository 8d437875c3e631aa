//! Partition quality and agreement metrics.
//!
//! [`modularity`] scores a [`Partition`] against the graph it came from;
//! [`ari`] and [`nmi`] measure the agreement between two labelings of the
//! same node set (useful for comparing the output of two detection runs).
//!
//! | Metric | Range | Best |
//! |--------|-------|------|
//! | [`modularity`] | about [-1, 1] | higher |
//! | [`ari`] | [-1, 1] | 1 |
//! | [`nmi`] | [0, 1] | 1 |
//!
//! # References
//!
//! - Newman & Girvan (2004). "Finding and evaluating community structure
//!   in networks."
//! - Hubert & Arabie (1985). "Comparing partitions" (ARI)
//! - Strehl & Ghosh (2002). "Cluster ensembles" (NMI)

use crate::error::{Error, Result};
use crate::partition::Partition;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Modularity Q of a partition of an unweighted graph.
///
/// Every edge counts 1.0; see [`modularity_with`] for weighted graphs.
pub fn modularity<N, E>(
    graph: &UnGraph<N, E>,
    partition: &Partition,
    resolution: f64,
) -> Result<f64> {
    modularity_with(graph, partition, |_: &E| 1.0, resolution)
}

/// Modularity Q of a partition under an edge-weight selector:
///
/// ```text
/// Q = Σ_c [ w_in(c)/m − γ × (deg(c)/2m)² ]
/// ```
///
/// where `w_in(c)` is the weight inside community c, `deg(c)` the weight
/// incident to it (self-loops twice), and `m` the total edge weight.
/// The partition must cover every node of the graph exactly once.
pub fn modularity_with<N, E, F>(
    graph: &UnGraph<N, E>,
    partition: &Partition,
    weight: F,
    resolution: f64,
) -> Result<f64>
where
    F: Fn(&E) -> f64,
{
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(Error::InvalidResolution { resolution });
    }

    let n = graph.node_count();
    let mut label = vec![usize::MAX; n];
    let mut covered = 0usize;
    for (cid, community) in partition.communities().iter().enumerate() {
        for &node in community {
            if node.index() >= n {
                return Err(Error::InvalidPartition {
                    reason: "community contains a node outside the graph",
                });
            }
            if label[node.index()] != usize::MAX {
                return Err(Error::InvalidPartition {
                    reason: "node appears in more than one community",
                });
            }
            label[node.index()] = cid;
            covered += 1;
        }
    }
    if covered != n {
        return Err(Error::InvalidPartition {
            reason: "partition does not cover every node",
        });
    }

    let k = partition.len();
    let mut internal = vec![0.0; k];
    let mut degree = vec![0.0; k];
    let mut m = 0.0;
    for edge in graph.edge_references() {
        let w = weight(edge.weight());
        if !w.is_finite() || w < 0.0 {
            return Err(Error::InvalidEdgeWeight { weight: w });
        }
        let i = edge.source().index();
        let j = edge.target().index();
        m += w;
        if i == j {
            internal[label[i]] += w;
            degree[label[i]] += 2.0 * w;
        } else {
            degree[label[i]] += w;
            degree[label[j]] += w;
            if label[i] == label[j] {
                internal[label[i]] += w;
            }
        }
    }
    if m == 0.0 {
        return Ok(0.0);
    }

    Ok((0..k)
        .map(|c| internal[c] / m - resolution * (degree[c] / (2.0 * m)).powi(2))
        .sum())
}

/// Adjusted Rand Index between two labelings.
///
/// 1 means identical groupings (label names aside), 0 is chance level.
///
/// ```rust
/// use modmax::metrics::ari;
///
/// let a = [0, 0, 1, 1];
/// let b = [1, 1, 0, 0];
/// assert_eq!(ari(&a, &b), 1.0);
/// ```
pub fn ari(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }
    if pred.len() < 2 {
        return 1.0;
    }

    let (joint, rows, cols) = contingency(pred, truth);
    let comb2 = |x: f64| x * (x - 1.0) / 2.0;

    let sum_joint: f64 = joint.values().map(|&c| comb2(c)).sum();
    let sum_rows: f64 = rows.values().map(|&c| comb2(c)).sum();
    let sum_cols: f64 = cols.values().map(|&c| comb2(c)).sum();
    let total = comb2(pred.len() as f64);

    let expected = sum_rows * sum_cols / total;
    let max_index = 0.5 * (sum_rows + sum_cols);
    if max_index == expected {
        // Degenerate (both all-singletons or both one cluster): identical.
        return 1.0;
    }
    (sum_joint - expected) / (max_index - expected)
}

/// Normalized Mutual Information between two labelings, in [0, 1].
///
/// ```rust
/// use modmax::metrics::nmi;
///
/// let a = [0, 0, 1, 1];
/// let b = [0, 1, 0, 1];
/// assert!(nmi(&a, &b) < 0.1);
/// ```
pub fn nmi(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }

    let n = pred.len() as f64;
    let (joint, rows, cols) = contingency(pred, truth);

    let entropy = |counts: &HashMap<usize, f64>| -> f64 {
        counts
            .values()
            .map(|&c| {
                let p = c / n;
                -p * p.ln()
            })
            .sum()
    };
    let h_pred = entropy(&rows);
    let h_truth = entropy(&cols);
    if h_pred == 0.0 && h_truth == 0.0 {
        // Both are a single cluster: identical labelings.
        return 1.0;
    }
    if h_pred == 0.0 || h_truth == 0.0 {
        return 0.0;
    }

    let mut mi = 0.0;
    for (&(p, t), &c) in &joint {
        mi += (c / n) * (n * c / (rows[&p] * cols[&t])).ln();
    }
    (2.0 * mi / (h_pred + h_truth)).clamp(0.0, 1.0)
}

type Contingency = (
    HashMap<(usize, usize), f64>,
    HashMap<usize, f64>,
    HashMap<usize, f64>,
);

fn contingency(pred: &[usize], truth: &[usize]) -> Contingency {
    let mut joint: HashMap<(usize, usize), f64> = HashMap::new();
    let mut rows: HashMap<usize, f64> = HashMap::new();
    let mut cols: HashMap<usize, f64> = HashMap::new();
    for (&p, &t) in pred.iter().zip(truth.iter()) {
        *joint.entry((p, t)).or_insert(0.0) += 1.0;
        *rows.entry(p).or_insert(0.0) += 1.0;
        *cols.entry(t).or_insert(0.0) += 1.0;
    }
    (joint, rows, cols)
}
