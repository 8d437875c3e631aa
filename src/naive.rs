//! Naive greedy modularity maximization (reference path).
//!
//! Same merge policy as [`GreedyModularity`](crate::GreedyModularity), but
//! every round recomputes the gain of every currently-connected community
//! pair from the bookkeeping state instead of maintaining a priority
//! structure. Quadratic per merge; it exists as a correctness oracle for the
//! fast path and is perfectly serviceable on small graphs.
//!
//! Candidate selection uses the identical total order (maximum gain, ties
//! to the smallest community-id pair), so both variants walk the same merge
//! sequence and return identical partitions.

use crate::error::Result;
use crate::graph::WeightedView;
use crate::greedy::merge_policy;
use crate::history::MergeHistory;
use crate::partition::Partition;
use crate::state::{delta_q, ModularityState};
use crate::traits::{validate_options, CommunityDetection};
use petgraph::graph::UnGraph;
use std::cmp::Ordering;

/// Exhaustive-rescan greedy modularity maximization.
#[derive(Debug, Clone)]
pub struct NaiveModularity {
    /// Resolution parameter (gamma). Higher = smaller communities.
    resolution: f64,
    /// Optional number of communities to aggregate toward.
    target: Option<usize>,
}

impl NaiveModularity {
    /// Create a detector with default settings (resolution 1, natural stop).
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            target: None,
        }
    }

    /// Set the resolution parameter. Must be positive.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Aggregate toward exactly `n` communities; `n = 1` returns the best
    /// partition recorded on the way down.
    pub fn with_target_communities(mut self, n: usize) -> Self {
        self.target = Some(n);
        self
    }
}

impl Default for NaiveModularity {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan every connected live pair for the maximum gain.
fn best_pair(state: &ModularityState, resolution: f64) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for c in state.live_ids() {
        let a_c = state.degree_sum(c);
        for (d, e) in state.neighbors(c) {
            if d <= c {
                continue;
            }
            let dq = delta_q(e, a_c, state.degree_sum(d), resolution);
            let replace = match best {
                None => true,
                Some((bc, bd, bq)) => match dq.total_cmp(&bq) {
                    Ordering::Greater => true,
                    Ordering::Equal => (c, d) < (bc, bd),
                    Ordering::Less => false,
                },
            };
            if replace {
                best = Some((c, d, dq));
            }
        }
    }
    best
}

impl CommunityDetection for NaiveModularity {
    fn detect_weighted<N, E, F>(&self, graph: &UnGraph<N, E>, weight: F) -> Result<Partition>
    where
        F: Fn(&E) -> f64,
    {
        let n = graph.node_count();
        validate_options(self.resolution, self.target, n)?;
        if n == 0 {
            return Ok(Partition::from_members(Vec::new()));
        }

        let view = WeightedView::build(graph, weight)?;
        let mut state = ModularityState::from_view(&view);
        let mut q = state.modularity(self.resolution);
        let mut history = MergeHistory::new(n, q);

        if view.total_weight > 0.0 {
            let (floor, stop_on_nonpositive) = merge_policy(self.target);
            let mut n_live = n;

            while n_live > floor {
                let Some((lo, hi, dq)) = best_pair(&state, self.resolution) else {
                    break;
                };
                if stop_on_nonpositive && dq <= 0.0 {
                    break;
                }

                state.merge(lo, hi);
                q += dq;
                history.record(lo, hi, q);
                n_live -= 1;
            }
        }

        let prefix = match self.target {
            Some(1) => history.best_prefix(),
            _ => history.len(),
        };
        Ok(Partition::from_members(history.members_after(prefix)))
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}
