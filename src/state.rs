//! Incremental per-community modularity bookkeeping.
//!
//! Tracks, for every live community `c`, its degree sum `a_c` and its
//! inter-community edge weights `e_{c,d}`, both normalized by the total
//! degree `2m`:
//!
//! ```text
//! a_c     = Σ_{i ∈ c} k_i / 2m
//! e_{c,d} = (weight of edges between c and d) / 2m
//! ```
//!
//! The state is built in one pass over the graph view and from then on is
//! only mutated by [`ModularityState::merge`]; nothing downstream ever
//! re-reads raw graph edges.

use crate::graph::WeightedView;
use std::collections::HashMap;

/// Modularity gain of merging two communities with degree sums `a_c`, `a_d`
/// and inter-community weight `e` (all normalized by `2m`):
///
/// ```text
/// ΔQ = 2 × (e − γ × a_c × a_d)
/// ```
#[inline]
pub(crate) fn delta_q(e: f64, a_c: f64, a_d: f64, resolution: f64) -> f64 {
    2.0 * (e - resolution * a_c * a_d)
}

/// Per-community degree sums and pairwise inter-community weights.
///
/// Community ids are dense slots starting out as the node indices; a merge
/// folds one slot into the other and the absorbed slot stays dead for the
/// rest of the run.
#[derive(Debug, Clone)]
pub(crate) struct ModularityState {
    /// Degree sum `a_c` per community. Zero once dead.
    a: Vec<f64>,
    /// Inter-community weights `e_{c,d}`; symmetric, connected pairs only.
    adj: Vec<HashMap<usize, f64>>,
    /// Internal edge weight per community, normalized by `m`.
    internal: Vec<f64>,
    /// Live flags; merged-away communities are dead.
    live: Vec<bool>,
}

impl ModularityState {
    /// Initialize singleton communities from the graph view in one pass.
    pub fn from_view(view: &WeightedView) -> Self {
        let n = view.node_count();
        let m = view.total_weight;
        let q0 = if m > 0.0 { 1.0 / (2.0 * m) } else { 0.0 };

        let mut adj: Vec<HashMap<usize, f64>> = vec![HashMap::new(); n];
        for (i, edges) in view.adj.iter().enumerate() {
            for &(j, w) in edges {
                *adj[i].entry(j).or_insert(0.0) += w * q0;
            }
        }

        let a = view.strength.iter().map(|&k| k * q0).collect();
        let internal = view
            .self_loop
            .iter()
            .map(|&sl| if m > 0.0 { sl / m } else { 0.0 })
            .collect();

        Self {
            a,
            adj,
            internal,
            live: vec![true; n],
        }
    }

    /// Degree sum `a_c`, normalized by `2m`.
    #[inline]
    pub fn degree_sum(&self, c: usize) -> f64 {
        self.a[c]
    }

    /// Inter-community weight `e_{c,d}`, normalized by `2m`; 0 if not connected.
    #[inline]
    pub fn inter_weight(&self, c: usize, d: usize) -> f64 {
        self.adj[c].get(&d).copied().unwrap_or(0.0)
    }

    /// Communities connected to `c`, with their inter-community weights.
    pub fn neighbors(&self, c: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adj[c].iter().map(|(&d, &e)| (d, e))
    }

    #[inline]
    pub fn is_live(&self, c: usize) -> bool {
        self.live[c]
    }

    /// Live community ids in ascending order.
    pub fn live_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.live
            .iter()
            .enumerate()
            .filter(|(_, &l)| l)
            .map(|(c, _)| c)
    }

    /// Modularity of the current partition:
    ///
    /// ```text
    /// Q = Σ_c ( w_in(c)/m − γ × a_c² )
    /// ```
    pub fn modularity(&self, resolution: f64) -> f64 {
        self.live_ids()
            .map(|c| self.internal[c] - resolution * self.a[c] * self.a[c])
            .sum()
    }

    /// Fold community `lo` into `hi`; `hi` keeps its id.
    ///
    /// Every community `x` adjacent to `lo` is repointed so that
    /// `e_{hi,x} += e_{lo,x}`; the `lo↔hi` weight becomes internal. Cost is
    /// proportional to the number of distinct communities adjacent to `lo`.
    pub fn merge(&mut self, lo: usize, hi: usize) {
        debug_assert!(lo != hi);
        debug_assert!(self.live[lo] && self.live[hi]);

        let row = std::mem::take(&mut self.adj[lo]);
        for (x, e) in row {
            if x == hi {
                continue;
            }
            let moved = self.adj[x].remove(&lo).unwrap_or(0.0);
            debug_assert_eq!(moved, e);
            *self.adj[x].entry(hi).or_insert(0.0) += moved;
            *self.adj[hi].entry(x).or_insert(0.0) += moved;
        }
        let between = self.adj[hi].remove(&lo).unwrap_or(0.0);

        self.internal[hi] += self.internal[lo] + 2.0 * between;
        self.internal[lo] = 0.0;
        self.a[hi] += self.a[lo];
        self.a[lo] = 0.0;
        self.live[lo] = false;
    }
}
