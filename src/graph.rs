//! Read-only weighted view over an undirected petgraph graph.
//!
//! Built once per detection run; everything downstream works on dense node
//! indices and never touches the petgraph structure again.

use crate::error::{Error, Result};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Dense weighted adjacency extracted from an [`UnGraph`].
///
/// Node indices double as the initial (singleton) community ids. Parallel
/// edges accumulate their weights; self-loops count twice toward a node's
/// weighted degree and once toward the total weight, and are kept out of
/// the adjacency lists so they never become merge candidates.
#[derive(Debug, Clone)]
pub(crate) struct WeightedView {
    /// Per-node incident edges as `(neighbor, weight)`, self-loops excluded.
    pub adj: Vec<Vec<(usize, f64)>>,
    /// Weighted degree per node (self-loops counted twice).
    pub strength: Vec<f64>,
    /// Self-loop weight per node.
    pub self_loop: Vec<f64>,
    /// Total edge weight `m` (each edge counted once).
    pub total_weight: f64,
}

impl WeightedView {
    /// Extract the view, reading each edge's weight through `weight`.
    ///
    /// Rejects negative and non-finite weights.
    pub fn build<N, E, F>(graph: &UnGraph<N, E>, weight: F) -> Result<Self>
    where
        F: Fn(&E) -> f64,
    {
        let n = graph.node_count();
        let mut adj: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        let mut strength = vec![0.0; n];
        let mut self_loop = vec![0.0; n];
        let mut total_weight = 0.0;

        for edge in graph.edge_references() {
            let w = weight(edge.weight());
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidEdgeWeight { weight: w });
            }
            let i = edge.source().index();
            let j = edge.target().index();
            total_weight += w;
            if i == j {
                strength[i] += 2.0 * w;
                self_loop[i] += w;
            } else {
                adj[i].push((j, w));
                adj[j].push((i, w));
                strength[i] += w;
                strength[j] += w;
            }
        }

        Ok(Self {
            adj,
            strength,
            self_loop,
            total_weight,
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::UnGraph;

    #[test]
    fn test_view_accumulates_parallel_edges() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let _ = graph.add_edge(a, b, 1.5);
        let _ = graph.add_edge(a, b, 0.5);

        let view = WeightedView::build(&graph, |w| *w).unwrap();
        assert_eq!(view.node_count(), 2);
        assert_eq!(view.total_weight, 2.0);
        assert_eq!(view.strength[0], 2.0);
        assert_eq!(view.strength[1], 2.0);
        // Both parallel edges appear; downstream accumulation sums them.
        assert_eq!(view.adj[0].len(), 2);
    }

    #[test]
    fn test_view_self_loop_counts_twice_in_degree() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let _ = graph.add_edge(a, a, 2.0);
        let _ = graph.add_edge(a, b, 1.0);

        let view = WeightedView::build(&graph, |w| *w).unwrap();
        assert_eq!(view.total_weight, 3.0);
        assert_eq!(view.strength[0], 5.0);
        assert_eq!(view.self_loop[0], 2.0);
        // The self-loop is not a merge candidate.
        assert_eq!(view.adj[0].len(), 1);
    }

    #[test]
    fn test_view_rejects_negative_weight() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let _ = graph.add_edge(a, b, -1.0);

        let err = WeightedView::build(&graph, |w| *w).unwrap_err();
        assert_eq!(err, Error::InvalidEdgeWeight { weight: -1.0 });
    }

    #[test]
    fn test_view_rejects_nan_weight() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let _ = graph.add_edge(a, b, f64::NAN);

        assert!(WeightedView::build(&graph, |w| *w).is_err());
    }
}
