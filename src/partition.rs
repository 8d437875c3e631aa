//! The detected community partition.

use petgraph::graph::NodeIndex;

/// Disjoint node sets covering a graph, largest community first.
///
/// Communities are ordered by descending size, ties broken by the smallest
/// contained node index; within a community, nodes are in ascending index
/// order. The ordering is part of the contract: two runs over the same
/// input produce identical `Partition` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    communities: Vec<Vec<NodeIndex>>,
}

impl Partition {
    /// Assemble from per-slot member lists; empty slots are skipped.
    pub(crate) fn from_members(members: Vec<Vec<usize>>) -> Self {
        let mut communities: Vec<Vec<NodeIndex>> = members
            .into_iter()
            .filter(|m| !m.is_empty())
            .map(|mut m| {
                m.sort_unstable();
                m.into_iter().map(NodeIndex::new).collect()
            })
            .collect();
        communities.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
        Self { communities }
    }

    /// Number of communities.
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// The communities, largest first.
    pub fn communities(&self) -> &[Vec<NodeIndex>] {
        &self.communities
    }

    /// Iterate over the communities as node slices.
    pub fn iter(&self) -> impl Iterator<Item = &[NodeIndex]> {
        self.communities.iter().map(|c| c.as_slice())
    }

    /// Label per node: the index of the community containing it.
    ///
    /// `n_nodes` must be the node count of the graph the partition was
    /// computed from.
    pub fn assignments(&self, n_nodes: usize) -> Vec<usize> {
        let mut labels = vec![usize::MAX; n_nodes];
        for (cid, community) in self.communities.iter().enumerate() {
            for &node in community {
                labels[node.index()] = cid;
            }
        }
        labels
    }

    /// Consume the partition, yielding the ordered community lists.
    pub fn into_inner(self) -> Vec<Vec<NodeIndex>> {
        self.communities
    }
}
