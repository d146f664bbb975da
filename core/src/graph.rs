use crate::error::Result;
use crate::traversal::BfsResult;

/// Dense node identifier. Nodes occupy `0..node_count()`.
pub type NodeId = u32;

/// Number of distinct ids a `NodeId` can name.
const ID_SPACE: usize = (NodeId::MAX as usize).saturating_add(1);

/// How edge-list lines map onto stored arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// One arc per accepted line, `source -> destination`.
    #[default]
    Directed,
    /// Each accepted line also stores the reverse arc. Self-loops are stored once.
    Undirected,
}

/// Options controlling how an edge list is turned into a graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub edge_mode: EdgeMode,
}

impl LoadOptions {
    pub fn directed() -> Self {
        Self { edge_mode: EdgeMode::Directed }
    }

    pub fn undirected() -> Self {
        Self { edge_mode: EdgeMode::Undirected }
    }
}

/// Read-only capability contract shared by every graph storage variant.
///
/// Implementors only supply counts and neighbor slices; the queries are
/// provided on top of those and behave identically for every variant.
pub trait SparseGraph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Out-neighbors of `node` in storage order. Empty for unknown ids.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    fn contains_node(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Node with the largest out-degree; ties go to the lowest id.
    /// `None` when the graph has no nodes.
    fn node_of_max_out_degree(&self) -> Option<NodeId> {
        crate::degree::node_of_max_out_degree(self)
    }

    /// Depth-bounded BFS from `start`, see [`crate::bfs_bounded`].
    fn bfs(&self, start: NodeId, max_depth: u32) -> Result<BfsResult> {
        crate::traversal::bfs_bounded(self, start, max_depth)
    }
}

/// Every addressable node id of `graph`, ascending.
///
/// Counts beyond what `NodeId` can name are capped at `NodeId::MAX`.
pub fn node_ids<G: SparseGraph + ?Sized>(
    graph: &G,
) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
    // Capped above, so the cast never truncates.
    (0..graph.node_count().min(ID_SPACE)).map(|i| i as NodeId)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Claims `nodes` nodes without storing any edges.
    struct Hollow {
        nodes: usize,
    }

    impl SparseGraph for Hollow {
        fn node_count(&self) -> usize {
            self.nodes
        }

        fn edge_count(&self) -> usize {
            0
        }

        fn neighbors(&self, _node: NodeId) -> &[NodeId] {
            &[]
        }
    }

    #[test]
    fn test_node_ids_small() {
        let ids: Vec<NodeId> = node_ids(&Hollow { nodes: 4 }).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(node_ids(&Hollow { nodes: 0 }).len(), 0);
    }

    #[test]
    fn test_node_ids_full_id_space() {
        let full = NodeId::MAX as usize + 1;
        let mut ids = node_ids(&Hollow { nodes: full });
        assert_eq!(ids.len(), full);
        assert_eq!(ids.next(), Some(0));
        assert_eq!(ids.next_back(), Some(NodeId::MAX));
    }

    #[test]
    fn test_node_ids_caps_past_id_space() {
        let mut ids = node_ids(&Hollow { nodes: NodeId::MAX as usize + 10 });
        assert_eq!(ids.len(), NodeId::MAX as usize + 1);
        assert_eq!(ids.next_back(), Some(NodeId::MAX));
    }
}
