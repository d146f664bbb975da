use std::collections::VecDeque;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, SparseGraph};

/// Output of a depth-bounded BFS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BfsResult {
    /// Nodes in discovery order, start node first.
    pub visited_nodes: Vec<NodeId>,
    /// Every edge examined while expanding, in examination order. Edges into
    /// already-visited nodes are included.
    pub visited_edges: Vec<(NodeId, NodeId)>,
    /// Deepest level at which a node was discovered.
    pub max_depth_reached: u32,
}

impl BfsResult {
    pub fn node_count(&self) -> usize {
        self.visited_nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.visited_edges.len()
    }
}

/// BFS from `start`, expanding only nodes discovered at depth `< max_depth`.
///
/// Nodes at the depth bound are reported but their out-edges are not examined.
/// Each node enters the queue at most once. Fails with
/// [`GraphError::InvalidStartNode`] when `start` is outside `0..node_count()`.
pub fn bfs_bounded<G: SparseGraph + ?Sized>(
    graph: &G,
    start: NodeId,
    max_depth: u32,
) -> Result<BfsResult> {
    let node_count = graph.node_count();
    if !graph.contains_node(start) {
        return Err(GraphError::InvalidStartNode {
            node: start,
            node_count,
        });
    }

    let mut visited = vec![false; node_count];
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut result = BfsResult::default();

    visited[start as usize] = true;
    result.visited_nodes.push(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in graph.neighbors(current) {
            result.visited_edges.push((current, next));

            let seen = &mut visited[next as usize];
            if !*seen {
                *seen = true;
                result.visited_nodes.push(next);
                result.max_depth_reached = depth + 1;
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(
        start,
        max_depth,
        nodes = result.node_count(),
        edges = result.edge_count(),
        "bfs.done"
    );
    Ok(result)
}
