use crate::graph::{node_ids, NodeId, SparseGraph};

/// Out-degree of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeResult {
    pub node_id: NodeId,
    pub out_degree: usize,
}

/// Min / max / mean out-degree over all nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeSummary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

/// Node with the largest out-degree, scanning ids in ascending order.
///
/// Only a strictly greater degree replaces the current best, so ties go to
/// the lowest id. Returns `None` for a graph without nodes.
pub fn node_of_max_out_degree<G: SparseGraph + ?Sized>(graph: &G) -> Option<NodeId> {
    let mut best: Option<(NodeId, usize)> = None;

    for node in node_ids(graph) {
        let degree = graph.out_degree(node);
        match best {
            Some((_, max)) if degree <= max => {}
            _ => best = Some((node, degree)),
        }
    }

    best.map(|(node, _)| node)
}

/// Nodes ranked by out-degree, highest first.
///
/// Equal degrees are ordered by ascending id. `top_n == 0` returns every node.
pub fn degree_ranking<G: SparseGraph + ?Sized>(graph: &G, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = node_ids(graph)
        .map(|node_id| DegreeResult {
            node_id,
            out_degree: graph.out_degree(node_id),
        })
        .collect();

    results.sort_by(|a, b| {
        b.out_degree
            .cmp(&a.out_degree)
            .then(a.node_id.cmp(&b.node_id))
    });

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}

pub fn degree_summary<G: SparseGraph + ?Sized>(graph: &G) -> Option<DegreeSummary> {
    let ids = node_ids(graph);
    let n = ids.len();
    if n == 0 {
        return None;
    }

    let mut min = usize::MAX;
    let mut max = 0usize;
    let mut sum: u64 = 0;
    for node in ids {
        let d = graph.out_degree(node);
        min = min.min(d);
        max = max.max(d);
        sum += d as u64;
    }

    Some(DegreeSummary {
        min,
        max,
        mean: sum as f64 / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::CsrGraph;

    fn make_star(center: NodeId, leaves: NodeId) -> CsrGraph {
        CsrGraph::from_edges((0..=leaves).filter(|&i| i != center).map(|i| (center, i)))
    }

    fn make_chain(n: NodeId) -> CsrGraph {
        CsrGraph::from_edges((0..n - 1).map(|i| (i, i + 1)))
    }

    #[test]
    fn test_max_degree_triangle() {
        let g = CsrGraph::from_edges(vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(node_of_max_out_degree(&g), Some(0));
        assert_eq!(g.node_of_max_out_degree(), Some(0));
    }

    #[test]
    fn test_max_degree_star_center_not_zero() {
        let g = make_star(7, 20);
        assert_eq!(node_of_max_out_degree(&g), Some(7));
    }

    #[test]
    fn test_max_degree_tie_prefers_lowest_id() {
        // Nodes 1, 2 and 4 all have out-degree 2.
        let g = CsrGraph::from_edges(vec![(0, 1), (1, 2), (1, 3), (2, 3), (2, 4), (4, 0), (4, 1)]);
        assert_eq!(node_of_max_out_degree(&g), Some(1));
    }

    #[test]
    fn test_max_degree_self_loop() {
        let g = CsrGraph::from_edges(vec![(0, 0)]);
        assert_eq!(node_of_max_out_degree(&g), Some(0));
    }

    #[test]
    fn test_max_degree_empty() {
        let g = CsrGraph::default();
        assert_eq!(node_of_max_out_degree(&g), None);
    }

    #[test]
    fn test_max_degree_counts_parallel_edges() {
        let g = CsrGraph::from_edges(vec![(0, 1), (0, 2), (1, 0), (1, 0), (1, 0)]);
        assert_eq!(node_of_max_out_degree(&g), Some(1));
    }

    #[test]
    fn test_degree_ranking_star() {
        let g = make_star(0, 50);
        let results = degree_ranking(&g, 0);
        assert_eq!(results.len(), 51);
        assert_eq!(results[0], DegreeResult { node_id: 0, out_degree: 50 });
        assert!(results[1..].iter().all(|r| r.out_degree == 0));
    }

    #[test]
    fn test_degree_ranking_top_n() {
        let g = make_star(0, 50);
        let results = degree_ranking(&g, 5);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].node_id, 0);
        // Leaves tie at zero and come back in id order.
        let ids: Vec<NodeId> = results[1..].iter().map(|r| r.node_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_degree_ranking_sorted() {
        let g = CsrGraph::from_edges(vec![(3, 0), (3, 1), (3, 2), (1, 0), (2, 0), (2, 1)]);
        let results = degree_ranking(&g, 0);
        for w in results.windows(2) {
            assert!(
                w[0].out_degree >= w[1].out_degree,
                "not sorted: {} >= {} failed",
                w[0].out_degree,
                w[1].out_degree
            );
        }
        assert_eq!(results[0].node_id, 3);
    }

    #[test]
    fn test_degree_ranking_empty() {
        assert!(degree_ranking(&CsrGraph::default(), 10).is_empty());
    }

    #[test]
    fn test_degree_summary_chain() {
        let g = make_chain(5);
        let summary = degree_summary(&g).unwrap();
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 1);
        assert!((summary.mean - 0.8).abs() < 1e-9);
    }

    /// A graph claiming the whole id space with a single edge on the last id.
    struct FullIdSpace;

    impl SparseGraph for FullIdSpace {
        fn node_count(&self) -> usize {
            NodeId::MAX as usize + 1
        }

        fn edge_count(&self) -> usize {
            1
        }

        fn neighbors(&self, node: NodeId) -> &[NodeId] {
            if node == NodeId::MAX {
                &[0]
            } else {
                &[]
            }
        }
    }

    #[test]
    #[ignore = "scans 2^32 nodes; run with --release --ignored"]
    fn test_full_id_space_scan() {
        assert_eq!(node_of_max_out_degree(&FullIdSpace), Some(NodeId::MAX));

        let summary = degree_summary(&FullIdSpace).unwrap();
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 1);
    }

    #[test]
    fn test_degree_summary_empty() {
        assert_eq!(degree_summary(&CsrGraph::default()), None);
    }
}
