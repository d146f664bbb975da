use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use neuronet_core::{BfsResult, DegreeResult, DegreeSummary, NodeId, SparseGraph};
use serde::Serialize;

use crate::config::{OutputFormat, INLINE_NODE_LIMIT};
use crate::error::CliError;
use crate::session::LoadedGraph;

#[derive(Debug, Serialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl From<DegreeSummary> for DegreeStats {
    fn from(s: DegreeSummary) -> Self {
        Self {
            min: s.min,
            max: s.max,
            mean: s.mean,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub source: PathBuf,
    pub file_size_bytes: u64,
    pub node_count: usize,
    pub edge_count: usize,
    pub load_time_ms: f64,
    pub memory_bytes: usize,
    pub out_degree: Option<DegreeStats>,
}

impl StatsReport {
    pub fn new(loaded: &LoadedGraph) -> Self {
        let graph = &loaded.graph;
        Self {
            source: loaded.source.clone(),
            file_size_bytes: loaded.file_size_bytes,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            load_time_ms: loaded.load_time_ms,
            memory_bytes: graph.memory_usage(),
            out_degree: neuronet_core::degree_summary(graph).map(DegreeStats::from),
        }
    }
}

impl Render for StatsReport {
    fn text(&self) -> String {
        let mut out = format!(
            "dataset: {} ({:.2} MB)\n\
             nodes: {}\n\
             edges: {}\n\
             load time: {:.1}ms\n\
             memory: ~{:.1}MB\n",
            self.source.display(),
            self.file_size_bytes as f64 / 1_048_576.0,
            self.node_count,
            self.edge_count,
            self.load_time_ms,
            self.memory_bytes as f64 / 1_048_576.0,
        );
        if let Some(d) = &self.out_degree {
            out.push_str(&format!(
                "out-degree: min {} max {} mean {:.2}\n",
                d.min, d.max, d.mean
            ));
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct RankedNode {
    pub node_id: NodeId,
    pub out_degree: usize,
}

impl From<DegreeResult> for RankedNode {
    fn from(r: DegreeResult) -> Self {
        Self {
            node_id: r.node_id,
            out_degree: r.out_degree,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MaxDegreeReport {
    /// `None` when the graph has no nodes.
    pub node_id: Option<NodeId>,
    pub out_degree: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranking: Vec<RankedNode>,
}

impl Render for MaxDegreeReport {
    fn text(&self) -> String {
        let mut out = match (self.node_id, self.out_degree) {
            (Some(node), Some(degree)) => {
                format!("node with max out-degree: {node} (out-degree {degree})\n")
            }
            _ => "node with max out-degree: none (empty graph)\n".to_string(),
        };
        if !self.ranking.is_empty() {
            out.push_str(&format!("{:>6} {:>12} {:>10}\n", "rank", "node", "out-degree"));
            for (i, r) in self.ranking.iter().enumerate() {
                out.push_str(&format!("{:>6} {:>12} {:>10}\n", i + 1, r.node_id, r.out_degree));
            }
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct BfsReport {
    pub start: NodeId,
    pub depth: u32,
    pub node_count: usize,
    pub edge_count: usize,
    pub max_depth_reached: u32,
    pub elapsed_ms: f64,
    /// Discovery order, only when short enough to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_nodes: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<PathBuf>,
}

impl BfsReport {
    pub fn new(start: NodeId, depth: u32, result: &BfsResult, elapsed_ms: f64) -> Self {
        Self {
            start,
            depth,
            node_count: result.node_count(),
            edge_count: result.edge_count(),
            max_depth_reached: result.max_depth_reached,
            elapsed_ms,
            visited_nodes: (result.node_count() <= INLINE_NODE_LIMIT)
                .then(|| result.visited_nodes.clone()),
            exported_to: None,
        }
    }
}

impl Render for BfsReport {
    fn text(&self) -> String {
        let mut out = format!(
            "bfs from {} (depth {}): {} nodes, {} edges in {:.3}ms\n",
            self.start, self.depth, self.node_count, self.edge_count, self.elapsed_ms
        );
        out.push_str(&format!("deepest level reached: {}\n", self.max_depth_reached));
        if let Some(nodes) = &self.visited_nodes {
            let ids: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
            out.push_str(&format!("visited: {}\n", ids.join(" ")));
        }
        if let Some(path) = &self.exported_to {
            out.push_str(&format!("subgraph written to {}\n", path.display()));
        }
        out
    }
}

/// Subgraph file written by `bfs --export`.
#[derive(Debug, Serialize)]
pub struct SubgraphExport<'a> {
    pub start: NodeId,
    pub depth: u32,
    pub nodes: &'a [NodeId],
    pub edges: &'a [(NodeId, NodeId)],
}

/// Write the BFS subgraph as JSON, refusing results above `limit` nodes.
pub fn write_subgraph(
    path: &Path,
    start: NodeId,
    depth: u32,
    result: &BfsResult,
    limit: usize,
) -> Result<(), CliError> {
    if result.node_count() > limit {
        return Err(CliError::ExportTooLarge {
            nodes: result.node_count(),
            limit,
        });
    }

    let export = SubgraphExport {
        start,
        depth,
        nodes: &result.visited_nodes,
        edges: &result.visited_edges,
    };

    let file = File::create(path).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    if let Err(err) = encode_subgraph(BufWriter::new(file), path, &export) {
        // Never leave a truncated export behind.
        let _ = std::fs::remove_file(path);
        return Err(err);
    }
    Ok(())
}

fn encode_subgraph<W: Write>(
    mut writer: W,
    path: &Path,
    export: &SubgraphExport<'_>,
) -> Result<(), CliError> {
    let write_err = |source: std::io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    serde_json::to_writer_pretty(&mut writer, export).map_err(|e| {
        if e.is_io() {
            write_err(e.into())
        } else {
            CliError::Json(e)
        }
    })?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Render a report in the requested format, newline-terminated.
pub trait Render: Serialize {
    fn text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Text => Ok(self.text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuronet_core::CsrGraph;

    #[test]
    fn test_bfs_report_lists_small_results() {
        let g = CsrGraph::from_edges(vec![(0, 1), (0, 2), (1, 2)]);
        let result = g.bfs(0, 1).unwrap();
        let report = BfsReport::new(0, 1, &result, 0.5);
        assert_eq!(report.visited_nodes, Some(vec![0, 1, 2]));

        let text = report.render(OutputFormat::Text).unwrap();
        assert!(text.contains("3 nodes, 2 edges"));
        assert!(text.contains("visited: 0 1 2"));
    }

    #[test]
    fn test_bfs_report_omits_large_lists() {
        let g = CsrGraph::from_edges((1..=100).map(|i| (0, i)));
        let result = g.bfs(0, 1).unwrap();
        let report = BfsReport::new(0, 1, &result, 0.5);
        assert!(report.visited_nodes.is_none());

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["node_count"], 101);
        assert!(json.get("visited_nodes").is_none());
    }

    #[test]
    fn test_max_degree_report_empty() {
        let report = MaxDegreeReport {
            node_id: None,
            out_degree: None,
            ranking: Vec::new(),
        };
        assert!(report.render(OutputFormat::Text).unwrap().contains("none"));
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert!(json["node_id"].is_null());
    }

    #[test]
    fn test_write_subgraph_roundtrip() {
        let g = CsrGraph::from_edges(vec![(0, 1), (0, 2), (1, 2)]);
        let result = g.bfs(0, 2).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub.json");

        write_subgraph(&path, 0, 2, &result, 10).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["nodes"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["edges"], serde_json::json!([[0, 1], [0, 2], [1, 2]]));
    }

    #[test]
    fn test_write_subgraph_over_limit() {
        let g = CsrGraph::from_edges((1..=10).map(|i| (0, i)));
        let result = g.bfs(0, 1).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub.json");

        let err = write_subgraph(&path, 0, 1, &result, 5).unwrap_err();
        assert!(matches!(err, CliError::ExportTooLarge { nodes: 11, limit: 5 }));
        assert!(!path.exists());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_subgraph_io_failure_is_write_error() {
        let g = CsrGraph::from_edges(vec![(0, 1)]);
        let result = g.bfs(0, 1).unwrap();
        let export = SubgraphExport {
            start: 0,
            depth: 1,
            nodes: &result.visited_nodes,
            edges: &result.visited_edges,
        };
        let path = Path::new("sub.json");

        let err = encode_subgraph(BrokenPipe, path, &export).unwrap_err();
        match err {
            CliError::Write { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected a write error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_subgraph_unwritable_path() {
        let g = CsrGraph::from_edges(vec![(0, 1)]);
        let result = g.bfs(0, 1).unwrap();
        let dir = tempfile::tempdir().unwrap();

        // A directory cannot be opened as a file.
        let err = write_subgraph(dir.path(), 0, 1, &result, 10).unwrap_err();
        assert!(matches!(err, CliError::Write { .. }));
        assert!(dir.path().is_dir());
    }
}
