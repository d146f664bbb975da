use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeMode, LoadOptions, NodeId};

/// Raw edges read from an edge-list source, in file order.
///
/// Only [`EdgeList::push`] adds edges, so `max_node_id` always covers every
/// stored endpoint.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<(NodeId, NodeId)>,
    max_node_id: Option<NodeId>,
    lines_skipped: u64,
}

impl EdgeList {
    /// Record one accepted line, adding the reverse arc in undirected mode.
    pub fn push(&mut self, source: NodeId, target: NodeId, mode: EdgeMode) {
        self.edges.push((source, target));
        if mode == EdgeMode::Undirected && source != target {
            self.edges.push((target, source));
        }
        let hi = source.max(target);
        self.max_node_id = Some(self.max_node_id.map_or(hi, |m| m.max(hi)));
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Largest id seen as source or destination. `None` when no edge was accepted.
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.max_node_id
    }

    /// Non-blank, non-comment lines that did not parse as an edge.
    pub fn lines_skipped(&self) -> u64 {
        self.lines_skipped
    }

    pub(crate) fn into_edges(self) -> Vec<(NodeId, NodeId)> {
        self.edges
    }

    /// Number of nodes implied by the dense id space.
    pub fn node_count(&self) -> usize {
        self.max_node_id.map_or(0, |m| m as usize + 1)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Outcome of looking at a single edge-list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Edge(NodeId, NodeId),
    /// Blank line or `#` comment.
    Ignored,
    Malformed,
}

/// Parse one line of the `<source> <destination>` format.
///
/// Exactly two whitespace-separated non-negative integers are accepted.
pub fn parse_edge(line: &str) -> ParsedLine {
    let s = line.trim();
    if s.is_empty() || s.starts_with('#') {
        return ParsedLine::Ignored;
    }
    let mut it = s.split_whitespace();
    let (Some(a), Some(b), None) = (it.next(), it.next(), it.next()) else {
        return ParsedLine::Malformed;
    };
    match (a.parse::<NodeId>(), b.parse::<NodeId>()) {
        (Ok(u), Ok(v)) => ParsedLine::Edge(u, v),
        _ => ParsedLine::Malformed,
    }
}

/// Read every edge from `reader`. Lines that are not valid UTF-8 count as malformed.
pub fn read_edges_from<R: BufRead>(
    mut reader: R,
    options: &LoadOptions,
) -> std::io::Result<EdgeList> {
    let mut list = EdgeList::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) => parse_edge(line),
            Err(_) => ParsedLine::Malformed,
        };
        match parsed {
            ParsedLine::Edge(u, v) => list.push(u, v, options.edge_mode),
            ParsedLine::Ignored => {}
            ParsedLine::Malformed => list.lines_skipped += 1,
        }
    }

    Ok(list)
}

/// Open `path` and read its edge list.
pub fn read_edge_list(path: &Path, options: &LoadOptions) -> Result<EdgeList> {
    let file = File::open(path).map_err(|e| GraphError::from_io(path, e))?;
    let list = read_edges_from(BufReader::new(file), options)
        .map_err(|e| GraphError::from_io(path, e))?;

    debug!(
        path = %path.display(),
        edges = list.len(),
        lines_skipped = list.lines_skipped,
        "ingest.read.done"
    );
    Ok(list)
}
