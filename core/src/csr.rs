use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{GraphError, Result};
use crate::graph::{EdgeMode, LoadOptions, NodeId, SparseGraph};
use crate::ingest::{read_edge_list, EdgeList};

/// Weight stored for every edge; the graph is unweighted.
pub const UNIT_WEIGHT: u32 = 1;

/// Immutable graph in Compressed Sparse Row form.
///
/// `column_indices[row_offsets[i]..row_offsets[i + 1]]` are the out-neighbors
/// of node `i`, ascending. Parallel edges are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    row_offsets: Vec<usize>,
    column_indices: Vec<NodeId>,
    edge_values: Vec<u32>,
}

impl Default for CsrGraph {
    /// The empty graph: no nodes, no edges, `row_offsets == [0]`.
    fn default() -> Self {
        Self {
            row_offsets: vec![0],
            column_indices: Vec::new(),
            edge_values: Vec::new(),
        }
    }
}

impl CsrGraph {
    /// Load and build a graph from an edge-list file.
    ///
    /// On failure nothing is returned; `unwrap_or_default()` gives the empty graph.
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        info!(path = %path.display(), mode = ?options.edge_mode, "csr.load.start");

        let list = match read_edge_list(path, options) {
            Ok(list) => list,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "csr.load.failed");
                return Err(err);
            }
        };
        let lines_skipped = list.lines_skipped();
        let graph = Self::from_edge_list(list);

        info!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            lines_skipped,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "csr.load.done"
        );
        Ok(graph)
    }

    /// Build from in-memory `(source, destination)` pairs, directed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut list = EdgeList::default();
        for (u, v) in edges {
            list.push(u, v, EdgeMode::Directed);
        }
        Self::from_edge_list(list)
    }

    /// Sort the ingested pairs and compact them into CSR arrays.
    pub fn from_edge_list(list: EdgeList) -> Self {
        let node_count = list.node_count();
        let mut edges = list.into_edges();

        // (source, destination) order groups rows and sorts each row.
        edges.sort_unstable();

        let mut row_offsets = vec![0usize; node_count + 1];
        let mut column_indices = Vec::with_capacity(edges.len());
        let mut edge_values = Vec::with_capacity(edges.len());

        let mut current_row = 0usize;
        for &(u, v) in &edges {
            // Empty rows get the previous boundary.
            while current_row < u as usize {
                current_row += 1;
                row_offsets[current_row] = column_indices.len();
            }
            column_indices.push(v);
            edge_values.push(UNIT_WEIGHT);
        }
        while current_row < node_count {
            current_row += 1;
            row_offsets[current_row] = column_indices.len();
        }

        let graph = Self {
            row_offsets,
            column_indices,
            edge_values,
        };
        if let Err(err) = graph.validate() {
            panic!("CSR construction broke an invariant: {err}");
        }

        debug!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "csr.build.done"
        );
        graph
    }

    /// Check the structural invariants of the CSR arrays.
    pub fn validate(&self) -> Result<()> {
        if self.row_offsets.is_empty() {
            return Err(GraphError::CorruptCsr(
                "row_offsets must hold node_count + 1 entries".into(),
            ));
        }
        let n = self.node_count();
        let m = self.column_indices.len();
        if self.row_offsets[0] != 0 {
            return Err(GraphError::CorruptCsr("row_offsets[0] must be 0".into()));
        }
        if self.row_offsets[n] != m {
            return Err(GraphError::CorruptCsr(format!(
                "row_offsets[{n}] = {}, but column_indices.len() = {m}",
                self.row_offsets[n]
            )));
        }
        if self.edge_values.len() != m {
            return Err(GraphError::CorruptCsr(format!(
                "edge_values.len() = {} != edge count {m}",
                self.edge_values.len()
            )));
        }
        if let Some(i) = self.row_offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(GraphError::CorruptCsr(format!(
                "row_offsets not non-decreasing at i={i}"
            )));
        }
        if let Some(&bad) = self.column_indices.iter().find(|&&c| c as usize >= n) {
            return Err(GraphError::CorruptCsr(format!(
                "column index {bad} out of range for {n} nodes"
            )));
        }
        Ok(())
    }

    /// `node_count + 1` offsets; `[0]` for the empty graph.
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub fn column_indices(&self) -> &[NodeId] {
        &self.column_indices
    }

    pub fn edge_values(&self) -> &[u32] {
        &self.edge_values
    }

    /// Edge values parallel to `neighbors(node)`.
    pub fn edge_values_of(&self, node: NodeId) -> &[u32] {
        match self.row_range(node) {
            Some((start, end)) => &self.edge_values[start..end],
            None => &[],
        }
    }

    /// Approximate heap usage of the three arrays in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        self.row_offsets.capacity() * size_of::<usize>()
            + self.column_indices.capacity() * size_of::<NodeId>()
            + self.edge_values.capacity() * size_of::<u32>()
    }

    fn row_range(&self, node: NodeId) -> Option<(usize, usize)> {
        let i = node as usize;
        if i >= self.node_count() {
            return None;
        }
        Some((self.row_offsets[i], self.row_offsets[i + 1]))
    }
}

impl SparseGraph for CsrGraph {
    fn node_count(&self) -> usize {
        self.row_offsets.len().saturating_sub(1)
    }

    fn edge_count(&self) -> usize {
        self.column_indices.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.row_range(node) {
            Some((start, end)) => &self.column_indices[start..end],
            None => &[],
        }
    }
}
