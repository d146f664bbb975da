//! neuronet-core: read-only CSR graph engine.
//!
//! Ingests a directed edge list (`<source> <destination>` per line), compacts
//! it into Compressed Sparse Row arrays and answers two queries against the
//! immutable result: the node of maximum out-degree and a depth-bounded BFS
//! that also reports every edge it examined.
//!
//! The crate emits `tracing` events but never installs a subscriber; callers
//! decide where diagnostics go.

mod csr;
mod degree;
mod error;
mod graph;
mod ingest;
mod traversal;

pub use csr::{CsrGraph, UNIT_WEIGHT};
pub use degree::{
    degree_ranking, degree_summary, node_of_max_out_degree, DegreeResult, DegreeSummary,
};
pub use error::{GraphError, Result};
pub use graph::{node_ids, EdgeMode, LoadOptions, NodeId, SparseGraph};
pub use ingest::{parse_edge, read_edge_list, read_edges_from, EdgeList, ParsedLine};
pub use traversal::{bfs_bounded, BfsResult};
