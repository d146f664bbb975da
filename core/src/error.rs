use std::path::PathBuf;

use crate::graph::NodeId;

/// Errors surfaced by loading and querying a graph.
///
/// Malformed edge-list lines are not errors: the ingester counts and drops them.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("edge list not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read edge list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid start node {node}: graph has {node_count} nodes")]
    InvalidStartNode { node: NodeId, node_count: usize },
    #[error("corrupt CSR structure: {0}")]
    CorruptCsr(String),
}

impl GraphError {
    /// Classify an I/O failure on `path`, splitting out a missing file.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GraphError::FileNotFound { path }
        } else {
            GraphError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
