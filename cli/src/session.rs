use std::path::{Path, PathBuf};
use std::time::Instant;

use neuronet_core::{CsrGraph, LoadOptions};
use tracing::info;

use crate::error::CliError;

/// A graph loaded from disk plus facts about the load.
pub struct LoadedGraph {
    pub graph: CsrGraph,
    pub source: PathBuf,
    pub file_size_bytes: u64,
    pub load_time_ms: f64,
}

/// Load `path` into a CSR graph, timing the whole build.
pub fn load(path: &Path, options: &LoadOptions) -> Result<LoadedGraph, CliError> {
    let start = Instant::now();
    let graph = CsrGraph::load(path, options)?;
    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let file_size_bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    info!(
        path = %path.display(),
        file_size_bytes,
        load_time_ms,
        "session.loaded"
    );

    Ok(LoadedGraph {
        graph,
        source: path.to_path_buf(),
        file_size_bytes,
        load_time_ms,
    })
}
