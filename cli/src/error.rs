use std::path::PathBuf;

use neuronet_core::GraphError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "subgraph has {nodes} nodes, over the export limit of {limit}; \
         lower --depth or raise --export-limit"
    )]
    ExportTooLarge { nodes: usize, limit: usize },
    #[error("invalid {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}
