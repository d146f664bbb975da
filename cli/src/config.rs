use neuronet_core::{EdgeMode, LoadOptions};

use crate::error::CliError;

/// BFS depth used when `--depth` is not given.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Largest subgraph `--export` writes. Bigger results are refused.
pub const DEFAULT_EXPORT_LIMIT: usize = 5000;

pub const MAX_EXPORT_LIMIT: usize = 50_000_000;

/// Visited nodes are listed inline in text output up to this many.
pub const INLINE_NODE_LIMIT: usize = 50;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved runtime settings: command-line flags over environment over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub edge_mode: EdgeMode,
    pub format: OutputFormat,
    pub export_limit: usize,
}

impl Settings {
    pub fn new(
        undirected: bool,
        format: OutputFormat,
        export_limit: usize,
    ) -> Result<Self, CliError> {
        if export_limit == 0 || export_limit > MAX_EXPORT_LIMIT {
            return Err(CliError::InvalidSetting {
                name: "export-limit",
                reason: format!("must be between 1 and {MAX_EXPORT_LIMIT}, got {export_limit}"),
            });
        }
        Ok(Self {
            edge_mode: if undirected {
                EdgeMode::Undirected
            } else {
                EdgeMode::Directed
            },
            format,
            export_limit,
        })
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            edge_mode: self.edge_mode,
        }
    }
}
