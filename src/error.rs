use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("{axis} extent {extent}px is not a positive multiple of cell size {cell_size}px")]
    MisalignedExtent {
        axis: &'static str,
        extent: i32,
        cell_size: i32,
    },
    #[error("tick rate must be positive")]
    ZeroTickRate,
}
