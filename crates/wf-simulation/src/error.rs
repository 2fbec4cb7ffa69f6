use std::path::PathBuf;

use wf_core::WorldError;
use wf_fiction::FictionError;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that stop a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The world could not be loaded or failed its integrity checks.
    #[error(transparent)]
    World(#[from] WorldError),

    /// The session failed in a way that ends the run.
    #[error(transparent)]
    Fiction(#[from] FictionError),

    /// A script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Io {
        /// The script path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A script file is malformed.
    #[error("invalid script: {0}")]
    Script(String),
}
