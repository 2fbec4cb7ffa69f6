use std::path::PathBuf;

use crate::location::LocationId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when loading or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested location ID does not exist in the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The world data is internally inconsistent.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// The world data could not be decoded.
    #[error("malformed world data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The world file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl WorldError {
    pub(crate) fn integrity(msg: impl Into<String>) -> Self {
        Self::DataIntegrity(msg.into())
    }

    /// Whether this error means the data source itself is unusable.
    ///
    /// Malformed JSON counts: both abort startup the same way.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DataIntegrity(_) | Self::Parse(_))
    }
}
