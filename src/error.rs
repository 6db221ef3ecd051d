// Error types for loading and planning trips

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading items or emitting a plan.
#[derive(Debug, Error)]
pub enum TripError {
    /// The item file could not be read.
    #[error("failed to read items from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The item file is not a list of well-formed items (missing field, non-numeric time, ...).
    #[error("invalid item data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The plan could not be serialised.
    #[error("failed to serialise trip plan")]
    Serialize(#[from] serde_json::Error),
}
