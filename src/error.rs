//! Error types for fleetfind.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors produced by search configuration and setup.
///
/// Searches themselves never fail: empty inputs, `k == 0`, exhausted ring
/// bounds, and out-of-region drivers all degrade to smaller (possibly empty)
/// result sets instead of returning an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid configuration value, reported at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to serialize or deserialize a configuration document.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
