use thiserror::Error;

/// Errors raised while configuring the simulation or building its indices.
///
/// Stepping the flock never fails; these only come from loading parameters
/// and from neighbor-index construction, which falls back to a full scan.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading a parameter file failed.
    #[error("failed to read params file: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file was not valid JSON for [`super::params::Params`].
    #[error("failed to parse params: {0}")]
    Config(#[from] serde_json::Error),

    /// Parameters parsed but describe an unusable simulation.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// The k-d tree rejected a point.
    #[error("failed to build neighbor index: {0}")]
    Index(String),
}

/// Result alias for fallible simulation setup.
pub type Result<T> = std::result::Result<T, SimError>;
