//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading a configuration off untyped input.
///
/// This is the only failure the engine ever surfaces. The deserializer's
/// error is carried unchanged.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `initial` or `states` could not be read from the input
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
}
