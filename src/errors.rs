/// Top-level error for a command invocation.
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::library::InvariantError;
use crate::options::UsageError;

/// Any failure that terminates a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command-line input.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// No usable connection settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The remote API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An internal invariant did not hold. Always a bug.
    #[error("internal error: {0}")]
    Internal(#[from] InvariantError),
}

impl CliError {
    /// Return the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Config(_) | Self::Api(_) => 1,
            Self::Internal(_) => 70,
        }
    }

    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Usage(_) => "usage_error",
            Self::Config(config) => config.code(),
            Self::Api(api) => api.code(),
            Self::Internal(_) => "internal_error",
        }
    }
}
