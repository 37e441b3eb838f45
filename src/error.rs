//! Infrastructure errors.
//!
//! These are failures of the harness itself (bad configuration, worker pool
//! construction, I/O). Result mismatches are not errors; they are recorded by
//! the [`Reporter`](crate::harness::Reporter) and the sweep continues.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised by harness setup or rendering.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A configuration value is out of range.
    #[error("invalid harness config: {field}: {reason}")]
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
    /// The worker pool for parallel policies could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    /// A config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A config file could not be parsed.
    #[cfg(feature = "config-file")]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// A report could not be rendered as JSON.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl HarnessError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for configuration errors.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        match self {
            Self::InvalidConfig { .. } | Self::ConfigIo { .. } => true,
            #[cfg(feature = "config-file")]
            Self::ConfigParse(_) => true,
            Self::WorkerPool(_) | Self::Render(_) => false,
        }
    }
}
