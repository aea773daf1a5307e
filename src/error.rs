//! Error types for compose-config.

/// Result type alias for compose-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when working with configuration sources.
///
/// Callers typically branch on
/// [`MissingEnvironment`](ConfigError::MissingEnvironment), which means a
/// source has no data for the requested environment. Every other variant
/// signals a fault in the source itself. [`MergeSource`](crate::sources::MergeSource)
/// passes both through unchanged, so handling code looks the same whether it
/// talks to one source or a composition of many.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested environment is not recognized by a source.
    #[error("Missing environment: '{environment}'")]
    MissingEnvironment {
        /// Name of the environment that was requested.
        environment: String,
    },

    /// A source failed to initialize.
    #[error("Failed to initialize configuration source: {0}")]
    InitFailure(String),

    /// A source failed while fetching configuration (connectivity, parse,
    /// permission, ...).
    #[error("Configuration source failure: {0}")]
    SourceFailure(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// `true` if this is the distinguished missing-environment kind.
    pub fn is_missing_environment(&self) -> bool {
        matches!(self, Self::MissingEnvironment { .. })
    }

    /// Create a missing-environment error for the given environment name.
    pub fn missing_environment(environment: impl Into<String>) -> Self {
        Self::MissingEnvironment {
            environment: environment.into(),
        }
    }
}
