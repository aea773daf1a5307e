//! Configuration source trait.

use crate::environment::Environment;
use crate::error::Result;
use std::collections::HashMap;

/// Trait for configuration sources.
///
/// Implement this trait to expose any configuration provider (files, remote
/// endpoints, databases, key-value stores) to a [`MergeSource`]. A source is
/// queried per [`Environment`] and answers with a flat string key-value map.
///
/// Both operations take `&self` so sources can be shared behind an `Arc`;
/// sources that mutate internal state during `init` (opening connections,
/// priming caches) use interior mutability.
///
/// [`MergeSource`]: crate::sources::MergeSource
pub trait ConfigurationSource: Send + Sync {
    /// Prepare this source for serving configuration.
    ///
    /// Called once before the first [`get_configuration`] as a convention,
    /// not an enforced protocol. Must be tolerant of repeated calls.
    ///
    /// # Errors
    ///
    /// Returns an error if setup fails (unreachable resource, invalid
    /// backing data, ...).
    ///
    /// [`get_configuration`]: ConfigurationSource::get_configuration
    fn init(&self) -> Result<()>;

    /// Fetch the configuration for the given environment.
    ///
    /// The returned map is a fresh copy owned by the caller; it never
    /// aliases the source's internal state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironment`] when this source has no
    /// data for `environment`, or any other error kind for provider faults
    /// (I/O, parse, connectivity, ...).
    ///
    /// [`ConfigError::MissingEnvironment`]: crate::error::ConfigError::MissingEnvironment
    fn get_configuration(&self, environment: &Environment) -> Result<HashMap<String, String>>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String {
        "unnamed".to_string()
    }
}
