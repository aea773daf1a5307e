//! Aggregation of multiple configuration sources into one.

use super::ConfigurationSource;
use crate::environment::Environment;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Presents an ordered sequence of configuration sources as a single source.
///
/// On every [`get_configuration`] call, each underlying source is queried in
/// sequence order and the resulting maps are folded into one: a later
/// source's entry for a key overwrites an earlier source's entry for the
/// same key. The sequence is fixed at construction, so precedence is fully
/// determined by the order sources were added.
///
/// `MergeSource` performs no recovery of its own. The first error from any
/// underlying source, during [`init`] or [`get_configuration`], aborts the
/// operation and is returned to the caller unchanged. Callers handle a
/// composition exactly as they would a single source.
///
/// `MergeSource` itself implements [`ConfigurationSource`], so aggregators
/// can be nested inside other aggregators.
///
/// # Examples
///
/// ```rust
/// use compose_config::prelude::*;
/// use compose_config::sources::InMemorySource;
///
/// # fn example() -> Result<()> {
/// let defaults = InMemorySource::new("defaults")
///     .with_entry(Environment::new("test"), "db.host", "localhost");
/// let overrides = InMemorySource::new("overrides")
///     .with_entry(Environment::new("test"), "db.host", "db.internal");
///
/// let merged = MergeSource::builder()
///     .add_source(defaults)
///     .add_source(overrides)
///     .build();
/// merged.init()?;
///
/// let config = merged.get_configuration(&Environment::new("test"))?;
/// assert_eq!(config["db.host"], "db.internal");
/// # Ok(())
/// # }
/// ```
///
/// [`init`]: ConfigurationSource::init
/// [`get_configuration`]: ConfigurationSource::get_configuration
pub struct MergeSource {
    sources: Vec<Arc<dyn ConfigurationSource>>,
}

impl MergeSource {
    /// Create a merge source over the given ordered sequence.
    ///
    /// Accepts shared handles so sources can be reused elsewhere (including
    /// inside other aggregators). Performs no I/O or validation; an empty
    /// sequence is permitted and yields an empty map for every call.
    pub fn new(sources: Vec<Arc<dyn ConfigurationSource>>) -> Self {
        Self { sources }
    }

    /// Create a new builder for assembling a merge source.
    pub fn builder() -> MergeSourceBuilder {
        MergeSourceBuilder::new()
    }

    /// Number of underlying sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// `true` if there are no underlying sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Get the underlying source names in precedence order (lowest first).
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl ConfigurationSource for MergeSource {
    /// Initialize every underlying source, in sequence order.
    ///
    /// Fail-fast: the first failure is returned unchanged and the remaining
    /// sources are not initialized.
    fn init(&self) -> Result<()> {
        for source in &self.sources {
            debug!(source = %source.name(), "initializing configuration source");
            source.init()?;
        }
        Ok(())
    }

    /// Query every underlying source for `environment` and merge the
    /// results, later sources overriding earlier ones on key collision.
    ///
    /// The first failure from any source, including
    /// [`ConfigError::MissingEnvironment`], aborts the merge; no partial
    /// result is returned.
    ///
    /// [`ConfigError::MissingEnvironment`]: crate::error::ConfigError::MissingEnvironment
    fn get_configuration(&self, environment: &Environment) -> Result<HashMap<String, String>> {
        let mut merged = HashMap::new();

        for source in &self.sources {
            let values = source.get_configuration(environment)?;
            trace!(
                source = %source.name(),
                entries = values.len(),
                "merging configuration from source"
            );
            merged.extend(values);
        }

        debug!(
            environment = %environment,
            sources = self.sources.len(),
            entries = merged.len(),
            "merged configuration"
        );
        Ok(merged)
    }

    fn name(&self) -> String {
        format!("merge:[{}]", self.source_names().join(","))
    }
}

/// Builder for constructing a [`MergeSource`].
///
/// Sources are merged in the order they are added: later sources have higher
/// precedence and override earlier ones on key collision. The sequence is
/// frozen once [`build`](MergeSourceBuilder::build) is called.
pub struct MergeSourceBuilder {
    sources: Vec<Arc<dyn ConfigurationSource>>,
}

impl MergeSourceBuilder {
    /// Create a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a source, taking ownership.
    pub fn add_source<S: ConfigurationSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Add an already-shared source handle.
    pub fn add_shared(mut self, source: Arc<dyn ConfigurationSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Freeze the sequence and build the merge source.
    pub fn build(self) -> MergeSource {
        MergeSource::new(self.sources)
    }
}

impl Default for MergeSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
