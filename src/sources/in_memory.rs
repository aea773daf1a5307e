//! In-memory configuration source.

use super::ConfigurationSource;
use crate::environment::Environment;
use crate::error::{ConfigError, Result};
use std::collections::HashMap;

/// Configuration source backed by maps held entirely in memory.
///
/// Useful as the lowest-precedence defaults layer in a composition, and as a
/// deterministic source in tests. Holds one key-value map per environment;
/// querying an environment it has no map for fails with
/// [`ConfigError::MissingEnvironment`].
///
/// # Examples
///
/// ```rust
/// use compose_config::prelude::*;
/// use compose_config::sources::InMemorySource;
///
/// # fn example() -> Result<()> {
/// let source = InMemorySource::new("defaults")
///     .with_entry(Environment::new("test"), "server.port", "8080")
///     .with_entry(Environment::new("test"), "server.host", "localhost");
///
/// let config = source.get_configuration(&Environment::new("test"))?;
/// assert_eq!(config["server.port"], "8080");
/// # Ok(())
/// # }
/// ```
pub struct InMemorySource {
    name: String,
    environments: HashMap<Environment, HashMap<String, String>>,
}

impl InMemorySource {
    /// Create an empty in-memory source with the given diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            environments: HashMap::new(),
        }
    }

    /// Add (or replace) the full map for an environment.
    pub fn with_environment(
        mut self,
        environment: Environment,
        values: HashMap<String, String>,
    ) -> Self {
        self.environments.insert(environment, values);
        self
    }

    /// Add a single entry for an environment, creating the environment's
    /// map if needed.
    pub fn with_entry(
        mut self,
        environment: Environment,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environments
            .entry(environment)
            .or_default()
            .insert(key.into(), value.into());
        self
    }
}

impl ConfigurationSource for InMemorySource {
    fn init(&self) -> Result<()> {
        Ok(())
    }

    fn get_configuration(&self, environment: &Environment) -> Result<HashMap<String, String>> {
        self.environments
            .get(environment)
            .cloned()
            .ok_or_else(|| ConfigError::missing_environment(environment.name()))
    }

    fn name(&self) -> String {
        format!("in-memory:{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_environment_returns_its_map() {
        let source = InMemorySource::new("test")
            .with_entry(Environment::new("dev"), "key", "value");

        let config = source.get_configuration(&Environment::new("dev")).unwrap();
        assert_eq!(config["key"], "value");
    }

    #[test]
    fn test_unknown_environment_is_missing() {
        let source = InMemorySource::new("test")
            .with_entry(Environment::new("dev"), "key", "value");

        let err = source
            .get_configuration(&Environment::new("prod"))
            .unwrap_err();
        assert!(err.is_missing_environment());
    }

    #[test]
    fn test_with_environment_replaces_map() {
        let mut replacement = HashMap::new();
        replacement.insert("only".to_string(), "this".to_string());

        let source = InMemorySource::new("test")
            .with_entry(Environment::new("dev"), "old", "gone")
            .with_environment(Environment::new("dev"), replacement);

        let config = source.get_configuration(&Environment::new("dev")).unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config["only"], "this");
    }

    #[test]
    fn test_returned_map_is_a_copy() {
        let source = InMemorySource::new("test")
            .with_entry(Environment::new("dev"), "key", "value");

        let env = Environment::new("dev");
        let mut first = source.get_configuration(&env).unwrap();
        first.insert("extra".to_string(), "mutation".to_string());

        let second = source.get_configuration(&env).unwrap();
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_init_is_a_no_op() {
        let source = InMemorySource::new("test");
        source.init().unwrap();
        source.init().unwrap();
    }

    #[test]
    fn test_name() {
        let source = InMemorySource::new("defaults");
        assert_eq!(source.name(), "in-memory:defaults");
    }
}
