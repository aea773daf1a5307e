//! Environment selection for configuration queries.

use std::fmt;

/// An immutable identifier selecting which configuration variant to fetch.
///
/// An environment is nothing more than a name (e.g. `"production"`,
/// `"us-west/test"`); how that name maps onto data is each source's concern.
/// Two environments are equal when their names are equal.
///
/// # Examples
///
/// ```rust
/// use compose_config::Environment;
///
/// let env = Environment::new("production");
/// assert_eq!(env.name(), "production");
/// assert_eq!(env, Environment::new("production"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    name: String,
}

impl Environment {
    /// Create an environment with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The environment's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The empty-named environment, used when a caller does not distinguish
/// between configuration variants.
impl Default for Environment {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_by_name() {
        assert_eq!(Environment::new("test"), Environment::new("test"));
        assert_ne!(Environment::new("test"), Environment::new("prod"));
    }

    #[test]
    fn test_default_is_empty_named() {
        assert_eq!(Environment::default().name(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Environment::new("staging").to_string(), "staging");
    }

    #[test]
    fn test_usable_as_hash_key() {
        let mut set = HashSet::new();
        set.insert(Environment::new("a"));
        set.insert(Environment::new("a"));
        set.insert(Environment::new("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_str_and_string() {
        let a: Environment = "test".into();
        let b: Environment = String::from("test").into();
        assert_eq!(a, b);
    }
}
