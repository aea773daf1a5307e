//! # compose-config
//!
//! Compose multiple configuration sources into one with deterministic,
//! fail-fast merge semantics.
//!
//! ## Overview
//!
//! `compose-config` defines a minimal capability contract for configuration
//! providers, [`ConfigurationSource`](sources::ConfigurationSource), and an
//! aggregator, [`MergeSource`](sources::MergeSource), that presents an
//! ordered sequence of providers as a single logical one:
//!
//! - Sources are queried per [`Environment`] (a named configuration variant
//!   such as `"production"` or `"test"`).
//! - Results merge in sequence order; a later source's value for a key
//!   overrides an earlier source's.
//! - Failure is transparent: the first error from any source, including the
//!   distinguished missing-environment kind, propagates to the caller
//!   unchanged. No partial merges.
//! - A `MergeSource` is itself a `ConfigurationSource`, so compositions
//!   nest.
//!
//! ## Quick Start
//!
//! ```rust
//! use compose_config::prelude::*;
//! use compose_config::sources::InMemorySource;
//!
//! # fn example() -> Result<()> {
//! let env = Environment::new("production");
//!
//! let defaults = InMemorySource::new("defaults")
//!     .with_entry(env.clone(), "server.port", "8080")
//!     .with_entry(env.clone(), "server.host", "0.0.0.0");
//! let overrides = InMemorySource::new("overrides")
//!     .with_entry(env.clone(), "server.port", "9090");
//!
//! let source = MergeSource::builder()
//!     .add_source(defaults)
//!     .add_source(overrides)
//!     .build();
//! source.init()?;
//!
//! let config = source.get_configuration(&env)?;
//! assert_eq!(config["server.port"], "9090"); // later source wins
//! assert_eq!(config["server.host"], "0.0.0.0");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Scope
//!
//! This crate is the composition layer only. Providers that read files,
//! fetch over the network, or parse concrete formats implement
//! [`ConfigurationSource`](sources::ConfigurationSource) in their own
//! crates and plug in here; so does any caching or refresh scheduling built
//! on top.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` derives on [`Environment`].

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod environment;
pub mod error;
pub mod sources;

pub use environment::Environment;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::environment::Environment;
    pub use crate::error::{ConfigError, Result};
    pub use crate::sources::{ConfigurationSource, MergeSource, MergeSourceBuilder};
}
