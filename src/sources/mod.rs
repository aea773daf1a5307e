//! Configuration source implementations.

mod in_memory;
mod merge;
mod source;

pub use in_memory::InMemorySource;
pub use merge::{MergeSource, MergeSourceBuilder};
pub use source::ConfigurationSource;
