//! Environment snapshots and environment-backed fields.
//!
//! - [`EnvSnapshot`] - An immutable, injected copy of the environment
//! - [`SearchPathField`] - The GOPATH list, defaulting to an environment variable

pub mod resolver;
pub mod search_path;

pub use resolver::{resolve, EnvSnapshot};
pub use search_path::{SearchPathField, LIST_SEPARATOR};
