//! # sylva-core
//!
//! Foundation crate for the Sylva DAG filter.
//! Defines ids, inclusion kinds, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::SylvaConfig;
pub use errors::{GraphError, GraphResult, SylvaError, SylvaResult};
pub use models::{Inclusion, NodeId};
pub use traits::{Cancellable, CancellationToken};
