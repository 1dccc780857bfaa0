//! Shared behaviour used across crate boundaries.

pub mod cancellation;

pub use cancellation::{checkpoint, Cancellable, CancellationToken};
