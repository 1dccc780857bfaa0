//! Cancellation for graph passes.
//!
//! Passes poll the token only while they are still read-only. Once a pass
//! starts mutating a graph it runs to completion, so a `Cancelled` error always
//! means the caller's graph was left exactly as it was.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::{GraphError, GraphResult};

/// A flag polled between nodes. Shared across rayon workers, hence `Send + Sync`.
pub trait Cancellable: Send + Sync {
    fn is_cancelled(&self) -> bool;

    fn cancel(&self);

    /// `Err(Cancelled)` once cancellation has been requested.
    fn checkpoint(&self) -> GraphResult<()> {
        if self.is_cancelled() {
            Err(GraphError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Poll an optional token.
pub fn checkpoint(cancel: Option<&dyn Cancellable>) -> GraphResult<()> {
    cancel.map_or(Ok(()), |token| token.checkpoint())
}

/// Flag token. Clones share the flag, so one handle can cancel a filter
/// running on another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
