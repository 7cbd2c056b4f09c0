//! Cooperative cancellation support

use crate::error::{GeneratorError, GeneratorResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle for requesting cancellation of a generation pass
#[derive(Clone, Debug)]
pub struct CancellationHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancellationHandle {
    /// Create a new, untriggered handle
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Get a token that workers poll between units of work
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            cancelled: Some(self.cancelled.clone()),
        }
    }
}

impl Default for CancellationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Token observed by generation workers
///
/// A token created with [`CancellationToken::none`] is never cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Option<Arc<AtomicBool>>,
}

impl CancellationToken {
    /// A token that can never be cancelled
    pub fn none() -> Self {
        Self { cancelled: None }
    }

    /// Check if cancellation has been requested (non-blocking)
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Return `Err(GeneratorError::Cancelled)` once cancellation was requested
    pub fn check(&self) -> GeneratorResult<()> {
        if self.is_cancelled() {
            Err(GeneratorError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "cancel/cancel_tests.rs"]
mod cancel_tests;
