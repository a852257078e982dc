//! Store-connectivity flag shared between the connect task and handlers.
//!
//! Each service keeps one process-wide boolean saying whether its primary
//! document-store connection has been established. The background connect
//! task holds the only [`ReadinessWriter`]; request handlers hold cheap
//! [`Readiness`] clones and may only read. Reads and writes are relaxed
//! atomics - a handler observing a stale value for the duration of one
//! connection attempt is acceptable.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Read-only view of the store-connectivity flag.
#[derive(Clone, Debug)]
pub struct Readiness {
    connected: Arc<AtomicBool>,
}

/// Write handle for the store-connectivity flag.
///
/// Not `Clone`: exactly one task (the connect loop) owns write access.
#[derive(Debug)]
pub struct ReadinessWriter {
    connected: Arc<AtomicBool>,
}

impl Readiness {
    /// Create a flag that starts disconnected, returning the read view and
    /// the single write handle.
    #[must_use]
    pub fn new() -> (Self, ReadinessWriter) {
        let connected = Arc::new(AtomicBool::new(false));
        (
            Self {
                connected: Arc::clone(&connected),
            },
            ReadinessWriter { connected },
        )
    }

    /// Whether the store connection is currently established.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}

impl ReadinessWriter {
    /// Record that the store connection is established.
    pub fn mark_connected(&self) {
        self.connected.store(true, Ordering::Relaxed);
    }

    /// Record that the store connection is lost.
    pub fn mark_disconnected(&self) {
        self.connected.store(false, Ordering::Relaxed);
    }
}
