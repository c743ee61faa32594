//! Status channel holding the single process-wide request status
//!
//! The UI layer observes exactly one `{busy, message}` pair; every write
//! overwrites the previous value. Built on `tokio::sync::watch`, which has
//! the required latest-value semantics (no history, no queue) and lets
//! observers either read synchronously or await changes.

use crate::types::RequestStatus;
use std::sync::Arc;
use tokio::sync::watch;

/// Handle to the single request status cell (cloneable, all clones share state)
#[derive(Clone)]
pub struct StatusChannel {
    tx: Arc<watch::Sender<RequestStatus>>,
}

impl Default for StatusChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusChannel {
    /// Create a channel starting idle with an empty message
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(RequestStatus::default());
        Self { tx: Arc::new(tx) }
    }

    /// Read the current status synchronously
    pub fn current(&self) -> RequestStatus {
        self.tx.borrow().clone()
    }

    /// Subscribe to status changes
    ///
    /// The receiver always yields the latest value; intermediate writes an
    /// observer did not keep up with are overwritten, never queued.
    pub fn subscribe(&self) -> watch::Receiver<RequestStatus> {
        self.tx.subscribe()
    }

    /// Mark a request as in flight: clears the message, sets busy
    pub(crate) fn begin(&self) {
        self.tx.send_replace(RequestStatus {
            busy: true,
            message: String::new(),
        });
    }

    /// Record an outcome: busy goes (or stays) false, the message is replaced
    ///
    /// Used both to complete an in-flight request and for exits that never
    /// started one (validation failures, missing token, logout).
    pub(crate) fn finish(&self, message: impl Into<String>) {
        self.tx.send_replace(RequestStatus {
            busy: false,
            message: message.into(),
        });
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_empty_message() {
        let status = StatusChannel::new();
        assert_eq!(status.current(), RequestStatus::default());
    }

    #[test]
    fn begin_sets_busy_and_clears_message() {
        let status = StatusChannel::new();
        status.finish("previous outcome");
        status.begin();
        let current = status.current();
        assert!(current.busy);
        assert!(current.message.is_empty());
    }

    #[test]
    fn writes_overwrite_not_queue() {
        let status = StatusChannel::new();
        let mut rx = status.subscribe();

        status.finish("first");
        status.finish("second");

        // The receiver only ever sees the latest value
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().message, "second");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscriber_observes_completion() {
        let status = StatusChannel::new();
        let mut rx = status.subscribe();

        status.begin();
        rx.changed().await.unwrap();
        assert!(rx.borrow().busy);

        status.finish("done");
        rx.changed().await.unwrap();
        let current = rx.borrow().clone();
        assert!(!current.busy);
        assert_eq!(current.message, "done");
    }
}
