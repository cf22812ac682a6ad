// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation flag shared between a subscription handle and its observation loop.

use event_listener::Event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag.
///
/// Clones share the same state. Cancelling any clone wakes every pending
/// [`cancelled()`](CancellationToken::cancelled) future.
///
/// # Example
///
/// ```
/// use loadstream_core::CancellationToken;
///
/// # async fn example() {
/// let token = CancellationToken::new();
/// let watcher = token.clone();
///
/// tokio::spawn(async move {
///     watcher.cancelled().await;
/// });
///
/// assert!(token.cancel());
/// assert!(!token.cancel());
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and wakes every waiter.
    ///
    /// Returns `true` if this call cancelled the token, `false` if it was already
    /// cancelled.
    pub fn cancel(&self) -> bool {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.inner.event.notify(usize::MAX);
        true
    }

    /// Returns `true` once any clone has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        while !self.is_cancelled() {
            let listener = self.inner.event.listen();
            // cancel() may have run before the listener was registered
            if self.is_cancelled() {
                return;
            }
            listener.await;
        }
    }
}
