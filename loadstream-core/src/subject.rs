// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`Subject`] is the push-side entry point into a stream pipeline: producers call
//! [`send`](Subject::send), every current subscriber receives a clone of the item.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers only see items sent after they subscribed.
//! - **Unbounded**: unbounded mpsc channels, no backpressure.
//! - **Shared**: cheap to clone, all clones feed the same subscribers.
//! - **Cancellation**: dropping a subscriber stream unsubscribes it.
//!
//! ## Example
//!
//! ```
//! use loadstream_core::{LoadingState, Subject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<LoadingState<i32, String>>::new();
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.send(LoadingState::Loading).unwrap();
//! subject.send(LoadingState::Loaded(1)).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(LoadingState::Loading));
//! assert_eq!(stream.next().await, Some(LoadingState::Loaded(1)));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::error::SubjectError;
use futures::Stream;
use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

struct SubjectState<T> {
    closed: bool,
    senders: Vec<UnboundedSender<T>>,
}

/// Stream handed out by [`Subject::subscribe`].
///
/// Ends when the subject is closed or dropped by every producer.
#[must_use = "streams do nothing unless polled"]
pub struct SubjectStream<T> {
    receiver: UnboundedReceiver<T>,
}

impl<T> Stream for SubjectStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

/// A hot, unbounded subject that broadcasts items to all current subscribers.
///
/// See the [module documentation](self) for details.
pub struct Subject<T: Clone> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone> Subject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribes to items sent from now on.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        Ok(SubjectStream { receiver: rx })
    }

    /// Sends an item to every active subscriber.
    ///
    /// Subscribers whose stream has been dropped are pruned.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] if the subject has been closed.
    pub fn send(&self, item: T) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let before = state.senders.len();
        state
            .senders
            .retain(|tx| tx.unbounded_send(item.clone()).is_ok());

        let pruned = before - state.senders.len();
        if pruned > 0 {
            debug!("subject pruned {} dropped subscriber(s)", pruned);
        }

        Ok(())
    }

    /// Closes the subject, completing every subscriber stream.
    ///
    /// Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of subscribers seen at the last `send`.
    ///
    /// Dropped subscribers are only removed on the next `send`.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
