// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Failure injection for loading streams.
//!
//! [`FailureInjectingStream`] wraps a stream of plain values, emitting each one as
//! `LoadingState::Loaded` and inserting a single `LoadingState::Failed` at a chosen
//! position. Useful to check that operators keep running after a failure.

use futures::Stream;
use loadstream_core::LoadingState;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects one failure at a given position.
///
/// # Examples
///
/// ```rust
/// use loadstream_core::LoadingState;
/// use loadstream_test_utils::{FailureInjectingStream, TestError};
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let base = stream::iter(vec![1, 2]);
/// let states: Vec<_> = FailureInjectingStream::new(base, 1, TestError::Network)
///     .collect()
///     .await;
///
/// assert_eq!(
///     states,
///     vec![
///         LoadingState::Loaded(1),
///         LoadingState::Failed(TestError::Network),
///         LoadingState::Loaded(2),
///     ]
/// );
/// # }
/// ```
pub struct FailureInjectingStream<S, E> {
    inner: S,
    failure: Option<(usize, E)>,
    count: usize,
}

impl<S, E> FailureInjectingStream<S, E> {
    /// Wraps `inner`, emitting `Failed(error)` as the 0-indexed emission `position`.
    pub fn new(inner: S, position: usize, error: E) -> Self {
        Self {
            inner,
            failure: Some((position, error)),
            count: 0,
        }
    }
}

impl<S, E> Stream for FailureInjectingStream<S, E>
where
    S: Stream + Unpin,
    E: Unpin,
{
    type Item = LoadingState<S::Item, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        if matches!(this.failure, Some((position, _)) if position == this.count) {
            this.count += 1;
            if let Some((_, error)) = this.failure.take() {
                return Poll::Ready(Some(LoadingState::Failed(error)));
            }
        }

        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(value)) => {
                this.count += 1;
                Poll::Ready(Some(LoadingState::Loaded(value)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
