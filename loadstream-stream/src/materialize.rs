// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion from a failing stream into a loading stream.

use crate::LoadingStream;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{Stream, StreamExt, TryStream};
use loadstream_core::LoadingState;
use pin_project::pin_project;

/// Stream returned by [`MaterializeExt::materialize`] and
/// [`MaterializeExt::materialize_without_loading`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Materialize<S> {
    #[pin]
    upstream: Option<S>,
    emit_loading: bool,
}

impl<S> Materialize<S> {
    fn new(upstream: S, emit_loading: bool) -> Self {
        Self {
            upstream: Some(upstream),
            emit_loading,
        }
    }
}

impl<S> Stream for Materialize<S>
where
    S: TryStream,
{
    type Item = LoadingState<S::Ok, S::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if core::mem::take(this.emit_loading) {
            return Poll::Ready(Some(LoadingState::Loading));
        }

        let Some(upstream) = this.upstream.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match upstream.try_poll_next(cx) {
            Poll::Ready(Some(Ok(value))) => Poll::Ready(Some(LoadingState::Loaded(value))),
            Poll::Ready(Some(Err(error))) => {
                // The first failure is terminal: release the upstream without pulling again.
                this.upstream.set(None);
                Poll::Ready(Some(LoadingState::Failed(error)))
            }
            Poll::Ready(None) => {
                this.upstream.set(None);
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Extension trait lifting `Stream<Item = Result<T, E>>` into a loading stream.
///
/// The input is read as a stream that yields values until its first `Err`, which
/// terminates it.
pub trait MaterializeExt: TryStream + Sized {
    /// Emits `Loading`, then `Loaded(v)` for every `Ok(v)`.
    ///
    /// The first `Err(e)` becomes `Failed(e)` and completes the output; the upstream is
    /// dropped at that point and never polled again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadstream_core::LoadingState;
    /// use loadstream_stream::MaterializeExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let source = stream::iter(vec![Ok(1), Err("boom"), Ok(2)]);
    ///
    /// let states: Vec<_> = source.materialize().collect().await;
    ///
    /// assert_eq!(
    ///     states,
    ///     vec![LoadingState::Loading, LoadingState::Loaded(1), LoadingState::Failed("boom")]
    /// );
    /// # }
    /// ```
    fn materialize(self) -> Materialize<Self>;

    /// Same as [`materialize`](MaterializeExt::materialize) without the leading `Loading`.
    fn materialize_without_loading(self) -> Materialize<Self>;

    /// Materializes and type-erases the stream into a [`LoadingStream`].
    ///
    /// A single value followed by completion yields `[Loading, Loaded(v)]`; a failure
    /// yields `[Loading, Failed(e)]`.
    fn into_loading_stream(self) -> LoadingStream<Self::Ok, Self::Error>
    where
        Self: Send + 'static;
}

impl<S> MaterializeExt for S
where
    S: TryStream,
{
    fn materialize(self) -> Materialize<Self> {
        Materialize::new(self, true)
    }

    fn materialize_without_loading(self) -> Materialize<Self> {
        Materialize::new(self, false)
    }

    fn into_loading_stream(self) -> LoadingStream<Self::Ok, Self::Error>
    where
        Self: Send + 'static,
    {
        self.materialize().boxed()
    }
}
