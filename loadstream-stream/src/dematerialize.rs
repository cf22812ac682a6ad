// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion from a loading stream back into a failing stream.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use loadstream_core::LoadingState;
use pin_project::pin_project;

/// Stream returned by [`DematerializeExt::dematerialize`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Dematerialize<S> {
    #[pin]
    upstream: Option<S>,
}

impl<S, T, E> Stream for Dematerialize<S>
where
    S: Stream<Item = LoadingState<T, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let Some(upstream) = this.upstream.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            match upstream.poll_next(cx) {
                Poll::Ready(Some(LoadingState::Loading)) => continue,
                Poll::Ready(Some(LoadingState::Loaded(value))) => {
                    return Poll::Ready(Some(Ok(value)))
                }
                Poll::Ready(Some(LoadingState::Failed(error))) => {
                    this.upstream.set(None);
                    return Poll::Ready(Some(Err(error)));
                }
                Poll::Ready(None) => {
                    this.upstream.set(None);
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Extension trait turning a loading stream back into `Stream<Item = Result<T, E>>`.
pub trait DematerializeExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Drops `Loading`, maps `Loaded(v)` to `Ok(v)` and `Failed(e)` to `Err(e)`.
    ///
    /// The first failure terminates the output, restoring stream-level termination;
    /// the upstream is dropped right after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadstream_core::LoadingState;
    /// use loadstream_stream::DematerializeExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let states = stream::iter(vec![
    ///     LoadingState::Loading,
    ///     LoadingState::Loaded(1),
    ///     LoadingState::Failed("boom"),
    ///     LoadingState::Loaded(2),
    /// ]);
    ///
    /// let results: Vec<_> = states.dematerialize().collect().await;
    /// assert_eq!(results, vec![Ok(1), Err("boom")]);
    /// # }
    /// ```
    fn dematerialize(self) -> Dematerialize<Self>;
}

impl<S, T, E> DematerializeExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn dematerialize(self) -> Dematerialize<Self> {
        Dematerialize {
            upstream: Some(self),
        }
    }
}
