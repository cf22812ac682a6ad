// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use loadstream_core::LoadingState;
use pin_project::pin_project;

/// Stream returned by [`DistinctLoadingExt::distinct_loading`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct DistinctLoading<S> {
    #[pin]
    upstream: S,
    last_was_loading: bool,
}

impl<S, T, E> Stream for DistinctLoading<S>
where
    S: Stream<Item = LoadingState<T, E>>,
{
    type Item = LoadingState<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match this.upstream.as_mut().poll_next(cx) {
                Poll::Ready(Some(state)) => {
                    let repeated = state.is_loading() && *this.last_was_loading;
                    *this.last_was_loading = state.is_loading();
                    if !repeated {
                        return Poll::Ready(Some(state));
                    }
                }
                other => return other,
            }
        }
    }
}

/// Extension trait providing the `distinct_loading` operator.
pub trait DistinctLoadingExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Collapses runs of consecutive `Loading` states into a single `Loading`.
    ///
    /// `Loaded` and `Failed` states are never filtered, even when equal to the previous
    /// one.
    fn distinct_loading(self) -> DistinctLoading<Self>;
}

impl<S, T, E> DistinctLoadingExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn distinct_loading(self) -> DistinctLoading<Self> {
        DistinctLoading {
            upstream: self,
            last_was_loading: false,
        }
    }
}
