// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Switch-to-latest flat-map for loading streams.
//!
//! Each `Loaded(v)` from the upstream maps to a new inner loading stream, whose states are
//! forwarded until the upstream emits again. Any upstream emission drops the current inner
//! stream before anything else happens, so states from a replaced inner stream can never
//! be observed.
//!
//! `Loading` and `Failed` from the upstream are forwarded as-is (without invoking the
//! mapping function), and they also drop the current inner stream.
//!
//! The output completes once the upstream has completed and the current inner stream,
//! if any, has completed too.

use crate::types::POLL_BUDGET;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{Fuse, Stream, StreamExt};
use loadstream_core::LoadingState;
use pin_project::pin_project;

/// Stream returned by [`FlatMapLoadedExt::flat_map_loaded`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct FlatMapLoaded<S, F, St> {
    #[pin]
    upstream: Fuse<S>,
    #[pin]
    inner: Option<St>,
    f: F,
    switches: u64,
}

impl<S, F, St> FlatMapLoaded<S, F, St>
where
    S: Stream,
{
    fn new(upstream: S, f: F) -> Self {
        Self {
            upstream: upstream.fuse(),
            inner: None,
            f,
            switches: 0,
        }
    }
}

impl<S, F, St, T, U, E> Stream for FlatMapLoaded<S, F, St>
where
    S: Stream<Item = LoadingState<T, E>>,
    F: FnMut(T) -> St,
    St: Stream<Item = LoadingState<U, E>>,
{
    type Item = LoadingState<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let mut budget = POLL_BUDGET;

        loop {
            if budget == 0 {
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
            budget -= 1;

            if !this.upstream.is_done() {
                match this.upstream.as_mut().poll_next(cx) {
                    Poll::Ready(Some(LoadingState::Loaded(value))) => {
                        this.inner.set(None);
                        *this.switches += 1;
                        trace!("flat_map_loaded switching to inner stream #{}", this.switches);
                        let next = (this.f)(value);
                        this.inner.set(Some(next));
                        continue;
                    }
                    Poll::Ready(Some(LoadingState::Loading)) => {
                        this.inner.set(None);
                        return Poll::Ready(Some(LoadingState::Loading));
                    }
                    Poll::Ready(Some(LoadingState::Failed(error))) => {
                        this.inner.set(None);
                        return Poll::Ready(Some(LoadingState::Failed(error)));
                    }
                    Poll::Ready(None) | Poll::Pending => {}
                }
            }

            if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                match inner.poll_next(cx) {
                    Poll::Ready(Some(state)) => return Poll::Ready(Some(state)),
                    Poll::Ready(None) => {
                        this.inner.set(None);
                        continue;
                    }
                    Poll::Pending => {}
                }
            }

            return if this.upstream.is_done() && this.inner.is_none() {
                Poll::Ready(None)
            } else {
                Poll::Pending
            };
        }
    }
}

/// Extension trait providing the `flat_map_loaded` operator.
pub trait FlatMapLoadedExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Maps every loaded value to a new loading stream and forwards the most recent one.
    ///
    /// See the [module-level documentation](crate::flat_map_loaded) for the switching
    /// rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadstream_core::LoadingState;
    /// use loadstream_stream::{FlatMapLoadedExt, MaterializeExt};
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let user_ids = stream::iter(vec![LoadingState::Loaded(7)]);
    ///
    /// let profiles: Vec<_> = user_ids
    ///     .flat_map_loaded(|id| stream::iter(vec![Ok::<_, String>(format!("user-{id}"))]).into_loading_stream())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(
    ///     profiles,
    ///     vec![LoadingState::Loading, LoadingState::Loaded("user-7".to_string())]
    /// );
    /// # }
    /// ```
    fn flat_map_loaded<U, F, St>(self, f: F) -> FlatMapLoaded<Self, F, St>
    where
        F: FnMut(T) -> St,
        St: Stream<Item = LoadingState<U, E>>;
}

impl<S, T, E> FlatMapLoadedExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn flat_map_loaded<U, F, St>(self, f: F) -> FlatMapLoaded<Self, F, St>
    where
        F: FnMut(T) -> St,
        St: Stream<Item = LoadingState<U, E>>,
    {
        FlatMapLoaded::new(self, f)
    }
}
