// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Projections of a loading stream onto one of its aspects.
//!
//! None of these streams ever fail: `Failed` states are either dropped or projected as
//! plain values, and every projection ends exactly when its source ends.

use core::future::ready;
use futures::{Stream, StreamExt};
use loadstream_core::LoadingState;

/// Extension trait providing the extraction projections.
pub trait ExtractExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Emits the payload of every `Loaded` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadstream_core::LoadingState;
    /// use loadstream_stream::ExtractExt;
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
    /// let values: Vec<_> = states.values().collect().await;
    /// assert_eq!(values, vec![1, 2]);
    /// # }
    /// ```
    fn values(self) -> impl Stream<Item = T>;

    /// Emits `()` for every `Loaded` state, discarding the payload.
    fn loaded(self) -> impl Stream<Item = ()>;

    /// Emits the payload of every `Failed` state.
    fn failures(self) -> impl Stream<Item = E>;

    /// Emits `true` for every `Loading` state and `false` for every other state.
    fn is_loading(self) -> impl Stream<Item = bool>;
}

impl<S, T, E> ExtractExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn values(self) -> impl Stream<Item = T> {
        self.filter_map(|state| ready(state.into_value()))
    }

    fn loaded(self) -> impl Stream<Item = ()> {
        self.filter_map(|state| ready(state.is_loaded().then_some(())))
    }

    fn failures(self) -> impl Stream<Item = E> {
        self.filter_map(|state| ready(state.into_failure()))
    }

    fn is_loading(self) -> impl Stream<Item = bool> {
        self.map(|state| state.is_loading())
    }
}
