// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-state transformations of loading streams.

use futures::{Stream, StreamExt};
use loadstream_core::LoadingState;

/// Extension trait providing the value-level transformations of loading streams.
///
/// Every operator here is pure and synchronous: exactly one output state per input
/// state, in the same order.
pub trait MapLoadedExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Transforms `Loaded` payloads; `Loading` and `Failed` pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadstream_core::LoadingState;
    /// use loadstream_stream::MapLoadedExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let states = stream::iter(vec![
    ///     LoadingState::Loading,
    ///     LoadingState::Loaded(2),
    ///     LoadingState::Failed("boom"),
    /// ]);
    ///
    /// let doubled: Vec<_> = states.map_loaded(|x| x * 2).collect().await;
    /// assert_eq!(
    ///     doubled,
    ///     vec![LoadingState::Loading, LoadingState::Loaded(4), LoadingState::Failed("boom")]
    /// );
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`FlatMapLoadedExt::flat_map_loaded`](crate::FlatMapLoadedExt::flat_map_loaded) - Switch to a new loading stream per value
    fn map_loaded<U, F>(self, f: F) -> impl Stream<Item = LoadingState<U, E>>
    where
        F: FnMut(T) -> U;

    /// Transforms `Failed` payloads; `Loading` and `Loaded` pass through unchanged.
    fn map_failure<E2, F>(self, f: F) -> impl Stream<Item = LoadingState<T, E2>>
    where
        F: FnMut(E) -> E2;

    /// Wraps every loaded value in `Some`.
    fn to_optional(self) -> impl Stream<Item = LoadingState<Option<T>, E>>;
}

impl<S, T, E> MapLoadedExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn map_loaded<U, F>(self, mut f: F) -> impl Stream<Item = LoadingState<U, E>>
    where
        F: FnMut(T) -> U,
    {
        self.map(move |state| state.map(&mut f))
    }

    fn map_failure<E2, F>(self, mut f: F) -> impl Stream<Item = LoadingState<T, E2>>
    where
        F: FnMut(E) -> E2,
    {
        self.map(move |state| state.map_failure(&mut f))
    }

    fn to_optional(self) -> impl Stream<Item = LoadingState<Option<T>, E>> {
        self.map(LoadingState::to_optional)
    }
}

/// Extension trait for loading streams of optional values.
pub trait ReplaceNoneExt<T, E>: Stream<Item = LoadingState<Option<T>, E>> + Sized {
    /// Turns `Loaded(None)` into `Failed(error)` and unwraps `Loaded(Some(v))`.
    ///
    /// `Loading` and `Failed` pass through unchanged. The stream keeps running after a
    /// replaced `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loadstream_core::LoadingState;
    /// use loadstream_stream::ReplaceNoneExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let states = stream::iter(vec![LoadingState::Loaded(Some(1)), LoadingState::Loaded(None)]);
    ///
    /// let replaced: Vec<_> = states.replace_none_with("missing").collect().await;
    /// assert_eq!(replaced, vec![LoadingState::Loaded(1), LoadingState::Failed("missing")]);
    /// # }
    /// ```
    fn replace_none_with(self, error: E) -> impl Stream<Item = LoadingState<T, E>>
    where
        E: Clone;
}

impl<S, T, E> ReplaceNoneExt<T, E> for S
where
    S: Stream<Item = LoadingState<Option<T>, E>>,
{
    fn replace_none_with(self, error: E) -> impl Stream<Item = LoadingState<T, E>>
    where
        E: Clone,
    {
        self.map(move |state| state.replace_none_with(error.clone()))
    }
}
