// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest over loading streams.
//!
//! The combined stream re-evaluates every time any input emits, using the most recent
//! state of every other input.
//!
//! # Merge rule
//!
//! Evaluated over the latest state of each input, in input order:
//!
//! 1. If any input is `Failed(e)`, emit `Failed(e)` of the **first** failing input
//! 2. Else if every input is `Loaded`, emit `Loaded` of the tuple of values
//! 3. Else (something is still loading) emit `Loading`
//!
//! # Behavior
//!
//! - Nothing is emitted until every input has emitted at least once
//! - Consecutive `Loading` emissions are collapsed into one
//! - A failure is emitted once per occurrence; other inputs emitting while the same
//!   failed state is still the winning one do not repeat it
//! - Failures never terminate the stream: a later upstream retry flows through
//! - Completes when every input has completed, or as soon as an input completes
//!   without ever emitting
//! - Inputs are polled round-robin, so an input that is always ready cannot starve the
//!   others; a poll that consumes many states without emitting yields back to the
//!   executor
//!
//! # Example
//!
//! ```rust
//! use loadstream_core::LoadingState;
//! use loadstream_stream::CombineLatestExt;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let (user_tx, user) = futures::channel::mpsc::unbounded::<LoadingState<&str, String>>();
//! let (count_tx, count) = futures::channel::mpsc::unbounded::<LoadingState<u32, String>>();
//!
//! let mut combined = user.combine_latest(count);
//!
//! user_tx.unbounded_send(LoadingState::Loaded("alice")).unwrap();
//! count_tx.unbounded_send(LoadingState::Loading).unwrap();
//! assert_eq!(combined.next().await, Some(LoadingState::Loading));
//!
//! count_tx.unbounded_send(LoadingState::Loaded(3)).unwrap();
//! assert_eq!(combined.next().await, Some(LoadingState::Loaded(("alice", 3))));
//! # }
//! ```

#[macro_use]
mod implementation;
mod all;
mod tuple;

pub use all::CombineLatestAll;
pub use tuple::{CombineLatest, CombineLatest3, CombineLatest4};

use crate::LoadingStream;
use futures::{Stream, StreamExt};
use loadstream_core::LoadingState;

/// Combines the latest states of two loading streams.
///
/// See the [module-level documentation](self) for the merge rule.
pub fn combine_latest<S1, S2, T1, T2, E>(first: S1, second: S2) -> CombineLatest<S1, S2, T1, T2, E>
where
    S1: Stream<Item = LoadingState<T1, E>>,
    S2: Stream<Item = LoadingState<T2, E>>,
{
    CombineLatest::new(first, second)
}

/// Combines the latest states of three loading streams.
pub fn combine_latest3<S1, S2, S3, T1, T2, T3, E>(
    first: S1,
    second: S2,
    third: S3,
) -> CombineLatest3<S1, S2, S3, T1, T2, T3, E>
where
    S1: Stream<Item = LoadingState<T1, E>>,
    S2: Stream<Item = LoadingState<T2, E>>,
    S3: Stream<Item = LoadingState<T3, E>>,
{
    CombineLatest3::new(first, second, third)
}

/// Combines the latest states of four loading streams.
pub fn combine_latest4<S1, S2, S3, S4, T1, T2, T3, T4, E>(
    first: S1,
    second: S2,
    third: S3,
    fourth: S4,
) -> CombineLatest4<S1, S2, S3, S4, T1, T2, T3, T4, E>
where
    S1: Stream<Item = LoadingState<T1, E>>,
    S2: Stream<Item = LoadingState<T2, E>>,
    S3: Stream<Item = LoadingState<T3, E>>,
    S4: Stream<Item = LoadingState<T4, E>>,
{
    CombineLatest4::new(first, second, third, fourth)
}

/// Combines the latest states of any number of loading streams of the same type.
///
/// Emits `LoadingState<Vec<T>, E>` with values in input order. An empty input set
/// completes immediately.
pub fn combine_latest_all<I, S, T, E>(streams: I) -> CombineLatestAll<S, T, E>
where
    I: IntoIterator<Item = S>,
    S: Stream<Item = LoadingState<T, E>>,
{
    CombineLatestAll::new(streams)
}

/// Extension trait providing combine-latest operators on loading streams.
pub trait CombineLatestExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Combines this stream with `other`, emitting `LoadingState<(T, T2), E>`.
    ///
    /// See the [module-level documentation](crate::combine_latest) for the merge rule.
    fn combine_latest<S2, T2>(self, other: S2) -> CombineLatest<Self, S2, T, T2, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>;

    /// Combines this stream with two others, emitting `LoadingState<(T, T2, T3), E>`.
    fn combine_latest3<S2, T2, S3, T3>(
        self,
        second: S2,
        third: S3,
    ) -> CombineLatest3<Self, S2, S3, T, T2, T3, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>,
        S3: Stream<Item = LoadingState<T3, E>>;

    /// Combines this stream with three others, emitting `LoadingState<(T, T2, T3, T4), E>`.
    fn combine_latest4<S2, T2, S3, T3, S4, T4>(
        self,
        second: S2,
        third: S3,
        fourth: S4,
    ) -> CombineLatest4<Self, S2, S3, S4, T, T2, T3, T4, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>,
        S3: Stream<Item = LoadingState<T3, E>>,
        S4: Stream<Item = LoadingState<T4, E>>;

    /// Combines this stream with any number of streams carrying the same value type.
    ///
    /// This stream is input `0`; `others` follow in iteration order.
    fn combine_latest_with<I, IS>(self, others: I) -> CombineLatestAll<LoadingStream<T, E>, T, E>
    where
        Self: Send + 'static,
        I: IntoIterator<Item = IS>,
        IS: Stream<Item = LoadingState<T, E>> + Send + 'static;
}

impl<S, T, E> CombineLatestExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn combine_latest<S2, T2>(self, other: S2) -> CombineLatest<Self, S2, T, T2, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>,
    {
        CombineLatest::new(self, other)
    }

    fn combine_latest3<S2, T2, S3, T3>(
        self,
        second: S2,
        third: S3,
    ) -> CombineLatest3<Self, S2, S3, T, T2, T3, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>,
        S3: Stream<Item = LoadingState<T3, E>>,
    {
        CombineLatest3::new(self, second, third)
    }

    fn combine_latest4<S2, T2, S3, T3, S4, T4>(
        self,
        second: S2,
        third: S3,
        fourth: S4,
    ) -> CombineLatest4<Self, S2, S3, S4, T, T2, T3, T4, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>,
        S3: Stream<Item = LoadingState<T3, E>>,
        S4: Stream<Item = LoadingState<T4, E>>,
    {
        CombineLatest4::new(self, second, third, fourth)
    }

    fn combine_latest_with<I, IS>(self, others: I) -> CombineLatestAll<LoadingStream<T, E>, T, E>
    where
        Self: Send + 'static,
        I: IntoIterator<Item = IS>,
        IS: Stream<Item = LoadingState<T, E>> + Send + 'static,
    {
        let mut streams: Vec<LoadingStream<T, E>> = vec![self.boxed()];
        streams.extend(others.into_iter().map(StreamExt::boxed));
        CombineLatestAll::new(streams)
    }
}
