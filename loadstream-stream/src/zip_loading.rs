// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Positional zip of two loading streams.
//!
//! Unlike [`combine_latest`](crate::combine_latest), zip pairs the *n*-th emission of
//! the left stream with the *n*-th emission of the right stream. Emissions that have no
//! partner yet are queued per side.
//!
//! # Pairing rule
//!
//! Whenever both sides have a queued state, the oldest state of each side is classified:
//!
//! - both `Loaded` → `Loaded((left, right))`, both consumed
//! - either `Failed` → `Failed(e)`, the left failure wins when both failed; only the
//!   failing state(s) are consumed
//! - otherwise (a side is `Loading`) → `Loading`; only the `Loading` marker(s) are
//!   consumed, a queued `Loaded` on the other side waits for the next pairing
//!
//! Consecutive `Loading` emissions are collapsed. The zipped stream completes once a side
//! has completed and has nothing left to pair.
//!
//! A side is only pulled while its queue is empty, so a side that is always ready does not
//! run ahead of a pending partner.
//!
//! # Example
//!
//! ```rust
//! use loadstream_core::LoadingState;
//! use loadstream_stream::ZipLoadingExt;
//! use futures::{stream, StreamExt};
//!
//! # async fn example() {
//! let left = stream::iter(vec![LoadingState::<_, ()>::Loaded(1), LoadingState::Loaded(2)]);
//! let right = stream::iter(vec![LoadingState::Loaded(10), LoadingState::Loaded(20)]);
//!
//! let zipped: Vec<_> = left.zip_loading(right).collect().await;
//! assert_eq!(zipped, vec![LoadingState::Loaded((1, 10)), LoadingState::Loaded((2, 20))]);
//! # }
//! ```

use crate::types::{EmissionGate, Occurrence, Outcome, POLL_BUDGET};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{Fuse, Stream, StreamExt};
use loadstream_core::LoadingState;
use pin_project::pin_project;
use std::collections::VecDeque;

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Stream returned by [`zip_loading`] and [`ZipLoadingExt::zip_loading`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct ZipLoading<S1, S2, T1, T2, E> {
    #[pin]
    left: Fuse<S1>,
    #[pin]
    right: Fuse<S2>,
    queues: PairQueues<T1, T2, E>,
    gate: EmissionGate,
    terminated: bool,
}

impl<S1, S2, T1, T2, E> ZipLoading<S1, S2, T1, T2, E>
where
    S1: Stream<Item = LoadingState<T1, E>>,
    S2: Stream<Item = LoadingState<T2, E>>,
{
    pub(crate) fn new(left: S1, right: S2) -> Self {
        Self {
            left: left.fuse(),
            right: right.fuse(),
            queues: PairQueues::default(),
            gate: EmissionGate::default(),
            terminated: false,
        }
    }
}

impl<S1, S2, T1, T2, E> Stream for ZipLoading<S1, S2, T1, T2, E>
where
    S1: Stream<Item = LoadingState<T1, E>>,
    S2: Stream<Item = LoadingState<T2, E>>,
{
    type Item = LoadingState<(T1, T2), E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        let mut budget = POLL_BUDGET;

        loop {
            while let Some(outcome) = this.queues.pair() {
                if let Some(state) = this.gate.admit(outcome) {
                    return Poll::Ready(Some(state));
                }
                budget -= 1;
                if budget == 0 {
                    cx.waker().wake_by_ref();
                    return Poll::Pending;
                }
            }

            let left_exhausted = this.left.is_done() && this.queues.left.is_empty();
            let right_exhausted = this.right.is_done() && this.queues.right.is_empty();
            if left_exhausted || right_exhausted {
                let unpaired = this.queues.left.len() + this.queues.right.len();
                if unpaired > 0 {
                    debug!("zip_loading completed with {} unpaired state(s)", unpaired);
                }
                *this.terminated = true;
                return Poll::Ready(None);
            }

            let mut progressed = false;

            if this.queues.left.is_empty() {
                match this.left.as_mut().poll_next(cx) {
                    Poll::Ready(Some(state)) => {
                        this.queues.left.push_back(state);
                        progressed = true;
                    }
                    Poll::Ready(None) => progressed = true,
                    Poll::Pending => {}
                }
            }

            if this.queues.right.is_empty() {
                match this.right.as_mut().poll_next(cx) {
                    Poll::Ready(Some(state)) => {
                        this.queues.right.push_back(state);
                        progressed = true;
                    }
                    Poll::Ready(None) => progressed = true,
                    Poll::Pending => {}
                }
            }

            if !progressed {
                return Poll::Pending;
            }
        }
    }
}

/// Unconsumed states of both sides, oldest first.
struct PairQueues<T1, T2, E> {
    left: VecDeque<LoadingState<T1, E>>,
    right: VecDeque<LoadingState<T2, E>>,
    failures: u64,
}

impl<T1, T2, E> Default for PairQueues<T1, T2, E> {
    fn default() -> Self {
        Self {
            left: VecDeque::new(),
            right: VecDeque::new(),
            failures: 0,
        }
    }
}

impl<T1, T2, E> PairQueues<T1, T2, E> {
    /// Classifies the oldest pair, consuming only what the pairing rule consumes.
    fn pair(&mut self) -> Option<Outcome<(T1, T2), E>> {
        if self.left.is_empty() || self.right.is_empty() {
            return None;
        }
        let left = self.left.pop_front()?;
        let right = self.right.pop_front()?;

        let outcome = match (left, right) {
            (LoadingState::Loaded(a), LoadingState::Loaded(b)) => Outcome::Loaded((a, b)),
            (LoadingState::Failed(error), right) => {
                if !right.is_failed() {
                    self.right.push_front(right);
                }
                Outcome::Failed(self.next_failure(LEFT), error)
            }
            (left, LoadingState::Failed(error)) => {
                self.left.push_front(left);
                Outcome::Failed(self.next_failure(RIGHT), error)
            }
            (LoadingState::Loading, LoadingState::Loading) => Outcome::Loading,
            (LoadingState::Loading, right) => {
                self.right.push_front(right);
                Outcome::Loading
            }
            (left, LoadingState::Loading) => {
                self.left.push_front(left);
                Outcome::Loading
            }
        };

        Some(outcome)
    }

    fn next_failure(&mut self, side: usize) -> Occurrence {
        self.failures += 1;
        Occurrence::new(side, self.failures)
    }
}

/// Zips two loading streams positionally.
///
/// See the [module-level documentation](self) for the pairing rule.
pub fn zip_loading<S1, S2, T1, T2, E>(left: S1, right: S2) -> ZipLoading<S1, S2, T1, T2, E>
where
    S1: Stream<Item = LoadingState<T1, E>>,
    S2: Stream<Item = LoadingState<T2, E>>,
{
    ZipLoading::new(left, right)
}

/// Extension trait providing the `zip_loading` operator.
pub trait ZipLoadingExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Pairs the *n*-th state of this stream with the *n*-th state of `other`.
    ///
    /// See the [module-level documentation](crate::zip_loading) for the pairing rule.
    fn zip_loading<S2, T2>(self, other: S2) -> ZipLoading<Self, S2, T, T2, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>;
}

impl<S, T, E> ZipLoadingExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>>,
{
    fn zip_loading<S2, T2>(self, other: S2) -> ZipLoading<Self, S2, T, T2, E>
    where
        S2: Stream<Item = LoadingState<T2, E>>,
    {
        ZipLoading::new(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queues(
        left: Vec<LoadingState<i32, &'static str>>,
        right: Vec<LoadingState<i32, &'static str>>,
    ) -> PairQueues<i32, i32, &'static str> {
        PairQueues {
            left: left.into(),
            right: right.into(),
            failures: 0,
        }
    }

    #[test]
    fn loading_keeps_the_loaded_partner_queued() {
        let mut queues = queues(
            vec![LoadingState::Loading],
            vec![LoadingState::Loaded(10)],
        );

        assert!(matches!(queues.pair(), Some(Outcome::Loading)));
        assert!(queues.left.is_empty());
        assert_eq!(queues.right.front(), Some(&LoadingState::Loaded(10)));
    }

    #[test]
    fn left_failure_wins_and_both_failures_are_consumed() {
        let mut queues = queues(
            vec![LoadingState::Failed("left")],
            vec![LoadingState::Failed("right")],
        );

        assert!(matches!(queues.pair(), Some(Outcome::Failed(_, "left"))));
        assert!(queues.left.is_empty());
        assert!(queues.right.is_empty());
    }

    #[test]
    fn failure_consumes_only_the_failing_side() {
        let mut queues = queues(
            vec![LoadingState::Loaded(1)],
            vec![LoadingState::Failed("right")],
        );

        assert!(matches!(queues.pair(), Some(Outcome::Failed(_, "right"))));
        assert_eq!(queues.left.front(), Some(&LoadingState::Loaded(1)));
        assert!(queues.right.is_empty());
    }
}
