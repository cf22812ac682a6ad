// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::types::{EmissionGate, Outcome, Slot, Step, POLL_BUDGET};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use loadstream_core::LoadingState;

struct Input<S, T, E> {
    stream: Pin<Box<S>>,
    done: bool,
    slot: Slot<T, E>,
}

/// Stream returned by [`combine_latest_all`](super::combine_latest_all) and
/// [`CombineLatestExt::combine_latest_with`](super::CombineLatestExt::combine_latest_with).
///
/// Emits `LoadingState<Vec<T>, E>` with one value per input, in input order.
#[must_use = "streams do nothing unless polled"]
pub struct CombineLatestAll<S, T, E> {
    inputs: Vec<Input<S, T, E>>,
    gate: EmissionGate,
    cursor: usize,
    terminated: bool,
}

// Inputs are boxed and latest values are never pinned.
impl<S, T, E> Unpin for CombineLatestAll<S, T, E> {}

impl<S, T, E> CombineLatestAll<S, T, E>
where
    S: Stream<Item = LoadingState<T, E>>,
{
    pub(crate) fn new<I>(streams: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let inputs: Vec<_> = streams
            .into_iter()
            .map(|stream| Input {
                stream: Box::pin(stream),
                done: false,
                slot: Slot::new(),
            })
            .collect();

        Self {
            terminated: inputs.is_empty(),
            inputs,
            gate: EmissionGate::default(),
            cursor: 0,
        }
    }
}

impl<S, T, E> CombineLatestAll<S, T, E>
where
    T: Clone,
    E: Clone,
{
    fn evaluate(&self) -> Option<Outcome<Vec<T>, E>> {
        if !self.inputs.iter().all(|input| input.slot.has_emitted()) {
            return None;
        }

        if let Some((occurrence, error)) = self
            .inputs
            .iter()
            .enumerate()
            .find_map(|(index, input)| input.slot.failure(index))
        {
            return Some(Outcome::Failed(occurrence, error.clone()));
        }

        let values: Option<Vec<T>> = self
            .inputs
            .iter()
            .map(|input| input.slot.loaded().cloned())
            .collect();

        Some(values.map_or(Outcome::Loading, Outcome::Loaded))
    }
}

impl<S, T, E> Stream for CombineLatestAll<S, T, E>
where
    S: Stream<Item = LoadingState<T, E>>,
    T: Clone,
    E: Clone,
{
    type Item = LoadingState<Vec<T>, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.terminated {
            return Poll::Ready(None);
        }

        let count = this.inputs.len();
        let mut budget = POLL_BUDGET;

        loop {
            let mut progressed = false;
            let start = this.cursor;

            for offset in 0..count {
                let index = (start + offset) % count;
                let input = &mut this.inputs[index];

                let step = if input.done {
                    Step::Idle
                } else {
                    match input.stream.as_mut().poll_next(cx) {
                        Poll::Ready(Some(state)) => {
                            input.slot.update(state);
                            Step::Updated
                        }
                        Poll::Ready(None) => {
                            input.done = true;
                            if input.slot.has_emitted() {
                                Step::Idle
                            } else {
                                Step::EndedSilent
                            }
                        }
                        Poll::Pending => Step::Idle,
                    }
                };

                match step {
                    Step::Updated => {
                        progressed = true;
                        this.cursor = (index + 1) % count;
                        if let Some(outcome) = this.evaluate() {
                            if let Some(state) = this.gate.admit(outcome) {
                                return Poll::Ready(Some(state));
                            }
                        }
                        budget -= 1;
                        if budget == 0 {
                            cx.waker().wake_by_ref();
                            return Poll::Pending;
                        }
                    }
                    Step::EndedSilent => {
                        debug!(
                            "combine_latest_all input {} completed without emitting",
                            index
                        );
                        this.terminated = true;
                        return Poll::Ready(None);
                    }
                    Step::Idle => {}
                }
            }

            if !progressed {
                if this.inputs.iter().all(|input| input.done) {
                    this.terminated = true;
                    return Poll::Ready(None);
                }
                return Poll::Pending;
            }
        }
    }
}
