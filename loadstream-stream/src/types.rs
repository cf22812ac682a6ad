// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! State shared by the combining operators.
//!
//! `combine_latest` keeps one [`Slot`] per input and folds the slots into an
//! [`Outcome`]; `zip_loading` classifies queued pairs into an [`Outcome`]. Both then pass
//! the outcome through an [`EmissionGate`], which enforces the two emission rules the
//! combined stream promises: no repeated `Loading`, and one emission per failure.

use loadstream_core::LoadingState;

/// Identifies one failure emission of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Occurrence {
    input: usize,
    emission: u64,
}

impl Occurrence {
    pub(crate) const fn new(input: usize, emission: u64) -> Self {
        Self { input, emission }
    }
}

/// Result of evaluating the current input states, before deduplication.
#[derive(Debug)]
pub(crate) enum Outcome<T, E> {
    Loading,
    Loaded(T),
    Failed(Occurrence, E),
}

/// The latest state seen from one input, plus how many states it has emitted.
#[derive(Debug)]
pub(crate) struct Slot<T, E> {
    state: Option<LoadingState<T, E>>,
    emissions: u64,
}

impl<T, E> Slot<T, E> {
    pub(crate) const fn new() -> Self {
        Self {
            state: None,
            emissions: 0,
        }
    }

    pub(crate) fn update(&mut self, state: LoadingState<T, E>) {
        self.state = Some(state);
        self.emissions += 1;
    }

    pub(crate) const fn has_emitted(&self) -> bool {
        self.state.is_some()
    }

    pub(crate) fn loaded(&self) -> Option<&T> {
        self.state.as_ref().and_then(LoadingState::value)
    }

    /// The failure this slot currently holds, tagged with its occurrence.
    pub(crate) fn failure(&self, input: usize) -> Option<(Occurrence, &E)> {
        self.state
            .as_ref()
            .and_then(LoadingState::failure)
            .map(|error| (Occurrence::new(input, self.emissions), error))
    }
}

impl<T, E> Default for Slot<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// What polling one input of a combining operator produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Pending, or already finished
    Idle,
    /// A new state was stored in the input's slot
    Updated,
    /// The input finished without ever emitting
    EndedSilent,
}

/// States an operator may consume within one `poll_next` without emitting.
///
/// Once spent, the operator wakes itself and returns `Pending` so that an always-ready
/// input cannot hold the task.
pub(crate) const POLL_BUDGET: usize = 32;

/// Filters outcomes that would repeat an earlier emission.
///
/// `Loading` is suppressed right after `Loading`. A failure is suppressed if its
/// occurrence was already emitted, no matter what was emitted in between.
#[derive(Debug, Default)]
pub(crate) struct EmissionGate {
    last_was_loading: bool,
    // Per input: emission count of the last failure let through, 0 for none
    emitted_failures: Vec<u64>,
}

impl EmissionGate {
    /// Turns an outcome into the state to emit, or `None` if it must be suppressed.
    pub(crate) fn admit<T, E>(&mut self, outcome: Outcome<T, E>) -> Option<LoadingState<T, E>> {
        let state = match outcome {
            Outcome::Loading => {
                if self.last_was_loading {
                    return None;
                }
                LoadingState::Loading
            }
            Outcome::Loaded(value) => LoadingState::Loaded(value),
            Outcome::Failed(occurrence, error) => {
                if !self.record_failure(occurrence) {
                    return None;
                }
                LoadingState::Failed(error)
            }
        };

        self.last_was_loading = state.is_loading();
        Some(state)
    }

    /// Returns `false` if `occurrence` was emitted before.
    fn record_failure(&mut self, occurrence: Occurrence) -> bool {
        if self.emitted_failures.len() <= occurrence.input {
            self.emitted_failures.resize(occurrence.input + 1, 0);
        }

        let emitted = &mut self.emitted_failures[occurrence.input];
        if *emitted >= occurrence.emission {
            return false;
        }
        *emitted = occurrence.emission;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_collapses_consecutive_loading() {
        let mut gate = EmissionGate::default();

        assert_eq!(gate.admit::<i32, ()>(Outcome::Loading), Some(LoadingState::Loading));
        assert_eq!(gate.admit::<i32, ()>(Outcome::Loading), None);
        assert_eq!(gate.admit::<i32, ()>(Outcome::Loaded(1)), Some(LoadingState::Loaded(1)));
        assert_eq!(gate.admit::<i32, ()>(Outcome::Loading), Some(LoadingState::Loading));
    }

    #[test]
    fn gate_emits_each_failure_occurrence_once() {
        let mut gate = EmissionGate::default();
        let first = Occurrence::new(0, 1);
        let second = Occurrence::new(0, 2);

        assert_eq!(
            gate.admit::<i32, _>(Outcome::Failed(first, "e")),
            Some(LoadingState::Failed("e"))
        );
        assert_eq!(gate.admit::<i32, _>(Outcome::Failed(first, "e")), None);
        assert_eq!(
            gate.admit::<i32, _>(Outcome::Failed(second, "e")),
            Some(LoadingState::Failed("e"))
        );
    }

    #[test]
    fn gate_remembers_failures_across_other_emissions() {
        let mut gate = EmissionGate::default();
        let right = Occurrence::new(1, 1);
        let left = Occurrence::new(0, 2);

        assert_eq!(
            gate.admit::<i32, _>(Outcome::Failed(right, "b")),
            Some(LoadingState::Failed("b"))
        );
        assert_eq!(
            gate.admit::<i32, _>(Outcome::Failed(left, "a")),
            Some(LoadingState::Failed("a"))
        );
        assert_eq!(gate.admit::<i32, _>(Outcome::Failed(right, "b")), None);
        assert_eq!(gate.admit::<i32, &str>(Outcome::Loading), Some(LoadingState::Loading));
        assert_eq!(gate.admit::<i32, _>(Outcome::Failed(left, "a")), None);
    }

    #[test]
    fn slot_tags_failures_with_emission_count() {
        let mut slot: Slot<i32, &str> = Slot::new();
        assert!(!slot.has_emitted());

        slot.update(LoadingState::Loading);
        slot.update(LoadingState::Failed("e"));

        let (occurrence, error) = slot.failure(3).expect("slot holds a failure");
        assert_eq!(occurrence, Occurrence::new(3, 2));
        assert_eq!(*error, "e");
        assert_eq!(slot.loaded(), None);
    }
}
