// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Generates a fixed-arity combine-latest stream over heterogeneous inputs.
///
/// Every arity shares the same polling loop and merge rule and differs only in the
/// number of inputs, so the struct and its `Stream` impl are stamped out per arity.
macro_rules! define_combine_latest {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $index:tt => $stream:ident : $S:ident, $T:ident, $value:ident; )+
        }
    ) => {
        $(#[$meta])*
        #[pin_project]
        #[must_use = "streams do nothing unless polled"]
        pub struct $name<$($S,)+ $($T,)+ E> {
            $( #[pin] $stream: Fuse<$S>, )+
            slots: ($(Slot<$T, E>,)+),
            gate: EmissionGate,
            cursor: usize,
            terminated: bool,
        }

        impl<$($S,)+ $($T,)+ E> $name<$($S,)+ $($T,)+ E>
        where
            $( $S: Stream<Item = LoadingState<$T, E>>, )+
        {
            pub(crate) fn new($( $stream: $S ),+) -> Self {
                Self {
                    $( $stream: $stream.fuse(), )+
                    slots: ($(Slot::<$T, E>::new(),)+),
                    gate: EmissionGate::default(),
                    cursor: 0,
                    terminated: false,
                }
            }
        }

        impl<$($S,)+ $($T,)+ E> $name<$($S,)+ $($T,)+ E>
        where
            $( $T: Clone, )+
            E: Clone,
        {
            /// Applies the merge rule to the latest state of every input.
            ///
            /// `None` until every input has emitted at least once.
            fn evaluate(slots: &($(Slot<$T, E>,)+)) -> Option<Outcome<($($T,)+), E>> {
                if !($( slots.$index.has_emitted() )&&+) {
                    return None;
                }

                $(
                    if let Some((occurrence, error)) = slots.$index.failure($index) {
                        return Some(Outcome::Failed(occurrence, error.clone()));
                    }
                )+

                if let ($( Some($value), )+) = ($( slots.$index.loaded(), )+) {
                    return Some(Outcome::Loaded(($( $value.clone(), )+)));
                }

                Some(Outcome::Loading)
            }
        }

        impl<$($S,)+ $($T,)+ E> Stream for $name<$($S,)+ $($T,)+ E>
        where
            $( $S: Stream<Item = LoadingState<$T, E>>, $T: Clone, )+
            E: Clone,
        {
            type Item = LoadingState<($($T,)+), E>;

            fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
                const INPUTS: usize = [$($index),+].len();

                let mut this = self.project();

                if *this.terminated {
                    return Poll::Ready(None);
                }

                let mut budget = POLL_BUDGET;

                loop {
                    let mut progressed = false;
                    let start = *this.cursor;

                    for offset in 0..INPUTS {
                        let index = (start + offset) % INPUTS;

                        let step = match index {
                            $(
                                $index => {
                                    if this.$stream.is_done() {
                                        Step::Idle
                                    } else {
                                        match this.$stream.as_mut().poll_next(cx) {
                                            Poll::Ready(Some(state)) => {
                                                this.slots.$index.update(state);
                                                Step::Updated
                                            }
                                            Poll::Ready(None) if !this.slots.$index.has_emitted() => {
                                                Step::EndedSilent
                                            }
                                            Poll::Ready(None) | Poll::Pending => Step::Idle,
                                        }
                                    }
                                }
                            )+
                            _ => Step::Idle,
                        };

                        match step {
                            Step::Updated => {
                                progressed = true;
                                *this.cursor = (index + 1) % INPUTS;
                                if let Some(outcome) = Self::evaluate(this.slots) {
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
                                debug!("combine_latest input {} completed without emitting", index);
                                *this.terminated = true;
                                return Poll::Ready(None);
                            }
                            Step::Idle => {}
                        }
                    }

                    if !progressed {
                        return if $( this.$stream.is_done() )&&+ {
                            *this.terminated = true;
                            Poll::Ready(None)
                        } else {
                            Poll::Pending
                        };
                    }
                }
            }
        }
    };
}
