// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-state loading streams.
//!
//! Each constructor returns a [`LoadingStream`] that emits exactly one state and then
//! completes. Handy as the inner stream of
//! [`flat_map_loaded`](crate::FlatMapLoadedExt::flat_map_loaded) and in tests.

use crate::LoadingStream;
use futures::stream::{self, StreamExt};
use loadstream_core::LoadingState;

/// A stream emitting `Loaded(value)` once.
pub fn loaded<T, E>(value: T) -> LoadingStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    single(LoadingState::Loaded(value))
}

/// A stream emitting `Loading` once.
pub fn loading<T, E>() -> LoadingStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    single(LoadingState::Loading)
}

/// A stream emitting `Failed(error)` once.
pub fn failed<T, E>(error: E) -> LoadingStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    single(LoadingState::Failed(error))
}

fn single<T, E>(state: LoadingState<T, E>) -> LoadingStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    stream::iter([state]).boxed()
}
