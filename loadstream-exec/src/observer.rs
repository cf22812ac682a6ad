// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback sinks for driven streams.

/// Receives the events of a failing stream (`Stream<Item = Result<T, E>>`).
///
/// `on_value` is called once per value. At most one of the terminal callbacks
/// (`on_failure`, `on_complete`) is called, and none after the observation was cancelled.
pub trait Observer<T, E>: Send {
    /// Called for each `Ok` item.
    fn on_value(&mut self, value: T);

    /// Called for the first `Err` item, which ends the observation.
    fn on_failure(&mut self, error: E);

    /// Called when the stream ends without an error.
    fn on_complete(&mut self);
}

/// Receives the states of a loading stream.
///
/// A loading stream has no stream-level failure: `on_failed` may be followed by more
/// states, and the only terminal callback is `on_complete`.
pub trait LoadingObserver<T, E>: Send {
    /// Called for each `Loading` state.
    fn on_loading(&mut self);

    /// Called for each `Loaded` state.
    fn on_loaded(&mut self, value: T);

    /// Called for each `Failed` state; the observation keeps running.
    fn on_failed(&mut self, error: E);

    /// Called when the stream ends.
    fn on_complete(&mut self);
}

/// An [`Observer`] assembled from three closures.
///
/// # Example
///
/// ```
/// use loadstream_exec::{FnObserver, Observer};
///
/// let mut seen = Vec::new();
/// let mut observer = FnObserver::new(
///     |value: i32| seen.push(value),
///     |_error: String| {},
///     || {},
/// );
///
/// observer.on_value(1);
/// drop(observer);
/// assert_eq!(seen, vec![1]);
/// ```
pub struct FnObserver<V, F, C> {
    on_value: V,
    on_failure: F,
    on_complete: C,
}

impl<V, F, C> FnObserver<V, F, C> {
    /// Wraps the value, failure and completion callbacks.
    pub fn new(on_value: V, on_failure: F, on_complete: C) -> Self {
        Self {
            on_value,
            on_failure,
            on_complete,
        }
    }
}

impl<T, E, V, F, C> Observer<T, E> for FnObserver<V, F, C>
where
    V: FnMut(T) + Send,
    F: FnMut(E) + Send,
    C: FnMut() + Send,
{
    fn on_value(&mut self, value: T) {
        (self.on_value)(value);
    }

    fn on_failure(&mut self, error: E) {
        (self.on_failure)(error);
    }

    fn on_complete(&mut self) {
        (self.on_complete)();
    }
}
