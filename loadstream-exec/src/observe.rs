// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::observer::{LoadingObserver, Observer};
use async_trait::async_trait;
use core::ops::ControlFlow;
use core::pin::pin;
use futures::future::{select, Either};
use futures::stream::{Stream, StreamExt};
use loadstream_core::{CancellationToken, LoadingState};

#[cfg(feature = "runtime-tokio")]
use crate::subscription::Subscription;

/// How an observation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    /// The stream ended normally.
    Completed,
    /// The stream terminated with a failure.
    Failed,
    /// The cancellation token fired first.
    Cancelled,
}

/// Pulls `stream` until it ends, `on_item` breaks, or `token` is cancelled.
///
/// Cancellation is checked before every item, so no item is handed out once the token
/// has fired.
async fn drive<S, I, H>(stream: S, token: &CancellationToken, mut on_item: H) -> Completion
where
    S: Stream<Item = I>,
    H: FnMut(I) -> ControlFlow<Completion>,
{
    let mut stream = pin!(stream);

    loop {
        let next = {
            let cancelled = pin!(token.cancelled());
            match select(cancelled, stream.next()).await {
                Either::Left(((), _)) => None,
                Either::Right((item, _)) => Some(item),
            }
        };

        let Some(item) = next else {
            debug!("observation cancelled");
            return Completion::Cancelled;
        };

        if token.is_cancelled() {
            debug!("observation cancelled");
            return Completion::Cancelled;
        }

        match item {
            Some(item) => {
                if let ControlFlow::Break(completion) = on_item(item) {
                    return completion;
                }
            }
            None => return Completion::Completed,
        }
    }
}

/// Extension trait for driving a failing stream into an [`Observer`].
#[async_trait]
pub trait ObserveExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// Drives the stream to its end on the current task.
    ///
    /// Every `Ok(v)` goes to [`Observer::on_value`]. The first `Err(e)` goes to
    /// [`Observer::on_failure`] and ends the observation; a normal end calls
    /// [`Observer::on_complete`]. Once `token` is cancelled the observer is not called
    /// again and [`Completion::Cancelled`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use loadstream_core::CancellationToken;
    /// use loadstream_exec::{Completion, FnObserver, ObserveExt};
    /// use futures::stream;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let observer = FnObserver::new(|_: i32| {}, |_: String| {}, || {});
    ///
    /// let completion = stream::iter(vec![Ok(1), Ok(2)])
    ///     .observe(observer, CancellationToken::new())
    ///     .await;
    ///
    /// assert_eq!(completion, Completion::Completed);
    /// # }
    /// ```
    async fn observe<O>(self, observer: O, token: CancellationToken) -> Completion
    where
        O: Observer<T, E> + 'static;

    /// Spawns [`observe`](ObserveExt::observe) on the tokio runtime.
    ///
    /// The returned [`Subscription`] cancels the observation; dropping it detaches the
    /// task instead.
    #[cfg(feature = "runtime-tokio")]
    fn subscribe<O>(self, observer: O) -> Subscription
    where
        O: Observer<T, E> + 'static;
}

#[async_trait]
impl<S, T, E> ObserveExt<T, E> for S
where
    S: Stream<Item = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    async fn observe<O>(self, mut observer: O, token: CancellationToken) -> Completion
    where
        O: Observer<T, E> + 'static,
    {
        let completion = drive(self, &token, |item| match item {
            Ok(value) => {
                observer.on_value(value);
                ControlFlow::Continue(())
            }
            Err(error) => {
                observer.on_failure(error);
                ControlFlow::Break(Completion::Failed)
            }
        })
        .await;

        if completion == Completion::Completed {
            observer.on_complete();
        }
        completion
    }

    #[cfg(feature = "runtime-tokio")]
    fn subscribe<O>(self, observer: O) -> Subscription
    where
        O: Observer<T, E> + 'static,
    {
        let token = CancellationToken::new();
        let handle = tokio::spawn(self.observe(observer, token.clone()));
        Subscription::new(token, handle)
    }
}

/// Extension trait for driving a loading stream into a [`LoadingObserver`].
#[async_trait]
pub trait ObserveLoadingExt<T, E>: Stream<Item = LoadingState<T, E>> + Sized {
    /// Drives the loading stream to its end on the current task.
    ///
    /// `Failed` states are delivered through [`LoadingObserver::on_failed`] and do not
    /// end the observation, so the result is never [`Completion::Failed`].
    async fn observe_loading<O>(self, observer: O, token: CancellationToken) -> Completion
    where
        O: LoadingObserver<T, E> + 'static;

    /// Spawns [`observe_loading`](ObserveLoadingExt::observe_loading) on the tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    fn subscribe_loading<O>(self, observer: O) -> Subscription
    where
        O: LoadingObserver<T, E> + 'static;
}

#[async_trait]
impl<S, T, E> ObserveLoadingExt<T, E> for S
where
    S: Stream<Item = LoadingState<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    async fn observe_loading<O>(self, mut observer: O, token: CancellationToken) -> Completion
    where
        O: LoadingObserver<T, E> + 'static,
    {
        let completion = drive(self, &token, |state| {
            match state {
                LoadingState::Loading => observer.on_loading(),
                LoadingState::Loaded(value) => observer.on_loaded(value),
                LoadingState::Failed(error) => observer.on_failed(error),
            }
            ControlFlow::Continue(())
        })
        .await;

        if completion == Completion::Completed {
            observer.on_complete();
        }
        completion
    }

    #[cfg(feature = "runtime-tokio")]
    fn subscribe_loading<O>(self, observer: O) -> Subscription
    where
        O: LoadingObserver<T, E> + 'static,
    {
        let token = CancellationToken::new();
        let handle = tokio::spawn(self.observe_loading(observer, token.clone()));
        Subscription::new(token, handle)
    }
}
