// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use loadstream::prelude::*;
use loadstream::{Completion, FnObserver, LoadingObserver};
use loadstream_test_utils::{
    assert_no_element_emitted, expect_next_state, loading_channel, TestError,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

fn fetch_profile(id: u32) -> LoadingStream<String, TestError> {
    let result = if id == 0 {
        Err(TestError::not_found("user 0"))
    } else {
        Ok(format!("user-{id}"))
    };
    stream::iter(vec![result]).into_loading_stream()
}

/// Forwards every callback into a channel; `None` marks completion.
struct Forward<T, E>(mpsc::UnboundedSender<Option<LoadingState<T, E>>>);

impl<T: Send, E: Send> LoadingObserver<T, E> for Forward<T, E> {
    fn on_loading(&mut self) {
        let _ = self.0.send(Some(LoadingState::Loading));
    }

    fn on_loaded(&mut self, value: T) {
        let _ = self.0.send(Some(LoadingState::Loaded(value)));
    }

    fn on_failed(&mut self, error: E) {
        let _ = self.0.send(Some(LoadingState::Failed(error)));
    }

    fn on_complete(&mut self) {
        let _ = self.0.send(None);
    }
}

async fn next_event<T, E>(
    rx: &mut mpsc::UnboundedReceiver<Option<LoadingState<T, E>>>,
) -> Option<LoadingState<T, E>> {
    tokio::time::timeout(Duration::from_millis(1_000), rx.recv())
        .await
        .expect("observer event within 1000 ms")
        .expect("observer still alive")
}

#[tokio::test]
async fn test_screen_pipeline_loads_fails_and_recovers() -> anyhow::Result<()> {
    // Arrange
    let user_ids = Subject::<LoadingState<u32, TestError>>::new();
    let (settings_tx, settings) = loading_channel::<&'static str, TestError>();
    let mut screen = Box::pin(
        user_ids
            .subscribe()?
            .flat_map_loaded(fetch_profile)
            .combine_latest(settings)
            .map_loaded(|(profile, theme)| format!("{profile}/{theme}")),
    );

    // Act & Assert
    settings_tx.send(LoadingState::Loaded("dark"))?;
    user_ids.send(LoadingState::Loaded(1))?;
    expect_next_state(&mut screen, LoadingState::Loaded("user-1/dark".to_string())).await;

    user_ids.send(LoadingState::Loaded(0))?;
    expect_next_state(&mut screen, LoadingState::Loading).await;
    expect_next_state(
        &mut screen,
        LoadingState::Failed(TestError::not_found("user 0")),
    )
    .await;

    // The failure is still current, but it is not reported twice
    settings_tx.send(LoadingState::Loaded("light"))?;
    assert_no_element_emitted(&mut screen, 50).await;

    user_ids.send(LoadingState::Loaded(2))?;
    expect_next_state(&mut screen, LoadingState::Loading).await;
    expect_next_state(&mut screen, LoadingState::Loaded("user-2/light".to_string())).await;

    Ok(())
}

#[tokio::test]
async fn test_subscribe_loading_delivers_pipeline_output() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<LoadingState<i32, TestError>>::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let subscription = subject
        .subscribe()?
        .distinct_loading()
        .map_loaded(|v| v * 2)
        .subscribe_loading(Forward(tx));

    // Act
    subject.send(LoadingState::Loading)?;
    subject.send(LoadingState::Loading)?;
    subject.send(LoadingState::Loaded(2))?;
    subject.send(LoadingState::Failed(TestError::Network))?;
    subject.send(LoadingState::Loaded(3))?;
    subject.close();

    // Assert
    assert_eq!(subscription.join().await?, Completion::Completed);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    assert_eq!(
        events,
        vec![
            Some(LoadingState::Loading),
            Some(LoadingState::Loaded(4)),
            Some(LoadingState::Failed(TestError::Network)),
            Some(LoadingState::Loaded(6)),
            None,
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_cancelled_subscription_stops_delivery() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<LoadingState<i32, TestError>>::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let subscription = subject.subscribe()?.subscribe_loading(Forward(tx));

    subject.send(LoadingState::Loaded(1))?;
    assert_eq!(next_event(&mut rx).await, Some(LoadingState::Loaded(1)));

    // Act
    subscription.cancel();
    let _ = subject.send(LoadingState::Loaded(2));

    // Assert
    assert_eq!(subscription.join().await?, Completion::Cancelled);
    assert_eq!(rx.recv().await, None);

    Ok(())
}

#[tokio::test]
async fn test_observe_dematerialized_pipeline_stops_at_failure() -> anyhow::Result<()> {
    // Arrange
    let values = Arc::new(Mutex::new(Vec::new()));
    let failures = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let values = Arc::clone(&values);
        let failures = Arc::clone(&failures);
        FnObserver::new(
            move |value: i32| values.lock().expect("values lock").push(value),
            move |error: TestError| failures.lock().expect("failures lock").push(error),
            || panic!("a failed stream must not complete"),
        )
    };
    let states = stream::iter(vec![
        LoadingState::Loading,
        LoadingState::Loaded(1),
        LoadingState::Failed(TestError::Timeout(100)),
        LoadingState::Loaded(2),
    ]);

    // Act
    let completion = states
        .dematerialize()
        .observe(observer, CancellationToken::new())
        .await;

    // Assert
    assert_eq!(completion, Completion::Failed);
    assert_eq!(*values.lock().expect("values lock"), vec![1]);
    assert_eq!(
        *failures.lock().expect("failures lock"),
        vec![TestError::Timeout(100)]
    );

    Ok(())
}
