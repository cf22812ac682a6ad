// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod common;

use common::{snapshot, Event, Recorder};
use futures::stream;
use loadstream_core::{CancellationToken, LoadingState};
use loadstream_exec::{Completion, FnObserver, ObserveExt, ObserveLoadingExt};
use loadstream_test_utils::{loading_channel, result_channel, TestError};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_observe_delivers_values_then_completion() -> anyhow::Result<()> {
    // Arrange
    let (observer, events) = Recorder::<i32, TestError>::new();
    let source = stream::iter(vec![Ok(1), Ok(2)]);

    // Act
    let completion = source.observe(observer, CancellationToken::new()).await;

    // Assert
    assert_eq!(completion, Completion::Completed);
    assert_eq!(
        snapshot(&events),
        vec![Event::Value(1), Event::Value(2), Event::Complete]
    );

    Ok(())
}

#[tokio::test]
async fn test_observe_stops_at_first_failure() -> anyhow::Result<()> {
    // Arrange
    let (observer, events) = Recorder::<i32, TestError>::new();
    let source = stream::iter(vec![Ok(1), Err(TestError::Network), Ok(2)]);

    // Act
    let completion = source.observe(observer, CancellationToken::new()).await;

    // Assert
    assert_eq!(completion, Completion::Failed);
    assert_eq!(
        snapshot(&events),
        vec![Event::Value(1), Event::Failure(TestError::Network)]
    );

    Ok(())
}

#[tokio::test]
async fn test_observe_with_cancelled_token_calls_nothing() -> anyhow::Result<()> {
    // Arrange
    let (observer, events) = Recorder::<i32, TestError>::new();
    let token = CancellationToken::new();
    token.cancel();

    // Act
    let completion = stream::iter(vec![Ok(1)]).observe(observer, token).await;

    // Assert
    assert_eq!(completion, Completion::Cancelled);
    assert!(snapshot(&events).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_observe_cancelled_while_waiting() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = result_channel::<i32, TestError>();
    let (observer, events) = Recorder::new();
    let token = CancellationToken::new();

    let task = tokio::spawn(source.observe(observer, token.clone()));
    tx.send(Ok(1))?;
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // Act
    token.cancel();
    let completion = task.await?;
    let _ = tx.send(Ok(2));

    // Assert
    assert_eq!(completion, Completion::Cancelled);
    assert_eq!(snapshot(&events), vec![Event::Value(1)]);

    Ok(())
}

#[tokio::test]
async fn test_fn_observer_collects_values() -> anyhow::Result<()> {
    // Arrange
    let values = Arc::new(Mutex::new(Vec::new()));
    let completed = Arc::new(Mutex::new(false));
    let observer = FnObserver::new(
        {
            let values = Arc::clone(&values);
            move |value: i32| values.lock().expect("lock").push(value)
        },
        |error: TestError| panic!("unexpected failure {error}"),
        {
            let completed = Arc::clone(&completed);
            move || *completed.lock().expect("lock") = true
        },
    );

    // Act
    let completion = stream::iter(vec![Ok(3), Ok(4)])
        .observe(observer, CancellationToken::new())
        .await;

    // Assert
    assert_eq!(completion, Completion::Completed);
    assert_eq!(*values.lock().expect("lock"), vec![3, 4]);
    assert!(*completed.lock().expect("lock"));

    Ok(())
}

#[tokio::test]
async fn test_observe_loading_keeps_running_after_failure() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = loading_channel::<&str, TestError>();
    let (observer, events) = Recorder::new();

    tx.send(LoadingState::Loading)?;
    tx.send(LoadingState::Failed(TestError::Timeout(100)))?;
    tx.send(LoadingState::Loading)?;
    tx.send(LoadingState::Loaded("profile"))?;
    drop(tx);

    // Act
    let completion = source
        .observe_loading(observer, CancellationToken::new())
        .await;

    // Assert
    assert_eq!(completion, Completion::Completed);
    assert_eq!(
        snapshot(&events),
        vec![
            Event::Loading,
            Event::Failure(TestError::Timeout(100)),
            Event::Loading,
            Event::Value("profile"),
            Event::Complete,
        ]
    );

    Ok(())
}
