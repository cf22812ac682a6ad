// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Failure propagation tests for `combine_latest`.

use futures::stream;
use loadstream_core::LoadingState::{Failed, Loaded, Loading};
use loadstream_stream::{combine_latest_all, CombineLatestExt};
use loadstream_test_utils::{
    assert_no_element_emitted, collect_all, expect_next_state, loading_channel,
    FailureInjectingStream, TestError,
};

#[tokio::test]
async fn test_failure_beats_loading() -> anyhow::Result<()> {
    // Arrange
    let (tx1, stream1) = loading_channel::<i32, TestError>();
    let (tx2, stream2) = loading_channel::<i32, TestError>();
    let mut combined = stream1.combine_latest(stream2);

    // Act
    tx1.send(Loading)?;
    tx2.send(Failed(TestError::Network))?;

    // Assert
    expect_next_state(&mut combined, Failed(TestError::Network)).await;

    Ok(())
}

#[tokio::test]
async fn test_failure_is_emitted_once_per_occurrence() -> anyhow::Result<()> {
    // Arrange
    let (tx1, stream1) = loading_channel::<i32, TestError>();
    let (tx2, stream2) = loading_channel::<i32, TestError>();
    let mut combined = stream1.combine_latest(stream2);

    tx1.send(Loaded(1))?;
    tx2.send(Failed(TestError::Network))?;
    expect_next_state(&mut combined, Failed(TestError::Network)).await;

    // Act: the other input keeps emitting while the failure still stands
    tx1.send(Loaded(2))?;
    tx1.send(Loaded(3))?;

    // Assert
    assert_no_element_emitted(&mut combined, 50).await;

    // A new failure from the same input is a new occurrence
    tx2.send(Failed(TestError::Network))?;
    expect_next_state(&mut combined, Failed(TestError::Network)).await;

    Ok(())
}

#[tokio::test]
async fn test_emitted_failure_is_not_repeated_after_another_failure() -> anyhow::Result<()> {
    // Arrange
    let (tx1, stream1) = loading_channel::<i32, TestError>();
    let (tx2, stream2) = loading_channel::<i32, TestError>();
    let mut combined = stream1.combine_latest(stream2);

    tx1.send(Loaded(1))?;
    tx2.send(Failed(TestError::Timeout(2)))?;
    expect_next_state(&mut combined, Failed(TestError::Timeout(2))).await;

    tx1.send(Failed(TestError::Network))?;
    expect_next_state(&mut combined, Failed(TestError::Network)).await;

    // Act: left recovers, exposing the right failure that was already emitted
    tx1.send(Loaded(2))?;

    // Assert
    assert_no_element_emitted(&mut combined, 50).await;

    Ok(())
}

#[tokio::test]
async fn test_left_failure_wins() -> anyhow::Result<()> {
    // Arrange
    let (tx1, stream1) = loading_channel::<i32, TestError>();
    let (tx2, stream2) = loading_channel::<i32, TestError>();
    let mut combined = stream1.combine_latest(stream2);

    tx2.send(Failed(TestError::Timeout(5)))?;
    tx1.send(Failed(TestError::Network))?;

    // Act & Assert
    expect_next_state(&mut combined, Failed(TestError::Network)).await;

    // Right fails again: the left failure is still the winning one and already emitted
    tx2.send(Failed(TestError::Timeout(6)))?;
    assert_no_element_emitted(&mut combined, 50).await;

    // Left recovers: the right failure now wins
    tx1.send(Loaded(1))?;
    expect_next_state(&mut combined, Failed(TestError::Timeout(6))).await;

    Ok(())
}

#[tokio::test]
async fn test_retry_after_failure_flows_through() -> anyhow::Result<()> {
    // Arrange
    let (tx1, stream1) = loading_channel::<i32, TestError>();
    let (tx2, stream2) = loading_channel::<i32, TestError>();
    let mut combined = stream1.combine_latest(stream2);

    tx1.send(Loaded(1))?;
    tx2.send(Failed(TestError::not_found("settings")))?;
    expect_next_state(&mut combined, Failed(TestError::not_found("settings"))).await;

    // Act
    tx2.send(Loading)?;
    tx2.send(Loaded(2))?;

    // Assert
    expect_next_state(&mut combined, Loading).await;
    expect_next_state(&mut combined, Loaded((1, 2))).await;

    Ok(())
}

#[tokio::test]
async fn test_combine_latest_all_reports_lowest_index_failure() -> anyhow::Result<()> {
    // Arrange
    let (tx1, stream1) = loading_channel::<i32, TestError>();
    let (tx2, stream2) = loading_channel::<i32, TestError>();
    let (tx3, stream3) = loading_channel::<i32, TestError>();
    let mut combined = combine_latest_all(vec![stream1, stream2, stream3]);

    // Act
    tx1.send(Loaded(1))?;
    tx3.send(Failed(TestError::Timeout(3)))?;
    tx2.send(Failed(TestError::Timeout(2)))?;

    // Assert
    expect_next_state(&mut combined, Failed(TestError::Timeout(2))).await;

    Ok(())
}

#[tokio::test]
async fn test_injected_failure_propagates_and_recovers() -> anyhow::Result<()> {
    // Arrange
    let users = FailureInjectingStream::new(stream::iter(vec![1, 2]), 1, TestError::Network);
    let settings = stream::iter(vec![Loaded::<_, TestError>(10)]);

    // Act
    let states = collect_all(users.combine_latest(settings), 500).await;

    // Assert
    assert_eq!(
        states,
        vec![
            Loaded((1, 10)),
            Failed(TestError::Network),
            Loaded((2, 10)),
        ]
    );

    Ok(())
}
