// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Panics if `stream` yields anything (item or end) within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        state = stream.next() => {
            panic!("Unexpected emission {state:?}, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Panics unless `stream` completes within `timeout_ms` without yielding another item.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(item)) => panic!("Expected stream to end, got {item:?}"),
        Err(_) => panic!("Expected stream to end within {timeout_ms} ms"),
    }
}

/// Returns the next item of `stream`, panicking if it ends or stays silent for
/// `timeout_ms`.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected an item, stream ended"),
        Err(_) => panic!("Expected an item within {timeout_ms} ms"),
    }
}

/// Asserts that the next item of `stream` equals `expected`.
pub async fn expect_next_state<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = T> + Unpin,
    T: Debug + PartialEq,
{
    let item = unwrap_stream(stream, 1_000).await;
    assert_eq!(item, expected);
}

/// Collects a finite stream, panicking if it does not complete within `timeout_ms`.
pub async fn collect_all<S, T>(stream: S, timeout_ms: u64) -> Vec<T>
where
    S: Stream<Item = T>,
{
    match timeout(Duration::from_millis(timeout_ms), stream.collect::<Vec<_>>()).await {
        Ok(items) => items,
        Err(_) => panic!("Expected stream to complete within {timeout_ms} ms"),
    }
}
