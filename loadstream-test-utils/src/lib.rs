// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the loadstream workspace.
//!
//! This crate provides channels, assertion helpers and an error fixture for testing
//! loading-stream operators. It is designed for use in development and testing only,
//! not for production code.
//!
//! # Architecture
//!
//! Operators are consuming stream extensions (they take `self`), while tests need to push
//! states imperatively. The channels here split the two sides: the sender stays with the
//! test, the receiving stream is handed to the operator under test.
//!
//! # Examples
//!
//! ## Driving an operator step by step
//!
//! ```rust
//! use loadstream_core::LoadingState;
//! use loadstream_test_utils::{loading_channel, unwrap_stream, TestError};
//!
//! # async fn example() {
//! let (tx, mut stream) = loading_channel::<i32, TestError>();
//!
//! tx.send(LoadingState::Loaded(1)).unwrap();
//! assert_eq!(unwrap_stream(&mut stream, 100).await, LoadingState::Loaded(1));
//! # }
//! ```
//!
//! ## Asserting silence
//!
//! ```rust
//! use loadstream_test_utils::assert_no_element_emitted;
//! use futures::stream;
//!
//! # async fn example() {
//! let mut pending = stream::pending::<i32>();
//! assert_no_element_emitted(&mut pending, 10).await;
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `error` - `TestError` fixture
//! - `failure_injection` - `FailureInjectingStream` wrapper
//! - `helpers` - Assertion and utility functions

pub mod error;
pub mod failure_injection;
pub mod helpers;

use loadstream_core::LoadingState;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error::TestError;
pub use failure_injection::FailureInjectingStream;
pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_all, expect_next_state, unwrap_stream,
};

/// Creates a channel whose receiving side is a loading stream.
///
/// Dropping the sender completes the stream.
///
/// # Example
///
/// ```rust
/// use loadstream_core::LoadingState;
/// use loadstream_test_utils::{loading_channel, TestError};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = loading_channel::<&str, TestError>();
///
/// tx.send(LoadingState::Loading).unwrap();
/// drop(tx);
///
/// assert_eq!(stream.next().await, Some(LoadingState::Loading));
/// assert_eq!(stream.next().await, None);
/// # }
/// ```
#[must_use]
pub fn loading_channel<T, E>() -> (
    mpsc::UnboundedSender<LoadingState<T, E>>,
    UnboundedReceiverStream<LoadingState<T, E>>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}

/// Creates a channel whose receiving side is a plain failing stream of `Result<T, E>`.
///
/// Feeds the boundary operators that lift `Result` streams into loading streams.
#[must_use]
pub fn result_channel<T, E>() -> (
    mpsc::UnboundedSender<Result<T, E>>,
    UnboundedReceiverStream<Result<T, E>>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
