// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for loading streams.
//!
//! - [`LoadingState`]: the tri-state value (`Loading`, `Loaded`, `Failed`) carried by
//!   every loading stream
//! - [`LoadingError`]: returned when a state is asked for a value it does not have
//! - [`Subject`]: hot multicast entry point for pushing items into a pipeline
//! - [`CancellationToken`]: shared cancellation flag used by subscriptions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod cancellation_token;
pub mod error;
pub mod loading_state;
pub mod subject;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{LoadingError, SubjectError};
pub use self::loading_state::LoadingState;
pub use self::subject::{Subject, SubjectStream};
