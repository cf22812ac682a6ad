// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the loadstream library.
//!
//! Loading streams never invent failures of their own: every `Failed` payload is the
//! caller's error type. The types here only describe the few places where the library
//! itself has to say no.
//!
//! # Examples
//!
//! ```
//! use loadstream_core::{LoadingError, LoadingState};
//!
//! let pending: LoadingState<u8, String> = LoadingState::Loading;
//! assert!(matches!(pending.into_result(), Err(LoadingError::Loading)));
//! ```

/// Error returned when a [`LoadingState`](crate::LoadingState) is asked for its value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadingError<E> {
    /// The value has not finished loading yet
    #[error("value is still loading")]
    Loading,

    /// Loading failed with the caller's error
    #[error("loading failed: {0}")]
    Failed(E),
}

impl<E> LoadingError<E> {
    /// Returns the caller's failure, if this is `Failed`.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Loading => None,
            Self::Failed(error) => Some(error),
        }
    }
}

/// Errors reported by [`Subject`](crate::Subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items or subscribers.
    #[error("Subject is closed")]
    Closed,
}
