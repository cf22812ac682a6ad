// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::LoadingError;

/// The state of a value that is fetched asynchronously.
///
/// A `LoadingState` is exactly one of "still loading", "loaded with a value" or
/// "failed with an error". Loading streams carry their failures as `Failed` values
/// instead of terminating, so failures can be combined, mapped and recovered like
/// any other item.
///
/// # Examples
///
/// ```
/// use loadstream_core::LoadingState;
///
/// let state: LoadingState<i32, String> = LoadingState::Loaded(21);
/// assert_eq!(state.map(|v| v * 2), LoadingState::Loaded(42));
///
/// let pending: LoadingState<i32, String> = LoadingState::default();
/// assert!(pending.is_loading());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LoadingState<T, E> {
    /// No value yet
    #[default]
    Loading,
    /// The value finished loading
    Loaded(T),
    /// Loading failed
    Failed(E),
}

impl<T, E> LoadingState<T, E> {
    /// Returns `true` if this is `Loading`.
    pub const fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    /// Returns `true` if this is `Loaded`.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    /// Returns `true` if this is `Failed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, LoadingState::Failed(_))
    }

    /// Borrows the loaded value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the failure, if any.
    pub const fn failure(&self) -> Option<&E> {
        match self {
            LoadingState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Converts into `Option<T>`, discarding loading and failure states.
    pub fn into_value(self) -> Option<T> {
        match self {
            LoadingState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into `Option<E>`, discarding loading and loaded states.
    pub fn into_failure(self) -> Option<E> {
        match self {
            LoadingState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Converts from `&LoadingState<T, E>` to `LoadingState<&T, &E>`.
    pub const fn as_ref(&self) -> LoadingState<&T, &E> {
        match self {
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Loaded(value) => LoadingState::Loaded(value),
            LoadingState::Failed(error) => LoadingState::Failed(error),
        }
    }

    /// Maps the loaded value, leaving `Loading` and `Failed` untouched.
    pub fn map<U, F>(self, f: F) -> LoadingState<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Loaded(value) => LoadingState::Loaded(f(value)),
            LoadingState::Failed(error) => LoadingState::Failed(error),
        }
    }

    /// Maps the failure, leaving `Loading` and `Loaded` untouched.
    pub fn map_failure<F2, F>(self, f: F) -> LoadingState<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Loaded(value) => LoadingState::Loaded(value),
            LoadingState::Failed(error) => LoadingState::Failed(f(error)),
        }
    }

    /// Chains a computation that may itself be loading or failed.
    pub fn and_then<U, F>(self, f: F) -> LoadingState<U, E>
    where
        F: FnOnce(T) -> LoadingState<U, E>,
    {
        match self {
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Loaded(value) => f(value),
            LoadingState::Failed(error) => LoadingState::Failed(error),
        }
    }

    /// Widens `Loaded(v)` into `Loaded(Some(v))`.
    pub fn to_optional(self) -> LoadingState<Option<T>, E> {
        self.map(Some)
    }

    /// Converts into a `Result`, reporting `Loading` as [`LoadingError::Loading`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadingError::Loading`] for `Loading` and [`LoadingError::Failed`]
    /// carrying the failure for `Failed`.
    pub fn into_result(self) -> Result<T, LoadingError<E>> {
        match self {
            LoadingState::Loading => Err(LoadingError::Loading),
            LoadingState::Loaded(value) => Ok(value),
            LoadingState::Failed(error) => Err(LoadingError::Failed(error)),
        }
    }
}

impl<T, E> LoadingState<Option<T>, E> {
    /// Treats a loaded `None` as a failure.
    ///
    /// `Loaded(None)` becomes `Failed(error)`, `Loaded(Some(v))` becomes `Loaded(v)`.
    pub fn replace_none_with(self, error: E) -> LoadingState<T, E> {
        match self {
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Loaded(Some(value)) => LoadingState::Loaded(value),
            LoadingState::Loaded(None) => LoadingState::Failed(error),
            LoadingState::Failed(error) => LoadingState::Failed(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for LoadingState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadingState::Loaded(value),
            Err(error) => LoadingState::Failed(error),
        }
    }
}
