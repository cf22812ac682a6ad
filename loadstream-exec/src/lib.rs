// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Driving streams into observers.
//!
//! Streams are lazy; this crate provides the consuming end of a pipeline:
//!
//! - [`ObserveExt::observe`] drives a `Stream<Item = Result<T, E>>` into an [`Observer`]
//! - [`ObserveLoadingExt::observe_loading`] drives a loading stream into a
//!   [`LoadingObserver`]
//! - with the `runtime-tokio` feature, `subscribe` / `subscribe_loading` spawn the same
//!   work and return a cancellable [`Subscription`]
//!
//! Cancellation goes through a [`CancellationToken`](loadstream_core::CancellationToken):
//! once it fires, no further observer callback is made.

#[macro_use]
mod logging;

#[cfg(feature = "runtime-tokio")]
pub mod error;
pub mod observe;
pub mod observer;
#[cfg(feature = "runtime-tokio")]
pub mod subscription;

#[cfg(feature = "runtime-tokio")]
pub use error::ExecError;
pub use observe::{Completion, ObserveExt, ObserveLoadingExt};
pub use observer::{FnObserver, LoadingObserver, Observer};
#[cfg(feature = "runtime-tokio")]
pub use subscription::Subscription;
