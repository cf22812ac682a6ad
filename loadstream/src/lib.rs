// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # loadstream
//!
//! Tri-state loading streams for async Rust.
//!
//! UI-facing data is rarely just "a value": it is *loading*, *loaded*, or *failed*, and
//! screens usually combine several such sources. `loadstream` models this with
//! [`LoadingState`] and a family of stream operators that compose loading streams
//! while keeping the precedence rules well defined: a failure beats loading, loading
//! beats loaded, and the left-most failure wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use loadstream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let user = stream::iter(vec![Ok::<_, String>("alice")]).into_loading_stream();
//! let unread = stream::iter(vec![Ok::<_, String>(3)]).into_loading_stream();
//!
//! let badge: Vec<_> = user
//!     .combine_latest(unread)
//!     .map_loaded(|(name, count)| format!("{name} ({count})"))
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     badge,
//!     vec![LoadingState::Loading, LoadingState::Loaded("alice (3)".to_string())]
//! );
//! # }
//! ```
//!
//! ## Crates
//!
//! - [`loadstream_core`]: [`LoadingState`], [`Subject`], [`CancellationToken`]
//! - [`loadstream_stream`]: every operator
//! - [`loadstream_exec`]: observers and subscriptions
//!
//! ## Features
//!
//! - `runtime-tokio` (default): `subscribe` / `subscribe_loading` returning a
//!   [`Subscription`]
//! - `tracing`: debug/trace events from operators and subscriptions

pub use loadstream_core::{
    CancellationToken, LoadingError, LoadingState, Subject, SubjectError, SubjectStream,
};
pub use loadstream_exec::{
    Completion, FnObserver, LoadingObserver, ObserveExt, ObserveLoadingExt, Observer,
};
#[cfg(feature = "runtime-tokio")]
pub use loadstream_exec::{ExecError, Subscription};
pub use loadstream_stream::{
    combine_latest, combine_latest3, combine_latest4, combine_latest_all, failed, loaded, loading,
    zip_loading, LoadingStream,
};

pub use loadstream_core;
pub use loadstream_exec;
pub use loadstream_stream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use loadstream_core::{CancellationToken, LoadingState, Subject};
    pub use loadstream_exec::{ObserveExt, ObserveLoadingExt};
    pub use loadstream_stream::prelude::*;
}
