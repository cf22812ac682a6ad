// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators over tri-state loading streams.
//!
//! A *loading stream* is any `Stream<Item = LoadingState<T, E>>`. It never fails at the
//! stream level: a failure is just another value, [`LoadingState::Failed`], and the
//! stream keeps running so that a later retry can flow through.
//!
//! This crate provides the operators that compose such streams while keeping the
//! precedence rules between `Loading`, `Loaded` and `Failed` well defined.
//!
//! # Operator Categories
//!
//! ### Transformation
//!
//! - **[`map_loaded`](MapLoadedExt::map_loaded)**: transforms `Loaded` payloads
//! - **[`map_failure`](MapLoadedExt::map_failure)**: transforms `Failed` payloads
//! - **[`to_optional`](MapLoadedExt::to_optional)**: lifts `Loaded(v)` to `Loaded(Some(v))`
//! - **[`replace_none_with`](ReplaceNoneExt::replace_none_with)**: turns `Loaded(None)` into a failure
//! - **[`flat_map_loaded`](FlatMapLoadedExt::flat_map_loaded)**: switches to a new inner loading stream per value
//! - **[`distinct_loading`](DistinctLoadingExt::distinct_loading)**: collapses consecutive `Loading`
//!
//! ### Combination
//!
//! - **[`combine_latest`](CombineLatestExt::combine_latest)** (and `3`, `4`, `_with`):
//!   re-evaluates on every input emission using the latest state of each input
//! - **[`zip_loading`](ZipLoadingExt::zip_loading)**: pairs emissions positionally
//!
//! ### Boundary
//!
//! - **[`materialize`](MaterializeExt::materialize)**: `Result` stream → loading stream
//! - **[`into_loading_stream`](MaterializeExt::into_loading_stream)**: same, boxed as [`LoadingStream`]
//! - **[`dematerialize`](DematerializeExt::dematerialize)**: loading stream → `Result` stream
//!
//! ### Extraction
//!
//! - **[`values`](ExtractExt::values)**, **[`loaded`](ExtractExt::loaded)**,
//!   **[`failures`](ExtractExt::failures)**, **[`is_loading`](ExtractExt::is_loading)**
//!
//! # Precedence
//!
//! Every combining operator resolves its inputs with the same priority:
//! `Failed` beats `Loading`, which beats `Loaded`. When several inputs failed, the
//! lowest-index (left-most) input wins.
//!
//! # Cancellation
//!
//! Operators are plain pull-based streams that own their upstreams. Dropping a composed
//! stream drops every upstream it was built from; nothing is spawned.
//!
//! # Example
//!
//! ```rust
//! use loadstream_core::LoadingState;
//! use loadstream_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let profile = stream::iter(vec![Ok::<_, String>("alice")]).into_loading_stream();
//! let settings = stream::iter(vec![Ok::<_, String>(42)]).into_loading_stream();
//!
//! let screen: Vec<_> = profile
//!     .combine_latest(settings)
//!     .map_loaded(|(name, limit)| format!("{name}:{limit}"))
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     screen,
//!     vec![LoadingState::Loading, LoadingState::Loaded("alice:42".to_string())]
//! );
//! # }
//! ```

#[macro_use]
mod logging;

pub mod combine_latest;
pub mod constructors;
pub mod dematerialize;
pub mod distinct_loading;
pub mod extract;
pub mod flat_map_loaded;
pub mod map_loaded;
pub mod materialize;
pub mod prelude;
mod types;
pub mod zip_loading;

pub use self::combine_latest::{
    combine_latest, combine_latest3, combine_latest4, combine_latest_all, CombineLatest,
    CombineLatest3, CombineLatest4, CombineLatestAll, CombineLatestExt,
};
pub use self::constructors::{failed, loaded, loading};
pub use self::dematerialize::{Dematerialize, DematerializeExt};
pub use self::distinct_loading::{DistinctLoading, DistinctLoadingExt};
pub use self::extract::ExtractExt;
pub use self::flat_map_loaded::{FlatMapLoaded, FlatMapLoadedExt};
pub use self::map_loaded::{MapLoadedExt, ReplaceNoneExt};
pub use self::materialize::{Materialize, MaterializeExt};
pub use self::zip_loading::{zip_loading, ZipLoading, ZipLoadingExt};

pub use loadstream_core::LoadingState;

/// A type-erased, `Send` loading stream.
///
/// Produced by [`MaterializeExt::into_loading_stream`] and the [`constructors`], and
/// expected as the inner stream type of [`flat_map_loaded`](FlatMapLoadedExt::flat_map_loaded).
pub type LoadingStream<T, E> = futures::stream::BoxStream<'static, LoadingState<T, E>>;
