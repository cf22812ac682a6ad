// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator trait and the core types.
//!
//! ```ignore
//! use loadstream_stream::prelude::*;
//!
//! let screen = profile
//!     .combine_latest(settings)
//!     .map_loaded(render)
//!     .distinct_loading();
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`CombineLatestExt`] - Combine the latest states of several loading streams
//! - [`ZipLoadingExt`] - Pair loading streams positionally
//! - [`MapLoadedExt`] - Map loaded values, failures, or lift to `Option`
//! - [`ReplaceNoneExt`] - Turn `Loaded(None)` into a failure
//! - [`FlatMapLoadedExt`] - Switch to a new loading stream per loaded value
//! - [`DistinctLoadingExt`] - Collapse consecutive `Loading`
//! - [`MaterializeExt`] - Lift a `Result` stream into a loading stream
//! - [`DematerializeExt`] - Lower a loading stream into a `Result` stream
//! - [`ExtractExt`] - Project values, failures, or loading flags
//!
//! ## Types
//!
//! - [`LoadingState`] - The tri-state value
//! - [`LoadingStream`] - Boxed loading stream

pub use crate::combine_latest::CombineLatestExt;
pub use crate::dematerialize::DematerializeExt;
pub use crate::distinct_loading::DistinctLoadingExt;
pub use crate::extract::ExtractExt;
pub use crate::flat_map_loaded::FlatMapLoadedExt;
pub use crate::map_loaded::{MapLoadedExt, ReplaceNoneExt};
pub use crate::materialize::MaterializeExt;
pub use crate::zip_loading::ZipLoadingExt;
pub use crate::LoadingStream;

pub use loadstream_core::LoadingState;
