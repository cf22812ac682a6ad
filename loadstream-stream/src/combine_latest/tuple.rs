// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::types::{EmissionGate, Outcome, Slot, Step, POLL_BUDGET};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{Fuse, Stream, StreamExt};
use loadstream_core::LoadingState;
use pin_project::pin_project;

define_combine_latest! {
    /// Stream returned by [`combine_latest`](super::combine_latest) and
    /// [`CombineLatestExt::combine_latest`](super::CombineLatestExt::combine_latest).
    CombineLatest {
        0 => first: S1, T1, a;
        1 => second: S2, T2, b;
    }
}

define_combine_latest! {
    /// Stream returned by [`combine_latest3`](super::combine_latest3).
    CombineLatest3 {
        0 => first: S1, T1, a;
        1 => second: S2, T2, b;
        2 => third: S3, T3, c;
    }
}

define_combine_latest! {
    /// Stream returned by [`combine_latest4`](super::combine_latest4).
    CombineLatest4 {
        0 => first: S1, T1, a;
        1 => second: S2, T2, b;
        2 => third: S3, T3, c;
        3 => fourth: S4, T4, d;
    }
}
