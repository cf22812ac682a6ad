// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Errors reported while waiting on a [`Subscription`](crate::Subscription).
#[derive(Debug, Error)]
pub enum ExecError {
    /// The observation task panicked or was aborted
    #[error("subscription task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
