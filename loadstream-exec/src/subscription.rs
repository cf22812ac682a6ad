// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::ExecError;
use crate::observe::Completion;
use loadstream_core::CancellationToken;
use tokio::task::JoinHandle;

/// Handle to an observation running on a spawned task.
///
/// Dropping the handle detaches the task; call [`cancel`](Subscription::cancel) to stop
/// it.
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    handle: JoinHandle<Completion>,
}

impl Subscription {
    pub(crate) fn new(token: CancellationToken, handle: JoinHandle<Completion>) -> Self {
        Self { token, handle }
    }

    /// Stops the observation. No observer callback runs after the task notices.
    ///
    /// Idempotent.
    pub fn cancel(&self) {
        if self.token.cancel() {
            debug!("cancelling subscription");
        }
    }

    /// Returns `true` once [`cancel`](Subscription::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns `true` if the observation task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the observation to end.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Join`] if the task panicked or was aborted by the runtime.
    pub async fn join(self) -> Result<Completion, ExecError> {
        Ok(self.handle.await?)
    }
}
