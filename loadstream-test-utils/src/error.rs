// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Failure payload used across the workspace tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum TestError {
    #[error("network unavailable")]
    Network,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("timed out after {0} ms")]
    Timeout(u64),
}

impl TestError {
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
