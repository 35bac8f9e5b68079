/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type BeagleResult<T> = std::result::Result<T, BeagleError>;

/// Error kinds are deliberately narrow (one per documented failure class)
/// rather than a single `Generic(String)` catch-all, so callers can match
/// on failure class.
#[derive(Debug, Error)]
pub enum BeagleError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("external failure: {0}")]
    ExternalFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl BeagleError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
    pub fn external_failure(msg: impl Into<String>) -> Self {
        Self::ExternalFailure(msg.into())
    }
}
