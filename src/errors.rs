// ABOUTME: Unified error handling for the nutrition planning engine
// ABOUTME: AppError and AppResult used at the input-parsing boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use thiserror::Error;

/// Result alias used throughout the engine
pub type AppResult<T> = Result<T, AppError>;

/// Engine error type
///
/// The planning engine is total over nutrition data: missing nutrient
/// fields default to zero, invalid serving sizes fall back to the
/// reference default, and unresolved catalog references degrade to
/// placeholder lines. Errors therefore only arise at the parsing
/// boundary, before data reaches the computation paths.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied selector or parameter could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A plan payload from the storage collaborator failed to deserialize
    #[error("Invalid plan payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub const fn invalid_input(message: String) -> Self {
        Self::InvalidInput(message)
    }
}
