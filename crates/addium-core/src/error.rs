// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Addium add-in host framework.

use thiserror::Error;

/// The primary error type used across Addium status-tracking operations.
#[derive(Debug, Error)]
pub enum AddiumError {
    /// A status file could not be read or written.
    #[error("status i/o error: {message}")]
    Io {
        message: String,
        source: std::io::Error,
    },

    /// A status document could not be parsed or serialized.
    #[error("status format error: {message}")]
    Format {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
