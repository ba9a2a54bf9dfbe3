//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ods.
//! The Ods project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Ods Error Module
//!
//! This module defines the error types used throughout the Ods engine for
//! consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! - **Explicit Error Types**: Each variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Transport errors carry the failing URL and HTTP
//!   status so a single failure signal identifies the remote call at fault
//! - **Fail-Fast**: The statistics engine performs no local recovery; any
//!   error from a remote call aborts the whole computation
//! - **Serde Support**: Errors can be serialized/deserialized for logging
//!   and persistence
//!
//! ## Error Categories
//!
//! - **Transport**: Non-success HTTP status from any remote call
//! - **Io**: Connection-level and filesystem failures
//! - **Schema**: Malformed or missing field-schema shape
//! - **Validation**: Input validation failures
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Ods.
///
/// This is a type alias for `std::result::Result<T, OdsError>` that provides
/// a more concise way to write function signatures that return Ods errors.
pub type Result<T> = std::result::Result<T, OdsError>;

/// Canonical error enumeration for Ods.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum OdsError {
    /// Non-success HTTP status returned by a remote call.
    ///
    /// This is the only error kind the aggregation core raises directly;
    /// it identifies the failing URL and the status it returned.
    #[error("transport error: status {status} from {url}")]
    Transport { status: u16, url: String },

    /// Errors originating from connection-level or filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors caused by a malformed or incomplete remote field schema.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for OdsError {
    fn from(err: io::Error) -> Self {
        OdsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OdsError {
    fn from(err: serde_json::Error) -> Self {
        OdsError::Serde(err.to_string())
    }
}

impl OdsError {
    /// Helper to construct transport errors.
    pub fn transport(status: u16, url: impl Into<String>) -> Self {
        OdsError::Transport {
            status,
            url: url.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        OdsError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        OdsError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        OdsError::Internal(message.into())
    }
}
