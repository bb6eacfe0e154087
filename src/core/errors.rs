// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Domain error types - every dispatch failure maps to a wire error code.

use thiserror::Error;

use crate::core::constants::jsonrpc;

/// Main error type for per-request dispatch.
///
/// The Display text of each variant becomes `error.message` on the wire,
/// so variants carry the human-readable failure description.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Unknown or missing method (-32601)
    #[error("Method not found")]
    MethodNotFound,

    /// The line was not a valid JSON-RPC request (-32603)
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Parameter coercion failure inside a handler (-32603)
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// Transport-level framing fault surfaced by the codec (-32603)
    #[error("framing error: {0}")]
    Framing(String),
}

impl DispatchError {
    /// JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            DispatchError::MethodNotFound => jsonrpc::ERROR_METHOD_NOT_FOUND,
            DispatchError::Parse(_)
            | DispatchError::InvalidParams(_)
            | DispatchError::Framing(_) => jsonrpc::ERROR_INTERNAL,
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
