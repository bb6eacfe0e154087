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

//! orderline constants - Single source of truth for all configuration values.
//!
//! This module centralizes magic numbers, error codes, and configuration
//! constants to ensure consistency and maintainability.

/// JSON-RPC 2.0 Error Codes
pub mod jsonrpc {
    /// Protocol version echoed in every response
    pub const VERSION: &str = "2.0";
    /// Method not found (standard JSON-RPC)
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;
    /// Internal error (standard JSON-RPC) - covers parse failures and
    /// handler faults; no other code is emitted for them
    pub const ERROR_INTERNAL: i32 = -32603;
    /// Fixed message for the method-not-found response
    pub const METHOD_NOT_FOUND_MESSAGE: &str = "Method not found";
}

/// RPC Methods
pub mod methods {
    pub const ORDER_PLACE: &str = "order.place";
}

/// Order synthesis defaults
pub mod order {
    /// Prefix of every generated order id
    pub const ID_PREFIX: &str = "ORD-";
    /// Number of uppercase hex characters following the prefix
    pub const ID_HEX_LEN: usize = 8;
    /// Status reported for every successfully placed order
    pub const STATUS_CREATED: &str = "CREATED";
    /// Item used when the request params carry none
    pub const DEFAULT_ITEM: &str = "unknown";
    /// Quantity used when the request params carry none
    pub const DEFAULT_QUANTITY: i64 = 1;
}

/// Transport Limits (DoS Protection)
pub mod limits {
    /// Maximum allowed length of a single request line (10 MB)
    pub const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;
}

/// Configuration Environment Variables
pub mod config {
    pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
}
