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

//! Per-line request dispatch.
//!
//! Each non-blank input line maps to exactly one response value. All
//! failures are converted to wire error objects at this single boundary;
//! nothing here can terminate the process.

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::constants::{jsonrpc, methods};
use crate::core::errors::DispatchError;
use crate::core::models::{JsonRpcRequest, JsonRpcResponse};
use crate::engine::orders;

/// Dispatch one raw input line to a response.
///
/// Parse failures and handler faults both come back as `-32603` with a
/// null id; the request id is only echoed on the success and
/// method-not-found paths.
pub fn dispatch_line(line: &str) -> JsonRpcResponse {
    match handle_line(line) {
        Ok(resp) => resp,
        Err(e) => {
            warn!("Request failed: {}", e);
            JsonRpcResponse::error(Value::Null, e.code(), &e.to_string())
        }
    }
}

/// Convert a codec-level framing fault into its wire response.
pub fn framing_error_response(detail: &str) -> JsonRpcResponse {
    let err = DispatchError::Framing(detail.to_string());
    JsonRpcResponse::error(Value::Null, err.code(), &err.to_string())
}

fn handle_line(line: &str) -> Result<JsonRpcResponse, DispatchError> {
    let req: JsonRpcRequest = serde_json::from_str(line)?;
    let id = req.id.clone().unwrap_or(Value::Null);

    match req.method.as_deref() {
        Some(methods::ORDER_PLACE) => {
            let ticket = orders::place_order(req.params.as_ref())?;
            debug!("Placed order {}", ticket.order_id);
            let result = serde_json::to_value(&ticket)?;
            Ok(JsonRpcResponse::success(id, result))
        }
        _ => Ok(JsonRpcResponse::error(
            id,
            jsonrpc::ERROR_METHOD_NOT_FOUND,
            jsonrpc::METHOD_NOT_FOUND_MESSAGE,
        )),
    }
}
