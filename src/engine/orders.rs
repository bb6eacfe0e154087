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

//! `order.place` handler.
//!
//! Coerces the request params into an order and synthesizes a fresh
//! order id. Coercion is deliberately permissive: quantity accepts
//! integers, truncating floats, numeric strings, and bools; anything
//! else, including an explicit null, is a dispatch failure reported
//! through the internal-error path. Only an absent quantity defaults.

use serde_json::Value;

use crate::core::constants::order;
use crate::core::errors::DispatchError;
use crate::core::models::{OrderId, OrderTicket};

/// Handle `order.place`: build the ephemeral order ticket from params.
pub fn place_order(params: Option<&Value>) -> Result<OrderTicket, DispatchError> {
    let item = coerce_item(params.and_then(|p| p.get("item")));
    let quantity = coerce_quantity(params.and_then(|p| p.get("quantity")))?;

    Ok(OrderTicket {
        order_id: OrderId::generate(),
        item,
        quantity,
        status: order::STATUS_CREATED.to_string(),
    })
}

/// Absent or null -> default; strings pass through; any other JSON
/// value is rendered as its compact JSON text.
fn coerce_item(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => order::DEFAULT_ITEM.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn coerce_quantity(value: Option<&Value>) -> Result<i64, DispatchError> {
    match value {
        None => Ok(order::DEFAULT_QUANTITY),
        // An explicit null is present, not missing: it does not take
        // the default, it fails coercion.
        Some(Value::Null) => Err(DispatchError::InvalidParams(
            "quantity is null".to_string(),
        )),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                // Truncate toward zero, like an int() cast
                Ok(f as i64)
            } else {
                Err(DispatchError::InvalidParams(format!(
                    "quantity out of range: {}",
                    n
                )))
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
            DispatchError::InvalidParams(format!("quantity is not an integer: '{}'", s))
        }),
        Some(Value::Bool(b)) => Ok(i64::from(*b)),
        Some(other) => Err(DispatchError::InvalidParams(format!(
            "quantity has unsupported type: {}",
            other
        ))),
    }
}
