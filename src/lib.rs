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

//! orderline: a line-delimited JSON-RPC order placement service.
//!
//! This library provides the core logic for the orderline stdio server,
//! which reads newline-delimited JSON-RPC 2.0 requests, handles the
//! `order.place` method, and writes one response line per request.

pub mod config;
pub mod core;
pub mod engine;
pub mod rpc;
