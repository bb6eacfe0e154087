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

use serde::{Deserialize, Serialize};
use std::env;

use crate::core::constants::config as env_keys;
use crate::core::errors::ConfigError;

/// Process configuration.
///
/// Only observability knobs exist; the request/response behavior itself
/// has no configuration surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_format =
            env::var(env_keys::ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string());
        if log_format != "text" && log_format != "json" {
            return Err(ConfigError::InvalidValue {
                key: env_keys::ENV_LOG_FORMAT.to_string(),
                reason: format!("expected 'text' or 'json', got '{}'", log_format),
            });
        }

        Ok(Self {
            log_level: env::var(env_keys::ENV_LOG_LEVEL)
                .unwrap_or_else(|_| "info".to_string()),
            log_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}
