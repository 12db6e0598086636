// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the configuration file used by the `tracklist` tool.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tracklist-bridge";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    pub version: u32,
    /// How long to wait for a media item to be parsed, in milliseconds.
    pub parse_timeout_ms: u64,
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            parse_timeout_ms: 10_000,
            log_filter: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn parse_timeout(&self) -> Duration {
        Duration::from_millis(self.parse_timeout_ms)
    }
}

pub fn load_config() -> BridgeConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Loads the configuration from an explicit file, creating it with default
/// values if it does not exist.
pub fn load_config_from(path: &Path) -> Result<BridgeConfig, confy::ConfyError> {
    confy::load_path(path)
}
