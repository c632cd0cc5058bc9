// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Boot configuration
//!
//! A scripted boot needs more than a raw image: where to load it, where
//! to start executing, and how long to run for. `BootConfig` captures
//! that as a small `key = value`-shaped TOML document, in the spirit of
//! the teacher's line-oriented `SystemConfig::parse` but driven through
//! `serde`/`toml` instead of hand-rolled parsing, since those are
//! already in the teacher's dependency table.
//!
//! Any field may also be overridden by an environment variable of the
//! same name, uppercased and prefixed with `MIPSIM_` (e.g.
//! `MIPSIM_ENTRY=0x00400000`), loaded via `dotenvy` so a `.env` file in
//! the working directory works the same way.

use super::error::{EmulatorError, Result};
use serde::Deserialize;

/// Parsed boot configuration for a scripted run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BootConfig {
    /// Address the program image is installed at
    #[serde(default = "BootConfig::default_load_addr")]
    pub load_addr: u32,

    /// Initial program counter; defaults to `load_addr` if omitted
    #[serde(default)]
    pub entry: Option<u32>,

    /// Path to the flat raw-binary program image
    pub image: String,

    /// Maximum number of instructions to execute before stopping, even
    /// if the program never hits the SYSCALL halt convention
    #[serde(default = "BootConfig::default_instruction_limit")]
    pub instruction_limit: u64,

    /// `log` level to initialize the CLI's logger with
    #[serde(default = "BootConfig::default_log_level")]
    pub log_level: String,
}

impl BootConfig {
    fn default_load_addr() -> u32 {
        crate::core::cpu::DEFAULT_PC
    }

    fn default_instruction_limit() -> u64 {
        100_000
    }

    fn default_log_level() -> String {
        "info".to_string()
    }

    /// Parse a `BootConfig` from TOML text
    pub fn parse(data: &str) -> Result<Self> {
        let config: BootConfig = toml::from_str(data)?;
        if config.image.is_empty() {
            return Err(EmulatorError::Config("`image` must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Read and parse a `BootConfig` from a TOML file on disk
    pub fn load_file(path: &str) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Apply `MIPSIM_*` environment variable overrides, loading a
    /// `.env` file in the current directory first if one is present
    pub fn apply_env_overrides(mut self) -> Self {
        let _ = dotenvy::dotenv();

        if let Ok(value) = std::env::var("MIPSIM_ENTRY") {
            if let Ok(parsed) = parse_u32(&value) {
                self.entry = Some(parsed);
            }
        }
        if let Ok(value) = std::env::var("MIPSIM_LOAD_ADDR") {
            if let Ok(parsed) = parse_u32(&value) {
                self.load_addr = parsed;
            }
        }
        if let Ok(value) = std::env::var("MIPSIM_INSTRUCTION_LIMIT") {
            if let Ok(parsed) = value.parse() {
                self.instruction_limit = parsed;
            }
        }
        if let Ok(value) = std::env::var("MIPSIM_LOG_LEVEL") {
            self.log_level = value;
        }

        self
    }

    /// The initial program counter: `entry` if set, otherwise `load_addr`
    pub fn entry_point(&self) -> u32 {
        self.entry.unwrap_or(self.load_addr)
    }
}

fn parse_u32(value: &str) -> std::result::Result<u32, std::num::ParseIntError> {
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        value.parse()
    }
}
