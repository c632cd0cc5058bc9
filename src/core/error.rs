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

//! Simulator error types

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Simulator error types
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// Unaligned memory access error
    #[error("unaligned {size}-byte access at address 0x{address:08X}")]
    UnalignedAccess {
        /// The address that was accessed
        address: u32,
        /// The size of the access in bytes (2 for halfword, 4 for word)
        size: u32,
    },

    /// Malformed program image (bad magic, truncated header, size mismatch)
    #[error("invalid program image: {reason}")]
    InvalidImage {
        /// Human-readable description of what was wrong with the image
        reason: String,
    },

    /// I/O error (image or config file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Boot configuration could not be parsed
    #[error("invalid boot configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for EmulatorError {
    fn from(err: toml::de::Error) -> Self {
        EmulatorError::Config(err.to_string())
    }
}
