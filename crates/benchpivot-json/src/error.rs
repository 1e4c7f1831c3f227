// Dweve Benchpivot - Benchmark result grouping and pivoting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for JSON ingestion and export.

use benchpivot_core::ConfigurationError;
use thiserror::Error;

/// JSON conversion error types.
///
/// Ingestion errors carry the position of the offending run object in the
/// input array and the field path within it.
///
/// # Examples
///
/// ```
/// use benchpivot_json::JsonError;
///
/// let err = JsonError::MissingField {
///     index: 3,
///     field: "primaryMetric.scoreUnit".to_string(),
/// };
/// assert_eq!(err.to_string(), "Run #3: missing field 'primaryMetric.scoreUnit'");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
    /// The input is not valid JSON.
    #[error("JSON parse error: {0}")]
    Syntax(String),

    /// The document root has the wrong shape.
    #[error("Root must be a JSON {expected}, found {found}")]
    InvalidRoot {
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// A required field is absent.
    #[error("Run #{index}: missing field '{field}'")]
    MissingField {
        /// Position of the run in the input array (0-based).
        index: usize,
        /// Dotted field path.
        field: String,
    },

    /// A field has the wrong JSON type or an unusable value.
    #[error("Run #{index}: field '{field}' must be {expected}")]
    InvalidField {
        /// Position of the run in the input array (0-based).
        index: usize,
        /// Dotted field path.
        field: String,
        /// What the field should contain.
        expected: &'static str,
    },

    /// The input holds more runs than the configured limit.
    #[error("Maximum record count ({limit}) exceeded - input has {found} runs")]
    TooManyRecords {
        /// Configured limit.
        limit: usize,
        /// Runs in the input.
        found: usize,
    },

    /// A registry declaration does not deserialize.
    #[error("Invalid plot registry: {0}")]
    RegistryFormat(String),

    /// A registry declaration deserializes but cannot be compiled.
    #[error("Invalid plot declaration: {0}")]
    Registry(#[from] ConfigurationError),

    /// I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for JsonError {
    fn from(source: serde_json::Error) -> Self {
        if source.is_io() {
            Self::Io(source.to_string())
        } else {
            Self::Syntax(source.to_string())
        }
    }
}

/// Result type for JSON operations.
pub type Result<T> = std::result::Result<T, JsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_display() {
        let err = JsonError::InvalidField {
            index: 0,
            field: "params.size".to_string(),
            expected: "a string, number or boolean",
        };
        assert_eq!(
            err.to_string(),
            "Run #0: field 'params.size' must be a string, number or boolean"
        );
    }

    #[test]
    fn test_syntax_error_conversion() {
        let err: JsonError = serde_json::from_str::<serde_json::Value>("[1,")
            .unwrap_err()
            .into();
        assert!(matches!(err, JsonError::Syntax(_)));
    }

    #[test]
    fn test_too_many_records_display() {
        let err = JsonError::TooManyRecords { limit: 10, found: 11 };
        assert!(err.to_string().contains("(10)"));
        assert!(err.to_string().contains("11 runs"));
    }
}
