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

//! Structured error types for the benchpivot CLI.

use benchpivot_core::{ConfigurationError, ConsistencyError, PivotError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchpivot CLI operations.
///
/// Only failures that stop a command are represented here. Rejected groups
/// and failed plots are part of a report, not errors.
///
/// # Examples
///
/// ```rust,no_run
/// use benchpivot_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Result file could not be ingested.
    #[error("Result parse error: {0}")]
    Parse(String),

    /// Plot registry could not be loaded.
    #[error("Plot registry error: {0}")]
    Registry(String),

    /// A plot configuration given on the command line is invalid.
    #[error("Invalid plot configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The requested benchmark was rejected during grouping.
    #[error("Rejected benchmark group: {0}")]
    Rejected(#[from] ConsistencyError),

    /// Pivoting the requested benchmark failed.
    #[error("Pivot error: {0}")]
    Pivot(#[from] PivotError),

    /// Output could not be produced.
    #[error("Output error: {0}")]
    Output(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<benchpivot_json::JsonError> for CliError {
    fn from(err: benchpivot_json::JsonError) -> Self {
        match err {
            benchpivot_json::JsonError::Registry(_) | benchpivot_json::JsonError::RegistryFormat(_) => {
                Self::Registry(err.to_string())
            }
            other => Self::Parse(other.to_string()),
        }
    }
}

impl From<benchpivot_csv::CsvError> for CliError {
    fn from(err: benchpivot_csv::CsvError) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.json", 3 * 1024 * 1024, 1024 * 1024);
        assert_eq!(
            err.to_string(),
            "File 'big.json' is too large (3145728 bytes). Maximum allowed: 1048576 bytes (1 MB)"
        );
    }

    #[test]
    fn test_registry_errors_map_to_registry() {
        let err: CliError = benchpivot_json::JsonError::RegistryFormat("bad".to_string()).into();
        assert!(matches!(err, CliError::Registry(_)));

        let err: CliError = benchpivot_json::JsonError::Syntax("bad".to_string()).into();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_pivot_error_keeps_kind() {
        let err: CliError = PivotError::from(ConfigurationError::UnknownAxisKey {
            benchmark_id: "p.B.run".to_string(),
            axis_key: "missing".to_string(),
            available: vec!["impl".to_string()],
        })
        .into();
        match &err {
            CliError::Pivot(inner) => assert_eq!(inner.kind(), "ConfigurationError"),
            other => panic!("expected pivot error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("Pivot error: "));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = CliError::io_error("missing.json", io::Error::new(io::ErrorKind::NotFound, "not found"));
        assert!(err.to_string().starts_with("I/O error for 'missing.json'"));
    }
}
