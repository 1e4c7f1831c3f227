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

//! Error types for CSV generation.

use thiserror::Error;

/// CSV generation error types.
///
/// # Examples
///
/// ```
/// use benchpivot_csv::CsvError;
///
/// let err = CsvError::InvalidUtf8 {
///     context: "dataset table".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid UTF-8 in dataset table");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The CSV writer failed.
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),

    /// Flushing the CSV writer into its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffered output is not UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being generated.
        context: String,
    },
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;
