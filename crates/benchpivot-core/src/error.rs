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

//! Error types for grouping and pivoting.
//!
//! Every failure carries the benchmark identity it concerns plus the offending
//! keys or values, so that a malformed result file or a misconfigured plot can
//! be diagnosed from the message alone.

use std::fmt;
use thiserror::Error;

/// What two records of the same benchmark disagreed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyConflict {
    /// The parameter key sets differ.
    ParamKeys {
        /// Keys established by the first record of the group.
        expected: Vec<String>,
        /// Keys carried by the offending record.
        found: Vec<String>,
    },
    /// The measurement units differ.
    Unit {
        /// Unit established by the first record of the group.
        expected: String,
        /// Unit carried by the offending record.
        found: String,
    },
}

impl fmt::Display for ConsistencyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParamKeys { expected, found } => write!(
                f,
                "parameter keys [{}] differ from [{}]",
                found.join(", "),
                expected.join(", ")
            ),
            Self::Unit { expected, found } => {
                write!(f, "unit '{}' differs from '{}'", found, expected)
            }
        }
    }
}

/// Records sharing a benchmark identity disagree on key set or unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inconsistent records for benchmark '{benchmark_id}': record #{record_index} {conflict} (established by record #{first_index})")]
pub struct ConsistencyError {
    /// Full benchmark identity of the rejected group.
    pub benchmark_id: String,
    /// Input position of the record that established the group.
    pub first_index: usize,
    /// Input position of the conflicting record.
    pub record_index: usize,
    /// The disagreement itself.
    pub conflict: ConsistencyConflict,
}

/// A plot configuration cannot be applied to a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The explicit axis key is not one of the group's parameter keys.
    #[error("axis key '{axis_key}' is not a parameter of benchmark '{benchmark_id}' (available: [{}])", .available.join(", "))]
    UnknownAxisKey {
        /// Benchmark the plot was applied to.
        benchmark_id: String,
        /// The requested axis key.
        axis_key: String,
        /// Keys the group actually has.
        available: Vec<String>,
    },

    /// The split key is not one of the group's parameter keys.
    #[error("split key '{split_key}' is not a parameter of benchmark '{benchmark_id}' (available: [{}])", .available.join(", "))]
    UnknownSplitKey {
        /// Benchmark the plot was applied to.
        benchmark_id: String,
        /// The requested split key.
        split_key: String,
        /// Keys the group actually has.
        available: Vec<String>,
    },

    /// The same key was used both as split key and axis key.
    #[error("key '{key}' cannot be both split key and axis key")]
    SplitIsAxis {
        /// The conflicting key.
        key: String,
    },

    /// A series filter pattern is not a valid regular expression.
    #[error("invalid filter pattern '{pattern}' for parameter '{key}': {message}")]
    InvalidPattern {
        /// Parameter the filter applies to.
        key: String,
        /// The rejected pattern.
        pattern: String,
        /// Message from the regex compiler.
        message: String,
    },
}

/// Two records collapse onto the same `(series, axis)` cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate cell (series '{series_label}', axis '{axis_label}') in benchmark '{benchmark_id}': records #{first_record} and #{second_record}")]
pub struct DuplicateCellError {
    /// Benchmark being pivoted.
    pub benchmark_id: String,
    /// Series label of the collision.
    pub series_label: String,
    /// Axis label of the collision.
    pub axis_label: String,
    /// Position within the group of the record that filled the cell first.
    pub first_record: usize,
    /// Position within the group of the record that collided.
    pub second_record: usize,
}

/// Errors produced by the grouping and pivot engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PivotError {
    /// See [`ConsistencyError`].
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    /// See [`ConfigurationError`].
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// See [`DuplicateCellError`].
    #[error(transparent)]
    DuplicateCell(#[from] DuplicateCellError),
}

impl PivotError {
    /// Short category name, stable across versions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Consistency(_) => "ConsistencyError",
            Self::Configuration(_) => "ConfigurationError",
            Self::DuplicateCell(_) => "DuplicateCellError",
        }
    }
}

/// Result type for grouping and pivoting.
pub type PivotResult<T> = Result<T, PivotError>;
