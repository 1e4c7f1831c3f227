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

//! CSV tables for benchpivot.
//!
//! Two table shapes are provided:
//!
//! - **Group tables** ([`group_to_csv`]): one row per measurement, with the
//!   parameter values, score, score error and unit
//! - **Dataset matrices** ([`dataset_to_csv`]): one row per series label and
//!   one column per axis label, the layout a chart or spreadsheet consumes
//!
//! Scores are printed with a fixed number of decimals (three by default).

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    dataset_to_csv, dataset_to_csv_with_config, dataset_to_csv_writer, group_to_csv,
    group_to_csv_with_config, group_to_csv_writer, ToCsvConfig, ERROR_HEADER, SCORE_HEADER,
    UNIT_HEADER,
};
