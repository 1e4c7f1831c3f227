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

//! JSON support for benchpivot.
//!
//! This crate connects the grouping and pivot engine to JSON:
//!
//! - **Ingestion**: JMH `-rf json` result files into [`MeasurementRecord`]s,
//!   keeping parameter order, `NaN` scores and harness run settings
//! - **Registry**: plot declarations into a [`PlotRegistry`]
//! - **Export**: pivoted datasets and whole reports as JSON documents
//!
//! # Examples
//!
//! ```
//! use benchpivot_core::{build_report, PlotRegistry};
//! use benchpivot_json::{from_json, report_to_json_value, FromJsonConfig, ToJsonConfig};
//!
//! let json = r#"[
//!     {"benchmark": "pkg.Bench.run", "params": {"impl": "A", "size": "10"},
//!      "primaryMetric": {"score": 1.0, "scoreError": 0.1, "scoreUnit": "ns/op"}},
//!     {"benchmark": "pkg.Bench.run", "params": {"impl": "B", "size": "10"},
//!      "primaryMetric": {"score": 3.0, "scoreError": 0.1, "scoreUnit": "ns/op"}}
//! ]"#;
//!
//! let records = from_json(json, &FromJsonConfig::default()).unwrap();
//! let report = build_report(records, &PlotRegistry::new());
//! let value = report_to_json_value(&report, &ToJsonConfig::default());
//! assert_eq!(value["chapters"][0]["plots"][0]["datasets"][0]["series_labels"][1], "B");
//! ```
//!
//! [`MeasurementRecord`]: benchpivot_core::MeasurementRecord
//! [`PlotRegistry`]: benchpivot_core::PlotRegistry

mod error;
mod from_json;
mod registry;
mod to_json;

pub use error::{JsonError, Result};
pub use from_json::{from_json, from_json_value, from_reader, FromJsonConfig, FromJsonConfigBuilder, DEFAULT_MAX_RECORDS};
pub use registry::registry_from_json;
pub use to_json::{dataset_to_json, dataset_to_json_value, report_to_json, report_to_json_value, ToJsonConfig};
