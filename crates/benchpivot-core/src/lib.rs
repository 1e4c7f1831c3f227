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

//! Grouping and pivot engine for benchmark measurement records.
//!
//! Records arrive as a flat, ordered sequence. The engine:
//!
//! 1. buckets them by benchmark identity ([`group`], [`group_partitioned`]),
//!    checking that every record of a benchmark has the same parameter keys
//!    and unit;
//! 2. resolves the plots declared for each benchmark ([`PlotRegistry`],
//!    [`resolve_configurations`]);
//! 3. pivots each group into an axis dimension and a composite series
//!    dimension ([`pivot`], [`pivot_split`]).
//!
//! [`build_report`] runs the three steps end to end. Rendering, file formats
//! and statistics are left to other crates.
//!
//! # Example
//!
//! ```
//! use benchpivot_core::{build_report, MeasurementRecord, Params, PlotRegistry, Summary};
//!
//! let records = vec![
//!     MeasurementRecord::new(
//!         "pkg.Bench.run",
//!         Params::new().with("impl", "A").with("size", "10"),
//!         Summary::new(1.0, 0.1, "ns/op"),
//!     ),
//!     MeasurementRecord::new(
//!         "pkg.Bench.run",
//!         Params::new().with("impl", "B").with("size", "10"),
//!         Summary::new(3.0, 0.1, "ns/op"),
//!     ),
//! ];
//!
//! let report = build_report(records, &PlotRegistry::new());
//! let chapter = &report.chapters[0];
//! assert_eq!(chapter.group.short_name(), "Bench.run");
//!
//! let (_, _, dataset) = chapter.datasets().next().unwrap();
//! assert_eq!(dataset.series_labels(), &["A", "B"]);
//! assert_eq!(dataset.cell("B", "10").unwrap().mean, 3.0);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for records and registry declarations
//! - `parallel`: [`build_report_parallel`], pivoting groups on the rayon pool

mod config;
mod error;
mod group;
mod name;
mod pivot;
mod record;
mod registry;
mod report;

pub use config::{AxisDefault, ChartKind, Orientation, PlotConfiguration, PlotConfigurationBuilder, SeriesFilter};
pub use error::{
    ConfigurationError, ConsistencyConflict, ConsistencyError, DuplicateCellError, PivotError,
    PivotResult,
};
pub use group::{group, group_partitioned, BenchmarkGroup, Grouping, Groups};
pub use name::{class_name, short_name};
pub use pivot::{pivot, pivot_split, Cell, CellEntry, KeyLayout, PivotedDataset, SERIES_SEPARATOR};
pub use record::{IterationSettings, MeasurementRecord, Params, RunSettings, Summary};
pub use registry::{resolve_configurations, PlotDeclaration, PlotRegistry, RegistryFile};
pub use report::{build_report, build_report_from_groups, Chapter, PlotOutcome, Report};

#[cfg(feature = "parallel")]
pub use report::build_report_parallel;
