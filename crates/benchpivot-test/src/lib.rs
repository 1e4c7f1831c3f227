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

//! Shared test fixtures for benchpivot crates.
//!
//! - **Record fixtures**: canonical record sequences for grouping and pivot tests
//! - **Builders**: fluent [`RecordBuilder`](fixtures::builders::RecordBuilder)
//! - **Samples**: result and registry documents as the ingestion crates read them
//!
//! # Quick Start
//!
//! ```rust
//! use benchpivot_test::fixtures;
//!
//! let records = fixtures::impl_size_grid();
//! assert_eq!(records.len(), 4);
//!
//! use benchpivot_test::fixtures::builders::RecordBuilder;
//!
//! let record = RecordBuilder::new("pkg.Bench.run")
//!     .param("impl", "A")
//!     .mean(2.5)
//!     .build();
//! assert_eq!(record.param("impl"), Some("A"));
//! ```

use benchpivot_core::MeasurementRecord;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Vec<MeasurementRecord>)>;

/// Canonical record fixtures.
pub mod fixtures;

/// Serialized sample documents.
pub mod samples;
