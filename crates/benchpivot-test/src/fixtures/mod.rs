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

//! Canonical record sequences.
//!
//! - **consistent**: groups that satisfy the key-set and unit invariants
//! - **errors**: sequences that violate them, or that pivot into collisions
//! - **builders**: builder for one-off records

pub mod builders;
pub mod errors;

use crate::FixtureList;
use benchpivot_core::MeasurementRecord;
use builders::RecordBuilder;

/// Unit used by every consistent fixture.
pub const UNIT: &str = "ns/op";

/// `pkg.Bench.run` with `{impl, size}` ∈ {A, B} × {10, 100}, means 1 to 4.
pub fn impl_size_grid() -> Vec<MeasurementRecord> {
    [("A", "10", 1.0), ("A", "100", 2.0), ("B", "10", 3.0), ("B", "100", 4.0)]
        .into_iter()
        .map(|(implementation, size, mean)| {
            RecordBuilder::new("pkg.Bench.run")
                .param("impl", implementation)
                .param("size", size)
                .mean(mean)
                .error(mean / 10.0)
                .build()
        })
        .collect()
}

/// One record with keys `impl`, `size`, `threads` in that order.
pub fn three_keys() -> Vec<MeasurementRecord> {
    vec![RecordBuilder::new("pkg.Bench.run")
        .param("impl", "A")
        .param("size", "10")
        .param("threads", "4")
        .mean(1.0)
        .build()]
}

/// Two benchmarks interleaved: `org.lists.ListBench.add` then
/// `org.lists.ListBench.get`, each over two implementations and two sizes.
pub fn interleaved_benchmarks() -> Vec<MeasurementRecord> {
    let mut records = Vec::new();
    for size in ["100", "10000"] {
        for (implementation, add, get) in [("ArrayList", 12.0, 3.0), ("LinkedList", 20.0, 450.0)] {
            let scale = if size == "100" { 1.0 } else { 10.0 };
            records.push(
                RecordBuilder::new("org.lists.ListBench.add")
                    .param("implementation", implementation)
                    .param("size", size)
                    .mean(add * scale)
                    .error(0.5)
                    .build(),
            );
            records.push(
                RecordBuilder::new("org.lists.ListBench.get")
                    .param("implementation", implementation)
                    .param("size", size)
                    .mean(get * scale)
                    .error(0.5)
                    .build(),
            );
        }
    }
    records
}

/// A parameterless benchmark with a single record.
pub fn parameterless() -> Vec<MeasurementRecord> {
    vec![RecordBuilder::new("Baseline").mean(0.5).build()]
}

/// Grid over `impl` × `size` × `threads` for split tests.
pub fn threaded_grid() -> Vec<MeasurementRecord> {
    let mut records = Vec::new();
    let mut mean = 0.0;
    for threads in ["1", "8"] {
        for implementation in ["A", "B"] {
            for size in ["10", "100"] {
                mean += 1.0;
                records.push(
                    RecordBuilder::new("pkg.Concurrent.run")
                        .param("impl", implementation)
                        .param("size", size)
                        .param("threads", threads)
                        .mean(mean)
                        .build(),
                );
            }
        }
    }
    records
}

/// Returns all consistent fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("impl_size_grid", impl_size_grid),
        ("three_keys", three_keys),
        ("interleaved_benchmarks", interleaved_benchmarks),
        ("parameterless", parameterless),
        ("threaded_grid", threaded_grid),
    ]
}
