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

//! Record sequences that must be rejected.

use super::builders::RecordBuilder;
use benchpivot_core::MeasurementRecord;

/// Second record of `pkg.Bench.run` drops the `size` key.
pub fn missing_key() -> Vec<MeasurementRecord> {
    vec![
        RecordBuilder::new("pkg.Bench.run").param("impl", "A").param("size", "10").build(),
        RecordBuilder::new("pkg.Bench.run").param("impl", "B").build(),
    ]
}

/// Second record of `pkg.Bench.run` renames `size` to `length`.
pub fn renamed_key() -> Vec<MeasurementRecord> {
    vec![
        RecordBuilder::new("pkg.Bench.run").param("impl", "A").param("size", "10").build(),
        RecordBuilder::new("pkg.Bench.run").param("impl", "A").param("length", "10").build(),
    ]
}

/// Records of `pkg.Bench.run` in two units, followed by a healthy benchmark.
pub fn mixed_units() -> Vec<MeasurementRecord> {
    vec![
        RecordBuilder::new("pkg.Bench.run").param("impl", "A").unit("ns/op").build(),
        RecordBuilder::new("pkg.Bench.run").param("impl", "B").unit("ops/s").build(),
        RecordBuilder::new("pkg.Other.run").param("impl", "A").build(),
    ]
}

/// Consistent records with identical parameters, so every pivot collides.
pub fn colliding_labels() -> Vec<MeasurementRecord> {
    vec![
        RecordBuilder::new("pkg.Bench.run").param("impl", "A").param("size", "10").mean(1.0).build(),
        RecordBuilder::new("pkg.Bench.run").param("impl", "A").param("size", "10").mean(2.0).build(),
    ]
}

/// Returns all inconsistent fixtures as (name, records) pairs.
pub fn inconsistent_samples() -> Vec<(&'static str, Vec<MeasurementRecord>)> {
    vec![
        ("missing_key", missing_key()),
        ("renamed_key", renamed_key()),
        ("mixed_units", mixed_units()),
    ]
}
