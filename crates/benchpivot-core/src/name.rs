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

//! Display names derived from dotted benchmark identities.

/// Last two dotted segments of a benchmark identity.
///
/// Identities with fewer than two segments are returned unchanged.
///
/// ```
/// use benchpivot_core::short_name;
///
/// assert_eq!(short_name("org.example.ListBench.add"), "ListBench.add");
/// assert_eq!(short_name("standalone"), "standalone");
/// ```
pub fn short_name(benchmark_id: &str) -> String {
    let mut segments = benchmark_id.rsplitn(3, '.');
    match (segments.next(), segments.next()) {
        (Some(last), Some(before)) => format!("{}.{}", before, last),
        _ => benchmark_id.to_string(),
    }
}

/// Everything before the last `.`, i.e. the declaring class of a benchmark
/// method. `None` when the identity has no dot.
pub fn class_name(benchmark_id: &str) -> Option<&str> {
    benchmark_id.rfind('.').map(|idx| &benchmark_id[..idx])
}
