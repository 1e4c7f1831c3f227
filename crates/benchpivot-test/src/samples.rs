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

//! Serialized sample documents.

/// JMH-style result file: two benchmarks, interleaved, with run settings,
/// raw data and a `NaN` score error.
pub const JMH_RESULTS: &str = r#"[
    {
        "jmhVersion": "1.37",
        "benchmark": "org.lists.ListBench.add",
        "mode": "avgt",
        "threads": 1,
        "forks": 2,
        "warmupIterations": 3,
        "warmupTime": "1 s",
        "warmupBatchSize": 1,
        "measurementIterations": 2,
        "measurementTime": "1 s",
        "measurementBatchSize": 1,
        "params": {
            "implementation": "ArrayList",
            "size": "100"
        },
        "primaryMetric": {
            "score": 12.0,
            "scoreError": 0.5,
            "scoreConfidence": [11.5, 12.5],
            "scorePercentiles": { "0.0": 11.9, "100.0": 12.1 },
            "scoreUnit": "ns/op",
            "rawData": [[11.9, 12.1], [12.0, 12.0]]
        },
        "secondaryMetrics": {}
    },
    {
        "jmhVersion": "1.37",
        "benchmark": "org.lists.ListBench.get",
        "mode": "avgt",
        "threads": 1,
        "forks": 1,
        "warmupIterations": 0,
        "warmupTime": "1 s",
        "warmupBatchSize": 1,
        "measurementIterations": 1,
        "measurementTime": "1 s",
        "measurementBatchSize": 1,
        "params": {
            "implementation": "ArrayList",
            "size": "100"
        },
        "primaryMetric": {
            "score": 3.0,
            "scoreError": "NaN",
            "scoreConfidence": ["NaN", "NaN"],
            "scoreUnit": "ns/op",
            "rawData": [[3.0]]
        },
        "secondaryMetrics": {}
    },
    {
        "jmhVersion": "1.37",
        "benchmark": "org.lists.ListBench.add",
        "mode": "avgt",
        "threads": 1,
        "forks": 2,
        "warmupIterations": 3,
        "warmupTime": "1 s",
        "warmupBatchSize": 1,
        "measurementIterations": 2,
        "measurementTime": "1 s",
        "measurementBatchSize": 1,
        "params": {
            "implementation": "LinkedList",
            "size": "100"
        },
        "primaryMetric": {
            "score": 20.0,
            "scoreError": 1.0,
            "scoreConfidence": [19.0, 21.0],
            "scoreUnit": "ns/op",
            "rawData": [[19.5, 20.5], [20.0, 20.0]]
        },
        "secondaryMetrics": {}
    }
]"#;

/// Minimal result file: the `pkg.Bench.run` grid with parameters declared
/// size-first, so the default axis is `impl`.
pub const SIZE_FIRST_RESULTS: &str = r#"[
    {"benchmark": "pkg.Bench.run", "params": {"size": "10", "impl": "A"},
     "primaryMetric": {"score": 1.0, "scoreError": 0.1, "scoreConfidence": [0.9, 1.1], "scoreUnit": "ns/op"}},
    {"benchmark": "pkg.Bench.run", "params": {"size": "10", "impl": "B"},
     "primaryMetric": {"score": 3.0, "scoreError": 0.1, "scoreConfidence": [2.9, 3.1], "scoreUnit": "ns/op"}},
    {"benchmark": "pkg.Bench.run", "params": {"size": "100", "impl": "A"},
     "primaryMetric": {"score": 2.0, "scoreError": 0.1, "scoreConfidence": [1.9, 2.1], "scoreUnit": "ns/op"}},
    {"benchmark": "pkg.Bench.run", "params": {"size": "100", "impl": "B"},
     "primaryMetric": {"score": 4.0, "scoreError": 0.1, "scoreConfidence": [3.9, 4.1], "scoreUnit": "ns/op"}}
]"#;

/// Result file whose second benchmark mixes units.
pub const INCONSISTENT_RESULTS: &str = r#"[
    {"benchmark": "pkg.Good.run", "params": {"n": "1"},
     "primaryMetric": {"score": 1.0, "scoreError": 0.1, "scoreConfidence": [0.9, 1.1], "scoreUnit": "ns/op"}},
    {"benchmark": "pkg.Bad.run", "params": {"n": "1"},
     "primaryMetric": {"score": 1.0, "scoreError": 0.1, "scoreConfidence": [0.9, 1.1], "scoreUnit": "ns/op"}},
    {"benchmark": "pkg.Bad.run", "params": {"n": "2"},
     "primaryMetric": {"score": 1.0, "scoreError": 0.1, "scoreConfidence": [0.9, 1.1], "scoreUnit": "ops/s"}}
]"#;

/// Registry declaring a class-level plot and a method-level plot.
pub const REGISTRY_JSON: &str = r#"{
    "classes": {
        "org.lists.ListBench": [
            { "type": "bars", "log_scale": true }
        ]
    },
    "methods": {
        "org.lists.ListBench.add": [
            { "axis": "implementation", "type": "lines", "filters": { "size": "^100$" }, "title": "add by implementation" }
        ]
    }
}"#;

/// Same registry as [`REGISTRY_JSON`], in YAML.
pub const REGISTRY_YAML: &str = r#"classes:
  org.lists.ListBench:
    - type: bars
      log_scale: true
methods:
  org.lists.ListBench.add:
    - axis: implementation
      type: lines
      filters:
        size: "^100$"
      title: add by implementation
"#;
