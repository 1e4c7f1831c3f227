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

//! Grouping and pivot throughput.

use benchpivot_core::{build_report, group, pivot, MeasurementRecord, Params, PlotConfiguration, PlotRegistry, Summary};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const RECORD_COUNTS: [usize; 3] = [100, 1_000, 10_000];

/// `records` runs spread over 10 benchmarks, each a grid of
/// implementation × size × threads.
fn generate(records: usize) -> Vec<MeasurementRecord> {
    (0..records)
        .map(|i| {
            let benchmark = i % 10;
            let cell = i / 10;
            MeasurementRecord::new(
                format!("org.bench.Suite{}.run", benchmark),
                Params::new()
                    .with("implementation", format!("Impl{}", cell % 8))
                    .with("size", format!("{}", 10 * (cell / 8 % 16 + 1)))
                    .with("threads", format!("{}", cell / 128 + 1)),
                Summary::new(i as f64, 0.5, "ns/op"),
            )
        })
        .collect()
}

fn bench_group(c: &mut Criterion) {
    let mut bench = c.benchmark_group("group");
    for count in RECORD_COUNTS {
        let records = generate(count);
        bench.throughput(Throughput::Elements(count as u64));
        bench.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| group(black_box(records.clone())))
        });
    }
    bench.finish();
}

fn bench_pivot(c: &mut Criterion) {
    let mut bench = c.benchmark_group("pivot");
    let config = PlotConfiguration::builder()
        .filter("implementation", "^Impl[0-3]$")
        .build()
        .unwrap();
    for count in RECORD_COUNTS {
        let groups = group(generate(count)).unwrap();
        bench.throughput(Throughput::Elements(count as u64));
        bench.bench_with_input(BenchmarkId::new("default", count), &groups, |b, groups| {
            b.iter(|| {
                for g in groups {
                    black_box(pivot(g, &PlotConfiguration::default()).unwrap());
                }
            })
        });
        bench.bench_with_input(BenchmarkId::new("filtered", count), &groups, |b, groups| {
            b.iter(|| {
                for g in groups {
                    black_box(pivot(g, &config).unwrap());
                }
            })
        });
    }
    bench.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut bench = c.benchmark_group("report");
    let registry = PlotRegistry::new();
    for count in RECORD_COUNTS {
        let records = generate(count);
        bench.throughput(Throughput::Elements(count as u64));
        bench.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| build_report(black_box(records.clone()), &registry))
        });
    }
    bench.finish();
}

criterion_group!(benches, bench_group, bench_pivot, bench_report);
criterion_main!(benches);
