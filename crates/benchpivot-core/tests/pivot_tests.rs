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

//! Pivot scenarios over the shared fixtures.

use benchpivot_core::{
    build_report, group, pivot, pivot_split, AxisDefault, ConfigurationError, PivotError,
    PlotConfiguration, PlotRegistry,
};
use benchpivot_test::fixtures::{self, errors};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_impl_size_grid_end_to_end() {
    let report = build_report(fixtures::impl_size_grid(), &PlotRegistry::new());
    assert_eq!(report.chapters.len(), 1);

    let chapter = &report.chapters[0];
    assert_eq!(chapter.group.short_name(), "Bench.run");
    assert_eq!(chapter.group.unit(), "ns/op");

    let (_, split, dataset) = chapter.datasets().next().unwrap();
    assert_eq!(split, "");
    assert_eq!(dataset.axis_key(), Some("size"));
    assert_eq!(dataset.series_labels(), strings(&["A", "B"]).as_slice());
    assert_eq!(dataset.axis_labels(), strings(&["10", "100"]).as_slice());
    assert_eq!(dataset.cell("A", "10").unwrap().mean, 1.0);
    assert_eq!(dataset.cell("B", "100").unwrap().mean, 4.0);
    assert_eq!(dataset.cell("B", "100").unwrap().unit, "ns/op");
    assert_eq!(dataset.len(), 4);
}

#[test]
fn test_filter_keeps_matching_series() {
    let groups = group(fixtures::impl_size_grid()).unwrap();
    let config = PlotConfiguration::builder().filter("impl", "^A$").build().unwrap();
    let dataset = pivot(groups.get("pkg.Bench.run").unwrap(), &config).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.series_labels(), strings(&["A"]).as_slice());
    assert_eq!(dataset.axis_labels(), strings(&["10", "100"]).as_slice());
}

#[test]
fn test_default_axis_is_second_key() {
    let groups = group(fixtures::three_keys()).unwrap();
    let dataset = pivot(groups.get("pkg.Bench.run").unwrap(), &PlotConfiguration::default()).unwrap();
    assert_eq!(dataset.axis_key(), Some("size"));
    assert_eq!(dataset.series_keys(), strings(&["impl", "threads"]).as_slice());
    assert_eq!(dataset.series_labels(), strings(&["A - 4"]).as_slice());
}

#[test]
fn test_first_key_policy() {
    let groups = group(fixtures::impl_size_grid()).unwrap();
    let config = PlotConfiguration::builder()
        .axis_default(AxisDefault::First)
        .build()
        .unwrap();
    let dataset = pivot(groups.get("pkg.Bench.run").unwrap(), &config).unwrap();
    assert_eq!(dataset.axis_key(), Some("impl"));
    assert_eq!(dataset.series_labels(), strings(&["10", "100"]).as_slice());
    assert_eq!(dataset.cell("100", "B").unwrap().mean, 4.0);
}

#[test]
fn test_parameterless_group_has_single_cell() {
    let groups = group(fixtures::parameterless()).unwrap();
    let dataset = pivot(groups.get("Baseline").unwrap(), &PlotConfiguration::default()).unwrap();
    assert_eq!(dataset.axis_key(), None);
    assert_eq!(dataset.axis_labels(), strings(&[""]).as_slice());
    assert_eq!(dataset.series_labels(), strings(&[""]).as_slice());
    assert_eq!(dataset.cell("", "").unwrap().mean, 0.5);
}

#[test]
fn test_unknown_axis_key() {
    let groups = group(fixtures::impl_size_grid()).unwrap();
    let config = PlotConfiguration::builder().axis_key("threads").build().unwrap();
    let err = pivot(groups.get("pkg.Bench.run").unwrap(), &config).unwrap_err();
    match err {
        PivotError::Configuration(ConfigurationError::UnknownAxisKey { axis_key, available, .. }) => {
            assert_eq!(axis_key, "threads");
            assert_eq!(available, strings(&["impl", "size"]));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_colliding_labels_are_reported() {
    let groups = group(errors::colliding_labels()).unwrap();
    let err = pivot(groups.get("pkg.Bench.run").unwrap(), &PlotConfiguration::default()).unwrap_err();
    match err {
        PivotError::DuplicateCell(dup) => {
            assert_eq!(dup.series_label, "A");
            assert_eq!(dup.axis_label, "10");
            assert_eq!((dup.first_record, dup.second_record), (0, 1));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_split_by_threads() {
    let groups = group(fixtures::threaded_grid()).unwrap();
    let config = PlotConfiguration::builder().split_by("threads").build().unwrap();
    let parts = pivot_split(groups.get("pkg.Concurrent.run").unwrap(), &config).unwrap();

    let labels: Vec<_> = parts.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["1", "8"]);
    for (_, dataset) in &parts {
        assert_eq!(dataset.axis_key(), Some("size"));
        assert_eq!(dataset.series_keys(), strings(&["impl"]).as_slice());
        assert_eq!(dataset.len(), 4);
    }
    assert_eq!(parts[0].1.cell("B", "100").unwrap().mean, 4.0);
    assert_eq!(parts[1].1.cell("A", "10").unwrap().mean, 5.0);
}

#[test]
fn test_split_key_cannot_be_axis() {
    let groups = group(fixtures::threaded_grid()).unwrap();
    let config = PlotConfiguration::builder()
        .split_by("threads")
        .axis_key("threads")
        .build()
        .unwrap();
    let err = pivot_split(groups.get("pkg.Concurrent.run").unwrap(), &config).unwrap_err();
    assert_eq!(err.kind(), "ConfigurationError");
}

#[test]
fn test_registry_plots_in_report() {
    let mut registry = PlotRegistry::new();
    registry.declare_class(
        "org.lists.ListBench",
        PlotConfiguration::builder().log_scale(true).build().unwrap(),
    );
    registry.declare_method(
        "org.lists.ListBench.get",
        PlotConfiguration::builder()
            .axis_key("implementation")
            .filter("size", "^100$")
            .build()
            .unwrap(),
    );

    let report = build_report(fixtures::interleaved_benchmarks(), &registry);
    assert!(report.is_clean());
    assert_eq!(report.chapters[0].plots.len(), 1);
    assert_eq!(report.chapters[1].plots.len(), 2);

    let (_, _, by_impl) = report.chapters[1].datasets().nth(1).unwrap();
    assert_eq!(by_impl.axis_labels(), strings(&["ArrayList", "LinkedList"]).as_slice());
    assert_eq!(by_impl.series_labels(), strings(&["100"]).as_slice());
    assert_eq!(by_impl.cell("100", "LinkedList").unwrap().mean, 450.0);
}
