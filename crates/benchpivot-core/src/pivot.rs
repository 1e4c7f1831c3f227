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

//! Pivot engine: re-keys a benchmark group by an axis and a series dimension.
//!
//! # Key layout
//!
//! The group's parameter keys are partitioned into at most one axis key and
//! the remaining series keys:
//!
//! - an explicit [`PlotConfiguration::axis_key`] wins and must exist;
//! - otherwise, with two or more keys, [`AxisDefault`] picks the second (or
//!   first) key in first-seen order;
//! - otherwise there is no axis key: every record gets the empty axis label
//!   and the lone key, if any, labels the series.
//!
//! # Labels
//!
//! The axis label is the record's value for the axis key. The series label is
//! the record's values for the series keys joined with `" - "`. Both label
//! lists keep first-seen order; nothing is sorted.
//!
//! [`AxisDefault`]: crate::AxisDefault

use crate::config::PlotConfiguration;
use crate::error::{ConfigurationError, DuplicateCellError, PivotResult};
use crate::group::BenchmarkGroup;
use crate::record::MeasurementRecord;
use std::collections::HashMap;
use tracing::debug;

/// Separator between series-key values in a series label.
pub const SERIES_SEPARATOR: &str = " - ";

/// One populated `(series, axis)` position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub mean: f64,
    pub error: f64,
    pub unit: String,
}

/// A cell together with its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    pub series_label: String,
    pub axis_label: String,
    pub cell: Cell,
}

/// How a group's parameter keys are split into axis and series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    /// Axis key, `None` when the axis dimension degenerates.
    pub axis_key: Option<String>,
    /// Series keys in first-seen order.
    pub series_keys: Vec<String>,
}

impl KeyLayout {
    /// Resolve the layout of `group` under `config`, leaving out `excluded`.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::UnknownAxisKey`] if the explicit axis key is
    ///   not a parameter of the group
    /// - [`ConfigurationError::SplitIsAxis`] if the explicit axis key is the
    ///   excluded key
    pub fn resolve(
        group: &BenchmarkGroup,
        config: &PlotConfiguration,
        excluded: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let candidates: Vec<&String> = group
            .param_keys()
            .iter()
            .filter(|k| Some(k.as_str()) != excluded)
            .collect();

        let axis_key = match config.axis_key() {
            Some(key) if !group.has_param(key) => {
                return Err(ConfigurationError::UnknownAxisKey {
                    benchmark_id: group.benchmark_id().to_string(),
                    axis_key: key.to_string(),
                    available: group.param_keys().to_vec(),
                });
            }
            Some(key) if Some(key) == excluded => {
                return Err(ConfigurationError::SplitIsAxis {
                    key: key.to_string(),
                });
            }
            Some(key) => Some(key.to_string()),
            None if candidates.len() > 1 => {
                Some(candidates[config.axis_default().position()].clone())
            }
            None => None,
        };

        let series_keys = candidates
            .into_iter()
            .filter(|k| Some(k.as_str()) != axis_key.as_deref())
            .cloned()
            .collect();

        Ok(Self {
            axis_key,
            series_keys,
        })
    }

    /// Axis label of `record`; empty without an axis key.
    pub fn axis_label(&self, record: &MeasurementRecord) -> String {
        self.axis_key
            .as_deref()
            .and_then(|key| record.param(key))
            .unwrap_or_default()
            .to_string()
    }

    /// Series label of `record`; empty without series keys.
    pub fn series_label(&self, record: &MeasurementRecord) -> String {
        self.series_keys
            .iter()
            .map(|key| record.param(key).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(SERIES_SEPARATOR)
    }
}

/// Records of one group re-keyed by `(series label, axis label)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedDataset {
    benchmark_id: String,
    unit: String,
    layout: KeyLayout,
    axis_labels: Vec<String>,
    series_labels: Vec<String>,
    entries: Vec<CellEntry>,
    index: HashMap<(String, String), usize>,
}

impl PivotedDataset {
    fn empty(benchmark_id: &str, unit: &str, layout: KeyLayout) -> Self {
        Self {
            benchmark_id: benchmark_id.to_string(),
            unit: unit.to_string(),
            layout,
            axis_labels: Vec::new(),
            series_labels: Vec::new(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn benchmark_id(&self) -> &str {
        &self.benchmark_id
    }

    /// Unit of every cell.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Resolved axis key, the category axis title.
    pub fn axis_key(&self) -> Option<&str> {
        self.layout.axis_key.as_deref()
    }

    pub fn series_keys(&self) -> &[String] {
        &self.layout.series_keys
    }

    /// Distinct axis labels, first-seen order.
    pub fn axis_labels(&self) -> &[String] {
        &self.axis_labels
    }

    /// Distinct series labels, first-seen order.
    pub fn series_labels(&self) -> &[String] {
        &self.series_labels
    }

    /// Cell at `(series_label, axis_label)`.
    pub fn cell(&self, series_label: &str, axis_label: &str) -> Option<&Cell> {
        self.index
            .get(&(series_label.to_string(), axis_label.to_string()))
            .map(|&i| &self.entries[i].cell)
    }

    /// Cells in insertion (record) order.
    pub fn cells(&self) -> &[CellEntry] {
        &self.entries
    }

    /// Number of populated cells, equal to the number of retained records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Series-major matrix: one row per series label, one slot per axis label.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<Option<&Cell>>)> {
        self.series_labels.iter().map(move |series| {
            let row = self
                .axis_labels
                .iter()
                .map(|axis| self.cell(series, axis))
                .collect();
            (series.as_str(), row)
        })
    }

    fn insert(
        &mut self,
        position: usize,
        positions: &mut Vec<usize>,
        series_label: String,
        axis_label: String,
        cell: Cell,
    ) -> Result<(), DuplicateCellError> {
        let key = (series_label, axis_label);
        if let Some(&existing) = self.index.get(&key) {
            return Err(DuplicateCellError {
                benchmark_id: self.benchmark_id.clone(),
                series_label: key.0,
                axis_label: key.1,
                first_record: positions[existing],
                second_record: position,
            });
        }
        if !self.series_labels.contains(&key.0) {
            self.series_labels.push(key.0.clone());
        }
        if !self.axis_labels.contains(&key.1) {
            self.axis_labels.push(key.1.clone());
        }
        self.index.insert(key.clone(), self.entries.len());
        positions.push(position);
        self.entries.push(CellEntry {
            series_label: key.0,
            axis_label: key.1,
            cell,
        });
        Ok(())
    }
}

/// Pivot a group under a configuration.
///
/// Records failing the series filter are left out silently. The
/// configuration's split key is not applied here, see [`pivot_split`].
///
/// # Errors
///
/// - [`ConfigurationError`] if the explicit axis key is not a parameter of
///   the group
/// - [`DuplicateCellError`] if two retained records produce the same label pair
///
/// # Example
///
/// ```
/// use benchpivot_core::{group, pivot, MeasurementRecord, Params, PlotConfiguration, Summary};
///
/// let records = ["10", "100"].iter().enumerate().map(|(i, size)| {
///     MeasurementRecord::new(
///         "pkg.Bench.run",
///         Params::new().with("impl", "A").with("size", *size),
///         Summary::new(i as f64, 0.0, "ns/op"),
///     )
/// });
/// let groups = group(records).unwrap();
/// let dataset = pivot(groups.get("pkg.Bench.run").unwrap(), &PlotConfiguration::default()).unwrap();
///
/// assert_eq!(dataset.axis_key(), Some("size"));
/// assert_eq!(dataset.axis_labels(), &["10", "100"]);
/// assert_eq!(dataset.series_labels(), &["A"]);
/// ```
pub fn pivot(group: &BenchmarkGroup, config: &PlotConfiguration) -> PivotResult<PivotedDataset> {
    let layout = KeyLayout::resolve(group, config, None)?;
    let retained = retained_records(group, config);
    Ok(build_dataset(group, layout, retained)?)
}

/// Pivot a group once per distinct value of the configuration's split key.
///
/// Partitions keep the first-seen order of the split values. The split key
/// takes no part in the axis/series layout. Without a split key, yields one
/// entry labelled with the empty string.
///
/// # Errors
///
/// As [`pivot`], plus [`ConfigurationError::UnknownSplitKey`] and
/// [`ConfigurationError::SplitIsAxis`].
pub fn pivot_split(
    group: &BenchmarkGroup,
    config: &PlotConfiguration,
) -> PivotResult<Vec<(String, PivotedDataset)>> {
    let Some(split_key) = config.split_by() else {
        return Ok(vec![(String::new(), pivot(group, config)?)]);
    };

    if !group.has_param(split_key) {
        return Err(ConfigurationError::UnknownSplitKey {
            benchmark_id: group.benchmark_id().to_string(),
            split_key: split_key.to_string(),
            available: group.param_keys().to_vec(),
        }
        .into());
    }

    let layout = KeyLayout::resolve(group, config, Some(split_key))?;

    let mut partitions: Vec<(String, Vec<(usize, &MeasurementRecord)>)> = Vec::new();
    for (position, record) in retained_records(group, config) {
        let value = record.param(split_key).unwrap_or_default();
        match partitions.iter_mut().find(|(v, _)| v == value) {
            Some((_, members)) => members.push((position, record)),
            None => partitions.push((value.to_string(), vec![(position, record)])),
        }
    }

    debug!(
        benchmark = group.benchmark_id(),
        split_key,
        partitions = partitions.len(),
        "split pivot"
    );

    let mut datasets = Vec::with_capacity(partitions.len());
    for (value, members) in partitions {
        datasets.push((value, build_dataset(group, layout.clone(), members)?));
    }
    Ok(datasets)
}

fn retained_records<'g>(
    group: &'g BenchmarkGroup,
    config: &PlotConfiguration,
) -> Vec<(usize, &'g MeasurementRecord)> {
    let filter = config.series_filter();
    let retained: Vec<_> = group
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(|key| record.param(key)))
        .collect();

    if retained.len() < group.len() {
        debug!(
            benchmark = group.benchmark_id(),
            kept = retained.len(),
            dropped = group.len() - retained.len(),
            "series filter excluded records"
        );
    }
    retained
}

fn build_dataset(
    group: &BenchmarkGroup,
    layout: KeyLayout,
    records: Vec<(usize, &MeasurementRecord)>,
) -> Result<PivotedDataset, DuplicateCellError> {
    debug!(
        benchmark = group.benchmark_id(),
        axis_key = layout.axis_key.as_deref().unwrap_or("<none>"),
        series_keys = ?layout.series_keys,
        "pivoting group"
    );

    let mut dataset = PivotedDataset::empty(group.benchmark_id(), group.unit(), layout);
    let mut positions = Vec::with_capacity(records.len());
    for (position, record) in records {
        let axis_label = dataset.layout.axis_label(record);
        let series_label = dataset.layout.series_label(record);
        let cell = Cell {
            mean: record.summary.mean,
            error: record.summary.error,
            unit: record.summary.unit.clone(),
        };
        dataset.insert(position, &mut positions, series_label, axis_label, cell)?;
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisDefault;
    use crate::error::PivotError;
    use crate::group::group;
    use crate::record::{Params, Summary};

    fn rec(params: &[(&str, &str)], mean: f64) -> MeasurementRecord {
        MeasurementRecord::new(
            "pkg.Bench.run",
            params.iter().copied().collect::<Params>(),
            Summary::new(mean, mean / 10.0, "ns/op"),
        )
    }

    fn bench(records: Vec<MeasurementRecord>) -> BenchmarkGroup {
        group(records).unwrap().into_vec().remove(0)
    }

    fn scenario() -> BenchmarkGroup {
        bench(vec![
            rec(&[("impl", "A"), ("size", "10")], 1.0),
            rec(&[("impl", "A"), ("size", "100")], 2.0),
            rec(&[("impl", "B"), ("size", "10")], 3.0),
            rec(&[("impl", "B"), ("size", "100")], 4.0),
        ])
    }

    #[test]
    fn test_end_to_end_default_layout() {
        let group = scenario();
        assert_eq!(group.short_name(), "Bench.run");

        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        assert_eq!(dataset.axis_key(), Some("size"));
        assert_eq!(dataset.series_keys(), &["impl"]);
        assert_eq!(dataset.series_labels(), &["A", "B"]);
        assert_eq!(dataset.axis_labels(), &["10", "100"]);
        assert_eq!(dataset.cell("A", "10").unwrap().mean, 1.0);
        assert_eq!(dataset.cell("B", "100").unwrap().mean, 4.0);
        assert_eq!(dataset.cell("B", "100").unwrap().unit, "ns/op");
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_filter_keeps_matching_records_only() {
        let config = PlotConfiguration::builder()
            .filter("impl", "^A$")
            .build()
            .unwrap();
        let dataset = pivot(&scenario(), &config).unwrap();
        assert_eq!(dataset.series_labels(), &["A"]);
        assert_eq!(dataset.axis_labels(), &["10", "100"]);
        assert_eq!(dataset.len(), 2);
        assert!(dataset.cell("B", "10").is_none());
    }

    #[test]
    fn test_filter_excluding_everything_gives_empty_dataset() {
        let config = PlotConfiguration::builder()
            .filter("impl", "^Z$")
            .build()
            .unwrap();
        let dataset = pivot(&scenario(), &config).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.axis_labels().is_empty());
        assert_eq!(dataset.axis_key(), Some("size"));
    }

    #[test]
    fn test_default_axis_is_second_key_of_three() {
        let group = bench(vec![rec(&[("impl", "A"), ("size", "1"), ("threads", "2")], 1.0)]);
        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        assert_eq!(dataset.axis_key(), Some("size"));
        assert_eq!(dataset.series_keys(), &["impl", "threads"]);
        assert_eq!(dataset.series_labels(), &["A - 2"]);
    }

    #[test]
    fn test_first_key_policy() {
        let config = PlotConfiguration::builder()
            .axis_default(AxisDefault::First)
            .build()
            .unwrap();
        let dataset = pivot(&scenario(), &config).unwrap();
        assert_eq!(dataset.axis_key(), Some("impl"));
        assert_eq!(dataset.axis_labels(), &["A", "B"]);
        assert_eq!(dataset.series_labels(), &["10", "100"]);
        assert_eq!(dataset.cell("100", "B").unwrap().mean, 4.0);
    }

    #[test]
    fn test_explicit_axis_key() {
        let config = PlotConfiguration::builder().axis_key("impl").build().unwrap();
        let dataset = pivot(&scenario(), &config).unwrap();
        assert_eq!(dataset.axis_key(), Some("impl"));
        assert_eq!(dataset.series_labels(), &["10", "100"]);
    }

    #[test]
    fn test_unknown_axis_key_is_configuration_error() {
        let config = PlotConfiguration::builder().axis_key("threads").build().unwrap();
        let err = pivot(&scenario(), &config).unwrap_err();
        assert!(matches!(
            err,
            PivotError::Configuration(ConfigurationError::UnknownAxisKey { .. })
        ));
    }

    #[test]
    fn test_single_key_has_no_axis() {
        let group = bench(vec![rec(&[("impl", "A")], 1.0), rec(&[("impl", "B")], 2.0)]);
        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        assert_eq!(dataset.axis_key(), None);
        assert_eq!(dataset.axis_labels(), &[""]);
        assert_eq!(dataset.series_labels(), &["A", "B"]);
        assert_eq!(dataset.cell("B", "").unwrap().mean, 2.0);
    }

    #[test]
    fn test_single_key_explicit_axis() {
        let group = bench(vec![rec(&[("impl", "A")], 1.0), rec(&[("impl", "B")], 2.0)]);
        let config = PlotConfiguration::builder().axis_key("impl").build().unwrap();
        let dataset = pivot(&group, &config).unwrap();
        assert_eq!(dataset.axis_labels(), &["A", "B"]);
        assert_eq!(dataset.series_labels(), &[""]);
    }

    #[test]
    fn test_no_params_single_cell() {
        let group = bench(vec![rec(&[], 5.0)]);
        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.cell("", "").unwrap().mean, 5.0);
    }

    #[test]
    fn test_no_params_two_records_collide() {
        let group = bench(vec![rec(&[], 5.0), rec(&[], 6.0)]);
        let err = pivot(&group, &PlotConfiguration::default()).unwrap_err();
        match err {
            PivotError::DuplicateCell(dup) => {
                assert_eq!(dup.first_record, 0);
                assert_eq!(dup.second_record, 1);
                assert_eq!(dup.series_label, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_label_pair_is_error() {
        let group = bench(vec![
            rec(&[("impl", "A"), ("size", "10")], 1.0),
            rec(&[("impl", "A"), ("size", "10")], 2.0),
        ]);
        let err = pivot(&group, &PlotConfiguration::default()).unwrap_err();
        assert_eq!(err.kind(), "DuplicateCellError");
    }

    #[test]
    fn test_labels_keep_first_seen_order() {
        let group = bench(vec![
            rec(&[("impl", "Zeta"), ("size", "1000")], 1.0),
            rec(&[("impl", "Alpha"), ("size", "10")], 2.0),
            rec(&[("impl", "Zeta"), ("size", "10")], 3.0),
        ]);
        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        assert_eq!(dataset.series_labels(), &["Zeta", "Alpha"]);
        assert_eq!(dataset.axis_labels(), &["1000", "10"]);
    }

    #[test]
    fn test_rows_matrix_has_gaps() {
        let group = bench(vec![
            rec(&[("impl", "A"), ("size", "10")], 1.0),
            rec(&[("impl", "B"), ("size", "100")], 2.0),
        ]);
        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        let rows: Vec<_> = dataset.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "A");
        assert_eq!(rows[0].1[0].map(|c| c.mean), Some(1.0));
        assert!(rows[0].1[1].is_none());
        assert!(rows[1].1[0].is_none());
    }

    #[test]
    fn test_split_partitions_by_value() {
        let group = bench(vec![
            rec(&[("impl", "A"), ("size", "10"), ("threads", "1")], 1.0),
            rec(&[("impl", "A"), ("size", "10"), ("threads", "8")], 2.0),
            rec(&[("impl", "B"), ("size", "10"), ("threads", "1")], 3.0),
            rec(&[("impl", "B"), ("size", "10"), ("threads", "8")], 4.0),
        ]);
        let config = PlotConfiguration::builder().split_by("threads").build().unwrap();
        let parts = pivot_split(&group, &config).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].0, "1");
        assert_eq!(parts[1].0, "8");
        let (_, eight) = &parts[1];
        assert_eq!(eight.axis_key(), Some("size"));
        assert_eq!(eight.series_keys(), &["impl"]);
        assert_eq!(eight.cell("B", "10").unwrap().mean, 4.0);
    }

    #[test]
    fn test_split_without_key_is_single_partition() {
        let parts = pivot_split(&scenario(), &PlotConfiguration::default()).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].0, "");
        assert_eq!(parts[0].1.len(), 4);
    }

    #[test]
    fn test_split_unknown_key() {
        let config = PlotConfiguration::builder().split_by("threads").build().unwrap();
        let err = pivot_split(&scenario(), &config).unwrap_err();
        assert!(matches!(
            err,
            PivotError::Configuration(ConfigurationError::UnknownSplitKey { .. })
        ));
    }

    #[test]
    fn test_split_key_cannot_be_axis() {
        let config = PlotConfiguration::builder()
            .split_by("size")
            .axis_key("size")
            .build()
            .unwrap();
        let err = pivot_split(&scenario(), &config).unwrap_err();
        assert!(matches!(
            err,
            PivotError::Configuration(ConfigurationError::SplitIsAxis { .. })
        ));
    }

    #[test]
    fn test_values_pass_through_verbatim() {
        let group = bench(vec![rec(&[("impl", "A"), ("size", "1")], 0.123456789)]);
        let dataset = pivot(&group, &PlotConfiguration::default()).unwrap();
        let cell = dataset.cell("A", "1").unwrap();
        assert_eq!(cell.mean, 0.123456789);
        assert_eq!(cell.error, 0.123456789 / 10.0);
    }
}
