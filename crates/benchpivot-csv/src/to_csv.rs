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

//! Benchmark groups and pivoted datasets as CSV tables.

use crate::error::{CsvError, Result};
use benchpivot_core::{BenchmarkGroup, PivotedDataset, SERIES_SEPARATOR};
use std::io::Write;

/// Header of the score column.
pub const SCORE_HEADER: &str = "Score";
/// Header of the score error column.
pub const ERROR_HEADER: &str = "Error (±)";
/// Header of the unit column.
pub const UNIT_HEADER: &str = "Unit";

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Digits after the decimal point for scores and errors (default: 3)
    pub precision: usize,
    /// Include score error columns (default: true)
    pub include_errors: bool,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            precision: 3,
            include_errors: true,
        }
    }
}

/// Convert a group to its result table: one row per record, in record order.
///
/// Columns are the parameter keys in first-seen order followed by `Score`,
/// `Error (±)` and `Unit`.
///
/// # Example
/// ```
/// use benchpivot_core::{group, MeasurementRecord, Params, Summary};
/// use benchpivot_csv::group_to_csv;
///
/// let groups = group(vec![MeasurementRecord::new(
///     "pkg.Bench.run",
///     Params::new().with("size", "10"),
///     Summary::new(1.23456, 0.1, "ns/op"),
/// )])
/// .unwrap();
/// let csv = group_to_csv(groups.get("pkg.Bench.run").unwrap()).unwrap();
/// assert_eq!(csv, "size,Score,Error (±),Unit\n10,1.235,0.100,ns/op\n");
/// ```
pub fn group_to_csv(group: &BenchmarkGroup) -> Result<String> {
    group_to_csv_with_config(group, &ToCsvConfig::default())
}

/// [`group_to_csv`] with custom configuration.
pub fn group_to_csv_with_config(group: &BenchmarkGroup, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    group_to_csv_writer(group, &mut buffer, config)?;
    into_string(buffer, "group table")
}

/// Write a group's result table to `writer`.
pub fn group_to_csv_writer<W: Write>(group: &BenchmarkGroup, writer: W, config: &ToCsvConfig) -> Result<()> {
    let mut wtr = csv_writer(writer, config);

    if config.include_headers {
        let mut header: Vec<&str> = group.param_keys().iter().map(String::as_str).collect();
        header.push(SCORE_HEADER);
        if config.include_errors {
            header.push(ERROR_HEADER);
        }
        header.push(UNIT_HEADER);
        wtr.write_record(&header)?;
    }

    for record in group.records() {
        let mut row: Vec<String> = group
            .param_keys()
            .iter()
            .map(|key| record.param(key).unwrap_or_default().to_string())
            .collect();
        row.push(format_value(record.summary.mean, config.precision));
        if config.include_errors {
            row.push(format_value(record.summary.error, config.precision));
        }
        row.push(record.unit().to_string());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Convert a dataset to a matrix: one row per series label, one column per
/// axis label, empty fields for absent cells.
///
/// The corner header names the series keys (joined like the labels); with
/// errors enabled every axis column is followed by its error column.
///
/// # Example
/// ```
/// use benchpivot_core::{group, pivot, MeasurementRecord, Params, PlotConfiguration, Summary};
/// use benchpivot_csv::{dataset_to_csv_with_config, ToCsvConfig};
///
/// let records = vec![
///     MeasurementRecord::new("b", Params::new().with("impl", "A").with("size", "1"), Summary::new(1.0, 0.1, "ns/op")),
///     MeasurementRecord::new("b", Params::new().with("impl", "B").with("size", "2"), Summary::new(2.0, 0.1, "ns/op")),
/// ];
/// let groups = group(records).unwrap();
/// let dataset = pivot(groups.get("b").unwrap(), &PlotConfiguration::default()).unwrap();
///
/// let config = ToCsvConfig { include_errors: false, precision: 1, ..Default::default() };
/// let csv = dataset_to_csv_with_config(&dataset, &config).unwrap();
/// assert_eq!(csv, "impl,1,2\nA,1.0,\nB,,2.0\n");
/// ```
pub fn dataset_to_csv(dataset: &PivotedDataset) -> Result<String> {
    dataset_to_csv_with_config(dataset, &ToCsvConfig::default())
}

/// [`dataset_to_csv`] with custom configuration.
pub fn dataset_to_csv_with_config(dataset: &PivotedDataset, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    dataset_to_csv_writer(dataset, &mut buffer, config)?;
    into_string(buffer, "dataset table")
}

/// Write a dataset matrix to `writer`.
pub fn dataset_to_csv_writer<W: Write>(dataset: &PivotedDataset, writer: W, config: &ToCsvConfig) -> Result<()> {
    let mut wtr = csv_writer(writer, config);

    if config.include_headers {
        let mut header = vec![dataset.series_keys().join(SERIES_SEPARATOR)];
        for axis in dataset.axis_labels() {
            header.push(axis.clone());
            if config.include_errors {
                header.push(format!("{} {}", axis, ERROR_HEADER));
            }
        }
        wtr.write_record(&header)?;
    }

    for (series, cells) in dataset.rows() {
        let mut row = vec![series.to_string()];
        for cell in cells {
            row.push(cell.map_or_else(String::new, |c| format_value(c.mean, config.precision)));
            if config.include_errors {
                row.push(cell.map_or_else(String::new, |c| format_value(c.error, config.precision)));
            }
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

fn csv_writer<W: Write>(writer: W, config: &ToCsvConfig) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer)
}

fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

fn into_string(buffer: Vec<u8>, context: &str) -> Result<String> {
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: context.to_string(),
    })
}
