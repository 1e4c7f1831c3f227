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

//! Pivot command - pivot one benchmark group

use super::{load_records, write_output, OutputFormat};
use crate::error::CliError;
use benchpivot_core::{
    group_partitioned, pivot as pivot_group, short_name, AxisDefault, BenchmarkGroup, Grouping,
    PlotConfiguration,
};
use benchpivot_csv::dataset_to_csv;
use benchpivot_json::{dataset_to_json, ToJsonConfig};

/// Options of the `pivot` command.
#[derive(Debug, Clone, Default)]
pub struct PivotArgs {
    /// Benchmark identity or short name.
    pub benchmark: String,
    pub axis: Option<String>,
    /// `KEY=PATTERN` filters.
    pub filters: Vec<String>,
    pub first_key_axis: bool,
    pub format: OutputFormat,
    pub output: Option<String>,
}

/// Pivot one benchmark group of a result file.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the benchmark is unknown or its
/// group was rejected, a filter is malformed, or the pivot fails.
///
/// # Examples
///
/// ```no_run
/// use benchpivot_cli::commands::{pivot, OutputFormat, PivotArgs};
///
/// # fn main() -> Result<(), benchpivot_cli::error::CliError> {
/// pivot("jmh-result.json", &PivotArgs {
///     benchmark: "ListBench.add".to_string(),
///     axis: Some("size".to_string()),
///     format: OutputFormat::Csv,
///     ..Default::default()
/// })?;
/// # Ok(())
/// # }
/// ```
pub fn pivot(file: &str, args: &PivotArgs) -> Result<(), CliError> {
    let records = load_records(file)?;
    let grouping = group_partitioned(records);

    let group = find_group(&grouping, &args.benchmark)?;

    let config = configuration(args)?;
    let dataset = pivot_group(group, &config)?;

    let content = match args.format {
        OutputFormat::Json => {
            let mut json = dataset_to_json(&dataset, &ToJsonConfig::default());
            json.push('\n');
            json
        }
        OutputFormat::Csv => dataset_to_csv(&dataset)?,
    };
    write_output(&content, args.output.as_deref())
}

/// Look a benchmark up by full identity, then by short name.
///
/// Rejected groups take part in the lookup so that naming one surfaces its
/// consistency error. A short name shared by several identities is an error.
fn find_group<'a>(grouping: &'a Grouping, wanted: &str) -> Result<&'a BenchmarkGroup, CliError> {
    if let Some(group) = grouping.groups.iter().find(|g| g.benchmark_id() == wanted) {
        return Ok(group);
    }
    if let Some(err) = grouping.rejected.iter().find(|e| e.benchmark_id == wanted) {
        return Err(err.clone().into());
    }

    let groups: Vec<_> = grouping.groups.iter().filter(|g| g.short_name() == wanted).collect();
    let rejected: Vec<_> = grouping
        .rejected
        .iter()
        .filter(|e| short_name(&e.benchmark_id) == wanted)
        .collect();

    match (groups.as_slice(), rejected.as_slice()) {
        ([group], []) => Ok(*group),
        ([], [err]) => Err((*err).clone().into()),
        ([], []) => {
            let available: Vec<_> = grouping.groups.ids().collect();
            Err(CliError::invalid_input(format!(
                "unknown benchmark '{}' (available: {})",
                wanted,
                available.join(", ")
            )))
        }
        _ => {
            let candidates: Vec<&str> = groups
                .iter()
                .map(|g| g.benchmark_id())
                .chain(rejected.iter().map(|e| e.benchmark_id.as_str()))
                .collect();
            Err(CliError::invalid_input(format!(
                "ambiguous benchmark '{}' (matches: {})",
                wanted,
                candidates.join(", ")
            )))
        }
    }
}

fn configuration(args: &PivotArgs) -> Result<PlotConfiguration, CliError> {
    let mut builder = PlotConfiguration::builder();
    if let Some(axis) = &args.axis {
        builder = builder.axis_key(axis.clone());
    }
    if args.first_key_axis {
        builder = builder.axis_default(AxisDefault::First);
    }
    for filter in &args.filters {
        let (key, pattern) = parse_filter(filter)?;
        builder = builder.filter(key, pattern);
    }
    Ok(builder.build()?)
}

/// Split `KEY=PATTERN` at the first `=`; the pattern may itself contain `=`.
fn parse_filter(filter: &str) -> Result<(&str, &str), CliError> {
    match filter.split_once('=') {
        Some((key, pattern)) if !key.is_empty() => Ok((key, pattern)),
        _ => Err(CliError::invalid_input(format!(
            "filter '{}' must have the form KEY=PATTERN",
            filter
        ))),
    }
}
