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

//! Report command - every group under every declared plot

use super::{load_records, load_registry, write_output, OutputFormat};
use crate::error::CliError;
use benchpivot_core::{build_report, build_report_parallel, Report};
use benchpivot_csv::{dataset_to_csv, group_to_csv};
use benchpivot_json::{report_to_json, ToJsonConfig};
use colored::Colorize;

/// Build and write the full report of a result file.
///
/// Rejected groups and failed plots are part of the report and are also
/// listed on stderr; they do not fail the command.
///
/// # Errors
///
/// Returns `Err` if the result file or the registry cannot be read or
/// parsed, or the output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use benchpivot_cli::commands::{report, OutputFormat};
///
/// # fn main() -> Result<(), benchpivot_cli::error::CliError> {
/// report("jmh-result.json", Some("plots.yaml"), OutputFormat::Json, None, false)?;
/// # Ok(())
/// # }
/// ```
pub fn report(
    file: &str,
    plots: Option<&str>,
    format: OutputFormat,
    output: Option<&str>,
    parallel: bool,
) -> Result<(), CliError> {
    let records = load_records(file)?;
    let registry = load_registry(plots)?;

    let report = if parallel {
        build_report_parallel(records, &registry)
    } else {
        build_report(records, &registry)
    };
    print_problems(&report);

    let content = match format {
        OutputFormat::Json => {
            let mut json = report_to_json(&report, &ToJsonConfig::default());
            json.push('\n');
            json
        }
        OutputFormat::Csv => report_to_csv(&report)?,
    };
    write_output(&content, output)
}

/// Sections of CSV, one per chapter: a `#` title line, the group table, then
/// each dataset matrix under its own `#` line. A failed plot leaves a single
/// `# ... failed:` line. Rejected groups close the output under `# rejected`.
/// Sections are blank-line separated.
fn report_to_csv(report: &Report) -> Result<String, CliError> {
    let mut out = String::new();
    for chapter in &report.chapters {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "# {}. {} ({})\n",
            chapter.number,
            chapter.group.short_name(),
            chapter.group.benchmark_id()
        ));
        out.push_str(&group_to_csv(&chapter.group)?);

        for (index, plot) in chapter.plots.iter().enumerate() {
            let configuration = &plot.configuration;
            let title = configuration
                .title()
                .map(str::to_string)
                .unwrap_or_else(|| format!("plot {}", index + 1));
            let datasets = match &plot.result {
                Ok(datasets) => datasets,
                Err(err) => {
                    out.push('\n');
                    out.push_str(&format!("# {} failed: {}: {}\n", title, err.kind(), err));
                    continue;
                }
            };
            for (split, dataset) in datasets {
                out.push('\n');
                let heading = match (configuration.split_by(), dataset.axis_key()) {
                    (Some(key), _) => format!("# {} [{}={}]\n", title, key, split),
                    (None, Some(axis)) => format!("# {} by {}\n", title, axis),
                    (None, None) => format!("# {}\n", title),
                };
                out.push_str(&heading);
                out.push_str(&dataset_to_csv(dataset)?);
            }
        }
    }

    if !report.rejected.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("# rejected\n");
        for err in &report.rejected {
            out.push_str(&format!("# {}\n", err));
        }
    }
    Ok(out)
}

fn print_problems(report: &Report) {
    for err in &report.rejected {
        eprintln!("{} {}", "rejected:".yellow().bold(), err);
    }
    for chapter in &report.chapters {
        for err in chapter.failures() {
            eprintln!(
                "{} {}: {}",
                "plot failed:".yellow().bold(),
                chapter.group.short_name(),
                err
            );
        }
    }
}
