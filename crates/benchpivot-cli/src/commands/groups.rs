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

//! Groups command - list benchmark groups

use super::load_records;
use crate::error::CliError;
use benchpivot_core::group_partitioned;
use colored::Colorize;

/// List the benchmark groups of a result file in first-seen order.
///
/// Each group shows its chapter number, short name, identity, unit,
/// parameter keys and record count. Rejected groups go to stderr.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use benchpivot_cli::commands::groups;
///
/// # fn main() -> Result<(), benchpivot_cli::error::CliError> {
/// groups("jmh-result.json")?;
/// # Ok(())
/// # }
/// ```
pub fn groups(file: &str) -> Result<(), CliError> {
    let records = load_records(file)?;
    let grouping = group_partitioned(records);

    for (i, group) in grouping.groups.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            group.short_name().bold(),
            group.benchmark_id()
        );
        let keys = if group.param_keys().is_empty() {
            "<none>".to_string()
        } else {
            group.param_keys().join(", ")
        };
        println!(
            "   {} {}  {} {}  {} {}",
            "unit:".cyan(),
            group.unit(),
            "params:".cyan(),
            keys,
            "records:".cyan(),
            group.len()
        );
        if let Some(settings) = group.run_settings() {
            if let Some(measurement) = &settings.measurement {
                println!("   {} {}", "measurement:".cyan(), measurement.describe());
            }
        }
    }

    for err in &grouping.rejected {
        eprintln!("{} {}", "rejected:".yellow().bold(), err);
    }

    Ok(())
}
