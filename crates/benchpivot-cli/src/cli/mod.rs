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

//! CLI command definitions and argument parsing.

use crate::commands::{self, OutputFormat, PivotArgs};
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use benchpivot_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// List benchmark groups
    ///
    /// Groups the records of a JMH result file by benchmark identity and
    /// lists them in first-seen order. Inconsistent groups are reported on
    /// stderr.
    Groups {
        /// JMH result file (JSON)
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Pivot one benchmark
    ///
    /// Re-keys the records of one benchmark by (series label, axis label)
    /// and writes the resulting matrix.
    Pivot {
        /// JMH result file (JSON)
        #[arg(value_name = "FILE")]
        file: String,

        /// Benchmark identity or short name (Class.method)
        #[arg(short, long)]
        benchmark: String,

        /// Parameter key to use as the category axis
        #[arg(short, long)]
        axis: Option<String>,

        /// Keep only records whose KEY value matches PATTERN (repeatable)
        #[arg(long = "filter", value_name = "KEY=PATTERN")]
        filters: Vec<String>,

        /// Default the axis to the first parameter key instead of the second
        #[arg(long)]
        first_key_axis: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build the full report
    ///
    /// Pivots every benchmark under every plot declared for it in the
    /// registry, or under the default plot. Rejected groups and failed plots
    /// are listed in the report and do not fail the command.
    Report {
        /// JMH result file (JSON)
        #[arg(value_name = "FILE")]
        file: String,

        /// Plot registry (JSON, or YAML by .yaml/.yml extension)
        #[arg(short, long, value_name = "REGISTRY")]
        plots: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pivot groups in parallel
        #[arg(long)]
        parallel: bool,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if input cannot be read or parsed, or the command
    /// itself fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Groups { file } => commands::groups(&file),
            Commands::Pivot {
                file,
                benchmark,
                axis,
                filters,
                first_key_axis,
                format,
                output,
            } => commands::pivot(
                &file,
                &PivotArgs {
                    benchmark,
                    axis,
                    filters,
                    first_key_axis,
                    format,
                    output,
                },
            ),
            Commands::Report {
                file,
                plots,
                format,
                output,
                parallel,
            } => commands::report(&file, plots.as_deref(), format, output.as_deref(), parallel),
        }
    }
}
