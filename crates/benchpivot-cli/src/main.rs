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

//! benchpivot command line interface

use benchpivot_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;

/// benchpivot - group and pivot JMH benchmark results
///
/// # Examples
///
/// ```bash
/// # List benchmarks
/// benchpivot groups jmh-result.json
///
/// # Pivot one benchmark by size, ArrayList series only
/// benchpivot pivot jmh-result.json -b ListBench.add -a size --filter implementation=^Array -f csv
///
/// # Full report with declared plots
/// benchpivot report jmh-result.json --plots plots.yaml -o report.json
/// ```
#[derive(Parser)]
#[command(name = "benchpivot")]
#[command(author, version, about = "benchpivot - group and pivot JMH benchmark results", long_about = None)]
struct Cli {
    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    benchpivot_cli::init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
