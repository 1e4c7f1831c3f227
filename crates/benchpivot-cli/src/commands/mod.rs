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

//! CLI command implementations

mod groups;
mod pivot;
mod report;

pub use groups::groups;
pub use pivot::{pivot, PivotArgs};
pub use report::report;

use crate::error::CliError;
use benchpivot_core::{MeasurementRecord, PlotRegistry, RegistryFile};
use benchpivot_json::FromJsonConfig;
use clap::ValueEnum;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Default maximum input file size (1 GB).
/// Can be overridden via the `BENCHPIVOT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "BENCHPIVOT_MAX_FILE_SIZE";

/// Output format of the `pivot` and `report` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON document
    #[default]
    Json,
    /// CSV tables
    Csv,
}

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// # Errors
///
/// [`CliError::FileTooLarge`] when the file exceeds the limit set by
/// `BENCHPIVOT_MAX_FILE_SIZE`, [`CliError::Io`] when it cannot be read.
///
/// # Examples
///
/// ```no_run
/// use benchpivot_cli::commands::read_file;
///
/// # fn main() -> Result<(), benchpivot_cli::error::CliError> {
/// let content = read_file("jmh-result.json")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Read and ingest a JMH result file.
pub fn load_records(path: &str) -> Result<Vec<MeasurementRecord>, CliError> {
    let content = read_file(path)?;
    let records = benchpivot_json::from_json(&content, &FromJsonConfig::default())?;
    debug!(path, records = records.len(), "loaded results");
    Ok(records)
}

/// Load a plot registry, or an empty one without a path.
///
/// `.yaml` and `.yml` files are read as YAML, anything else as JSON.
pub fn load_registry(path: Option<&str>) -> Result<PlotRegistry, CliError> {
    let Some(path) = path else {
        return Ok(PlotRegistry::new());
    };
    let content = read_file(path)?;

    let is_yaml = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        let file: RegistryFile =
            serde_yaml::from_str(&content).map_err(|e| CliError::Registry(e.to_string()))?;
        file.into_registry().map_err(|e| CliError::Registry(e.to_string()))
    } else {
        Ok(benchpivot_json::registry_from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_file_size() {
        assert_eq!(DEFAULT_MAX_FILE_SIZE, 1_073_741_824);
    }

    #[test]
    fn test_missing_registry_path_is_empty_registry() {
        assert!(load_registry(None).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/benchpivot/results.json").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
