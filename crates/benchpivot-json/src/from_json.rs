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

//! JMH result JSON to measurement records.
//!
//! The input is the array written by `-rf json`: one object per benchmark
//! run, in execution order. Record order in the output is array order.

use crate::error::{JsonError, Result};
use benchpivot_core::{IterationSettings, MeasurementRecord, Params, RunSettings, Summary};
use serde_json::{Map, Value as JsonValue};
use std::io::Read;
use tracing::debug;

/// Default maximum number of runs accepted from one document (1,000,000).
pub const DEFAULT_MAX_RECORDS: usize = 1_000_000;

/// Configuration for result ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// Maximum number of runs (default: 1,000,000)
    ///
    /// Set to `None` to disable (not recommended for untrusted input).
    pub max_records: Option<usize>,

    /// Keep per-iteration `rawData` samples (default: true)
    pub keep_raw_data: bool,

    /// Read the harness run settings (default: true)
    pub read_run_settings: bool,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            max_records: Some(DEFAULT_MAX_RECORDS),
            keep_raw_data: true,
            read_run_settings: true,
        }
    }
}

impl FromJsonConfig {
    /// Create a new builder for configuring ingestion.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchpivot_json::FromJsonConfig;
    ///
    /// let config = FromJsonConfig::builder()
    ///     .max_records(10_000)
    ///     .keep_raw_data(false)
    ///     .build();
    /// assert_eq!(config.max_records, Some(10_000));
    /// ```
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for [`FromJsonConfig`].
#[derive(Debug, Clone, Default)]
pub struct FromJsonConfigBuilder {
    config: FromJsonConfig,
}

impl FromJsonConfigBuilder {
    /// Set the maximum number of runs.
    pub fn max_records(mut self, limit: usize) -> Self {
        self.config.max_records = Some(limit);
        self
    }

    /// Remove the run count limit.
    pub fn unlimited(mut self) -> Self {
        self.config.max_records = None;
        self
    }

    pub fn keep_raw_data(mut self, keep: bool) -> Self {
        self.config.keep_raw_data = keep;
        self
    }

    pub fn read_run_settings(mut self, read: bool) -> Self {
        self.config.read_run_settings = read;
        self
    }

    pub fn build(self) -> FromJsonConfig {
        self.config
    }
}

/// Parse a JMH result document.
///
/// # Examples
///
/// ```
/// use benchpivot_json::{from_json, FromJsonConfig};
///
/// let json = r#"[{
///     "benchmark": "pkg.Bench.run",
///     "params": {"size": 100},
///     "primaryMetric": {"score": 1.5, "scoreError": "NaN", "scoreUnit": "ns/op"}
/// }]"#;
/// let records = from_json(json, &FromJsonConfig::default()).unwrap();
/// assert_eq!(records[0].param("size"), Some("100"));
/// assert!(records[0].summary.error.is_nan());
/// ```
///
/// # Errors
///
/// [`JsonError::Syntax`] for malformed JSON, otherwise the first structural
/// problem found, tagged with the run index.
pub fn from_json(json: &str, config: &FromJsonConfig) -> Result<Vec<MeasurementRecord>> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(&value, config)
}

/// Parse a JMH result document from a reader.
pub fn from_reader<R: Read>(reader: R, config: &FromJsonConfig) -> Result<Vec<MeasurementRecord>> {
    let value: JsonValue = serde_json::from_reader(reader)?;
    from_json_value(&value, config)
}

/// Convert an already parsed document.
///
/// # Errors
///
/// [`JsonError::InvalidRoot`] unless `value` is an array of objects, plus the
/// field errors described on [`from_json`].
pub fn from_json_value(value: &JsonValue, config: &FromJsonConfig) -> Result<Vec<MeasurementRecord>> {
    let runs = match value {
        JsonValue::Array(runs) => runs,
        other => {
            return Err(JsonError::InvalidRoot {
                expected: "array",
                found: json_type(other),
            })
        }
    };

    if let Some(limit) = config.max_records {
        if runs.len() > limit {
            return Err(JsonError::TooManyRecords {
                limit,
                found: runs.len(),
            });
        }
    }

    let records = runs
        .iter()
        .enumerate()
        .map(|(index, run)| match run {
            JsonValue::Object(run) => parse_run(index, run, config),
            _ => Err(JsonError::InvalidField {
                index,
                field: "<run>".to_string(),
                expected: "an object",
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(records = records.len(), "parsed result document");
    Ok(records)
}

fn parse_run(index: usize, run: &Map<String, JsonValue>, config: &FromJsonConfig) -> Result<MeasurementRecord> {
    let benchmark_id = required_str(index, run, "benchmark", "benchmark")?;
    let parameters = match run.get("params") {
        None | Some(JsonValue::Null) => Params::new(),
        Some(JsonValue::Object(params)) => parse_params(index, params)?,
        Some(_) => return Err(invalid(index, "params", "an object")),
    };

    let metric = match run.get("primaryMetric") {
        Some(JsonValue::Object(metric)) => metric,
        Some(_) => return Err(invalid(index, "primaryMetric", "an object")),
        None => return Err(missing(index, "primaryMetric")),
    };

    let mean = match metric.get("score") {
        Some(score) => number(score).ok_or_else(|| invalid(index, "primaryMetric.score", "a number"))?,
        None => return Err(missing(index, "primaryMetric.score")),
    };
    let error = match metric.get("scoreError") {
        Some(error) => number(error).ok_or_else(|| invalid(index, "primaryMetric.scoreError", "a number"))?,
        None => f64::NAN,
    };
    let unit = required_str(index, metric, "scoreUnit", "primaryMetric.scoreUnit")?;

    let mut summary = Summary::new(mean, error, unit);
    if let Some(confidence) = metric.get("scoreConfidence") {
        let (low, high) = confidence_bounds(confidence)
            .ok_or_else(|| invalid(index, "primaryMetric.scoreConfidence", "a pair of numbers"))?;
        summary = summary.with_confidence(low, high);
    }

    let mut record = MeasurementRecord::new(benchmark_id, parameters, summary);

    if config.keep_raw_data {
        if let Some(raw) = metric.get("rawData") {
            let samples =
                raw_samples(raw).ok_or_else(|| invalid(index, "primaryMetric.rawData", "an array of number arrays"))?;
            record = record.with_raw_samples(samples);
        }
    }

    if config.read_run_settings {
        if let Some(settings) = run_settings(index, run)? {
            record = record.with_run_settings(settings);
        }
    }

    Ok(record)
}

fn parse_params(index: usize, params: &Map<String, JsonValue>) -> Result<Params> {
    params
        .iter()
        .map(|(key, value)| {
            let text = match value {
                JsonValue::String(s) => s.clone(),
                JsonValue::Number(n) => n.to_string(),
                JsonValue::Bool(b) => b.to_string(),
                _ => {
                    return Err(invalid(
                        index,
                        &format!("params.{}", key),
                        "a string, number or boolean",
                    ))
                }
            };
            Ok((key.clone(), text))
        })
        .collect()
}

fn run_settings(index: usize, run: &Map<String, JsonValue>) -> Result<Option<RunSettings>> {
    let settings = RunSettings {
        harness_version: optional_str(index, run, "jmhVersion")?,
        mode: optional_str(index, run, "mode")?,
        threads: optional_u32(index, run, "threads")?,
        forks: optional_u32(index, run, "forks")?,
        warmup: iteration_settings(index, run, "warmup")?,
        measurement: iteration_settings(index, run, "measurement")?,
    };
    if settings == RunSettings::default() {
        Ok(None)
    } else {
        Ok(Some(settings))
    }
}

fn iteration_settings(index: usize, run: &Map<String, JsonValue>, phase: &str) -> Result<Option<IterationSettings>> {
    let Some(iterations) = optional_u32(index, run, &format!("{}Iterations", phase))? else {
        return Ok(None);
    };
    Ok(Some(IterationSettings {
        iterations,
        time: optional_str(index, run, &format!("{}Time", phase))?,
        batch_size: optional_u32(index, run, &format!("{}BatchSize", phase))?.unwrap_or(1),
    }))
}

/// JSON number, or one of the strings the harness writes for non-finite
/// values (`"NaN"`, `"Infinity"`, `"-Infinity"`).
fn number(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

fn confidence_bounds(value: &JsonValue) -> Option<(f64, f64)> {
    match value.as_array()?.as_slice() {
        [low, high] => Some((number(low)?, number(high)?)),
        _ => None,
    }
}

fn raw_samples(value: &JsonValue) -> Option<Vec<Vec<f64>>> {
    value
        .as_array()?
        .iter()
        .map(|fork| fork.as_array()?.iter().map(number).collect::<Option<Vec<f64>>>())
        .collect()
}

fn required_str(index: usize, object: &Map<String, JsonValue>, key: &str, field: &str) -> Result<String> {
    match object.get(key) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(_) => Err(invalid(index, field, "a string")),
        None => Err(missing(index, field)),
    }
}

fn optional_str(index: usize, object: &Map<String, JsonValue>, key: &str) -> Result<Option<String>> {
    match object.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(index, key, "a string")),
    }
}

fn optional_u32(index: usize, object: &Map<String, JsonValue>, key: &str) -> Result<Option<u32>> {
    match object.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid(index, key, "a non-negative integer")),
    }
}

fn missing(index: usize, field: &str) -> JsonError {
    JsonError::MissingField {
        index,
        field: field.to_string(),
    }
}

fn invalid(index: usize, field: &str, expected: &'static str) -> JsonError {
    JsonError::InvalidField {
        index,
        field: field.to_string(),
        expected,
    }
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
