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

//! Pivoted datasets and reports to JSON.
//!
//! Non-finite means and errors become `null`; every list keeps the engine's
//! first-seen order.

use benchpivot_core::{
    AxisDefault, BenchmarkGroup, Chapter, ChartKind, ConsistencyError, IterationSettings,
    Orientation, PivotError, PivotedDataset, PlotConfiguration, PlotOutcome, Report, RunSettings,
};
use serde_json::{json, Map, Number, Value as JsonValue};

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Pretty-print the text form (default: true)
    pub pretty: bool,
    /// Add the series-major `matrix` next to the flat cell list (default: true)
    pub include_matrix: bool,
    /// Add each chapter's harness run settings (default: true)
    pub include_run_settings: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_matrix: true,
            include_run_settings: true,
        }
    }
}

/// Convert a dataset to a JSON string.
pub fn dataset_to_json(dataset: &PivotedDataset, config: &ToJsonConfig) -> String {
    render(&dataset_to_json_value(dataset, config), config)
}

/// Convert a report to a JSON string.
pub fn report_to_json(report: &Report, config: &ToJsonConfig) -> String {
    render(&report_to_json_value(report, config), config)
}

/// Convert a dataset to a `serde_json::Value`.
///
/// ```
/// use benchpivot_core::{pivot, group, MeasurementRecord, Params, PlotConfiguration, Summary};
/// use benchpivot_json::{dataset_to_json_value, ToJsonConfig};
///
/// let groups = group(vec![MeasurementRecord::new(
///     "pkg.Bench.run",
///     Params::new().with("impl", "A").with("size", "10"),
///     Summary::new(1.0, 0.1, "ns/op"),
/// )])
/// .unwrap();
/// let dataset = pivot(groups.get("pkg.Bench.run").unwrap(), &PlotConfiguration::default()).unwrap();
///
/// let value = dataset_to_json_value(&dataset, &ToJsonConfig::default());
/// assert_eq!(value["axis_key"], "size");
/// assert_eq!(value["cells"][0]["series"], "A");
/// ```
pub fn dataset_to_json_value(dataset: &PivotedDataset, config: &ToJsonConfig) -> JsonValue {
    let cells: Vec<JsonValue> = dataset
        .cells()
        .iter()
        .map(|entry| {
            json!({
                "series": entry.series_label,
                "axis": entry.axis_label,
                "mean": float(entry.cell.mean),
                "error": float(entry.cell.error),
            })
        })
        .collect();

    let mut map = Map::new();
    map.insert("benchmark".to_string(), json!(dataset.benchmark_id()));
    map.insert("unit".to_string(), json!(dataset.unit()));
    map.insert("axis_key".to_string(), json!(dataset.axis_key()));
    map.insert("series_keys".to_string(), json!(dataset.series_keys()));
    map.insert("axis_labels".to_string(), json!(dataset.axis_labels()));
    map.insert("series_labels".to_string(), json!(dataset.series_labels()));
    map.insert("cells".to_string(), JsonValue::Array(cells));

    if config.include_matrix {
        let rows: Vec<JsonValue> = dataset
            .rows()
            .map(|(series, row)| {
                let values: Vec<JsonValue> = row
                    .iter()
                    .map(|cell| cell.map_or(JsonValue::Null, |c| float(c.mean)))
                    .collect();
                json!({ "series": series, "means": values })
            })
            .collect();
        map.insert("matrix".to_string(), JsonValue::Array(rows));
    }

    JsonValue::Object(map)
}

/// Convert a report to a `serde_json::Value`.
///
/// Chapters keep their numbering; failed plots appear as
/// `{"error": {"kind": ..., "message": ...}}` in place of their datasets, and
/// rejected groups are listed under `rejected`.
pub fn report_to_json_value(report: &Report, config: &ToJsonConfig) -> JsonValue {
    let chapters: Vec<JsonValue> = report
        .chapters
        .iter()
        .map(|chapter| chapter_to_json(chapter, config))
        .collect();
    let rejected: Vec<JsonValue> = report.rejected.iter().map(rejected_to_json).collect();

    json!({
        "chapters": chapters,
        "rejected": rejected,
    })
}

fn chapter_to_json(chapter: &Chapter, config: &ToJsonConfig) -> JsonValue {
    let group = &chapter.group;
    let plots: Vec<JsonValue> = chapter
        .plots
        .iter()
        .map(|plot| plot_to_json(plot, config))
        .collect();

    let mut map = Map::new();
    map.insert("number".to_string(), json!(chapter.number));
    map.insert("benchmark".to_string(), json!(group.benchmark_id()));
    map.insert("name".to_string(), json!(group.short_name()));
    map.insert("unit".to_string(), json!(group.unit()));
    map.insert("param_keys".to_string(), json!(group.param_keys()));
    map.insert("records".to_string(), json!(group.len()));
    if config.include_run_settings {
        map.insert("run_settings".to_string(), group_settings(group));
    }
    map.insert("plots".to_string(), JsonValue::Array(plots));
    JsonValue::Object(map)
}

fn plot_to_json(plot: &PlotOutcome, config: &ToJsonConfig) -> JsonValue {
    let mut map = match configuration_to_json(&plot.configuration) {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    };
    match &plot.result {
        Ok(datasets) => {
            let datasets: Vec<JsonValue> = datasets
                .iter()
                .map(|(split, dataset)| {
                    let mut value = dataset_to_json_value(dataset, config);
                    if let JsonValue::Object(fields) = &mut value {
                        fields.insert("split".to_string(), json!(split));
                    }
                    value
                })
                .collect();
            map.insert("datasets".to_string(), JsonValue::Array(datasets));
        }
        Err(err) => {
            map.insert("error".to_string(), error_to_json(err));
        }
    }
    JsonValue::Object(map)
}

fn configuration_to_json(config: &PlotConfiguration) -> JsonValue {
    let filters: Map<String, JsonValue> = config
        .series_filter()
        .rules()
        .map(|(key, pattern)| (key.to_string(), json!(pattern)))
        .collect();
    let chart = match config.chart_kind() {
        ChartKind::Bars => "bars",
        ChartKind::Lines => "lines",
    };
    let orientation = match config.orientation() {
        Orientation::Vertical => "vertical",
        Orientation::Horizontal => "horizontal",
    };
    let axis_default = match config.axis_default() {
        AxisDefault::Second => "second",
        AxisDefault::First => "first",
    };
    json!({
        "type": chart,
        "orientation": orientation,
        "axis": config.axis_key(),
        "axis_default": axis_default,
        "log_scale": config.log_scale(),
        "title": config.title(),
        "filters": filters,
        "split_by": config.split_by(),
    })
}

fn error_to_json(err: &PivotError) -> JsonValue {
    json!({
        "kind": err.kind(),
        "message": err.to_string(),
    })
}

fn rejected_to_json(err: &ConsistencyError) -> JsonValue {
    json!({
        "benchmark": err.benchmark_id,
        "message": err.to_string(),
    })
}

fn group_settings(group: &BenchmarkGroup) -> JsonValue {
    group.run_settings().map_or(JsonValue::Null, settings_to_json)
}

fn settings_to_json(settings: &RunSettings) -> JsonValue {
    json!({
        "harness_version": settings.harness_version,
        "mode": settings.mode,
        "threads": settings.threads,
        "forks": settings.forks,
        "warmup": settings.warmup.as_ref().map(iterations_to_json),
        "measurement": settings.measurement.as_ref().map(iterations_to_json),
    })
}

fn iterations_to_json(settings: &IterationSettings) -> JsonValue {
    json!({
        "iterations": settings.iterations,
        "time": settings.time,
        "batch_size": settings.batch_size,
        "description": settings.describe(),
    })
}

fn float(value: f64) -> JsonValue {
    Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn render(value: &JsonValue, config: &ToJsonConfig) -> String {
    if config.pretty {
        format!("{:#}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchpivot_core::{build_report, MeasurementRecord, Params, PlotRegistry, Summary};

    fn rec(id: &str, params: &[(&str, &str)], mean: f64, unit: &str) -> MeasurementRecord {
        MeasurementRecord::new(
            id,
            params.iter().copied().collect::<Params>(),
            Summary::new(mean, f64::NAN, unit),
        )
    }

    fn report() -> Report {
        build_report(
            vec![
                rec("p.B.run", &[("impl", "A"), ("size", "1")], 1.0, "ns/op"),
                rec("p.B.run", &[("impl", "B"), ("size", "2")], 2.0, "ns/op"),
                rec("p.C.run", &[("n", "1")], 1.0, "ns/op"),
                rec("p.C.run", &[("n", "2")], 1.0, "ops/s"),
            ],
            &PlotRegistry::new(),
        )
    }

    #[test]
    fn test_nan_error_is_null() {
        let value = report_to_json_value(&report(), &ToJsonConfig::default());
        let cell = &value["chapters"][0]["plots"][0]["datasets"][0]["cells"][0];
        assert_eq!(cell["mean"], 1.0);
        assert!(cell["error"].is_null());
    }

    #[test]
    fn test_matrix_holes_are_null() {
        let value = report_to_json_value(&report(), &ToJsonConfig::default());
        let matrix = &value["chapters"][0]["plots"][0]["datasets"][0]["matrix"];
        assert_eq!(matrix[0]["series"], "A");
        assert_eq!(matrix[0]["means"], json!([1.0, null]));
        assert_eq!(matrix[1]["means"], json!([null, 2.0]));
    }

    #[test]
    fn test_rejected_groups_listed() {
        let value = report_to_json_value(&report(), &ToJsonConfig::default());
        assert_eq!(value["chapters"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["rejected"][0]["benchmark"], "p.C.run");
    }

    #[test]
    fn test_chapter_fields() {
        let value = report_to_json_value(&report(), &ToJsonConfig::default());
        let chapter = &value["chapters"][0];
        assert_eq!(chapter["number"], 1);
        assert_eq!(chapter["name"], "B.run");
        assert_eq!(chapter["param_keys"], json!(["impl", "size"]));
        assert!(chapter["run_settings"].is_null());
        assert_eq!(chapter["plots"][0]["type"], "bars");
        assert_eq!(chapter["plots"][0]["datasets"][0]["split"], "");
    }

    #[test]
    fn test_plot_axis_fields() {
        let value = report_to_json_value(&report(), &ToJsonConfig::default());
        let plot = &value["chapters"][0]["plots"][0];
        assert!(plot["axis"].is_null());
        assert_eq!(plot["axis_default"], "second");

        let config = PlotConfiguration::builder()
            .axis_key("impl")
            .axis_default(AxisDefault::First)
            .build()
            .unwrap();
        let plot = configuration_to_json(&config);
        assert_eq!(plot["axis"], "impl");
        assert_eq!(plot["axis_default"], "first");
    }

    #[test]
    fn test_optional_sections_can_be_dropped() {
        let config = ToJsonConfig {
            pretty: false,
            include_matrix: false,
            include_run_settings: false,
        };
        let value = report_to_json_value(&report(), &config);
        assert!(value["chapters"][0].get("run_settings").is_none());
        assert!(value["chapters"][0]["plots"][0]["datasets"][0].get("matrix").is_none());
        assert!(!report_to_json(&report(), &config).contains('\n'));
    }
}
