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

//! Builder for measurement records.

use super::UNIT;
use benchpivot_core::{MeasurementRecord, Params, RunSettings, Summary};

/// Builder for creating customizable record fixtures.
///
/// # Examples
///
/// ```
/// use benchpivot_test::fixtures::builders::RecordBuilder;
///
/// let record = RecordBuilder::new("pkg.Bench.run")
///     .param("size", "10")
///     .mean(4.0)
///     .unit("us/op")
///     .build();
///
/// assert_eq!(record.summary.unit, "us/op");
/// assert_eq!(record.summary.confidence_low, 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    benchmark_id: String,
    params: Params,
    mean: f64,
    error: f64,
    unit: String,
    raw_samples: Option<Vec<Vec<f64>>>,
    run_settings: Option<RunSettings>,
}

impl RecordBuilder {
    /// New builder with mean 0, error 0 and unit `ns/op`.
    pub fn new(benchmark_id: impl Into<String>) -> Self {
        Self {
            benchmark_id: benchmark_id.into(),
            params: Params::new(),
            mean: 0.0,
            error: 0.0,
            unit: UNIT.to_string(),
            raw_samples: None,
            run_settings: None,
        }
    }

    /// Appends a parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    pub fn error(mut self, error: f64) -> Self {
        self.error = error;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn raw_samples(mut self, samples: Vec<Vec<f64>>) -> Self {
        self.raw_samples = Some(samples);
        self
    }

    pub fn run_settings(mut self, settings: RunSettings) -> Self {
        self.run_settings = Some(settings);
        self
    }

    /// Builds the record.
    pub fn build(self) -> MeasurementRecord {
        let mut record = MeasurementRecord::new(
            self.benchmark_id,
            self.params,
            Summary::new(self.mean, self.error, self.unit),
        );
        record.raw_samples = self.raw_samples;
        record.run_settings = self.run_settings;
        record
    }
}
