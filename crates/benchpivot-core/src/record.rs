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

//! Measurement records as handed over by result ingestion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered parameter mapping of one benchmark run.
///
/// Keys are unique; insertion order is preserved because the default axis
/// selection depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set equality of keys, ignoring order.
    pub fn has_same_keys(&self, other: &Params) -> bool {
        self.len() == other.len() && self.keys().all(|k| other.contains_key(k))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Pre-aggregated statistics of one run. Never recomputed here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Primary score (mean).
    pub mean: f64,
    /// Error margin around the mean.
    pub error: f64,
    /// Lower confidence bound.
    pub confidence_low: f64,
    /// Upper confidence bound.
    pub confidence_high: f64,
    /// Measurement unit, e.g. `ns/op`.
    pub unit: String,
}

impl Summary {
    /// Summary with confidence bounds derived as `mean ± error`.
    pub fn new(mean: f64, error: f64, unit: impl Into<String>) -> Self {
        Self {
            mean,
            error,
            confidence_low: mean - error,
            confidence_high: mean + error,
            unit: unit.into(),
        }
    }

    /// Override the confidence interval.
    pub fn with_confidence(mut self, low: f64, high: f64) -> Self {
        self.confidence_low = low;
        self.confidence_high = high;
        self
    }
}

/// Iteration settings of one phase (warmup or measurement).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationSettings {
    /// Number of iterations.
    pub iterations: u32,
    /// Duration of one iteration as reported by the harness, e.g. `1 s`.
    pub time: Option<String>,
    /// Calls per operation.
    pub batch_size: u32,
}

impl IterationSettings {
    /// One-line human description, `<none>` when no iteration ran.
    pub fn describe(&self) -> String {
        if self.iterations == 0 {
            return "<none>".to_string();
        }
        let mut text = format!("{} iterations", self.iterations);
        if let Some(time) = &self.time {
            text.push_str(&format!(", {} each", time));
        }
        if self.batch_size > 1 {
            text.push_str(&format!(", {} calls per op", self.batch_size));
        }
        text
    }
}

/// How the harness executed a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSettings {
    pub harness_version: Option<String>,
    pub mode: Option<String>,
    pub threads: Option<u32>,
    pub forks: Option<u32>,
    pub warmup: Option<IterationSettings>,
    pub measurement: Option<IterationSettings>,
}

/// One benchmark execution under one parameter configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementRecord {
    /// Fully-qualified benchmark identity, e.g. `pkg.Bench.run`.
    pub benchmark_id: String,
    /// Parameters of this run, in declaration order.
    pub parameters: Params,
    /// Statistics supplied by the measurement source.
    pub summary: Summary,
    /// Raw values, replicate × repetition.
    pub raw_samples: Option<Vec<Vec<f64>>>,
    /// Execution settings, when the source reports them.
    pub run_settings: Option<RunSettings>,
}

impl MeasurementRecord {
    /// Create a record without raw samples or run settings.
    pub fn new(benchmark_id: impl Into<String>, parameters: Params, summary: Summary) -> Self {
        Self {
            benchmark_id: benchmark_id.into(),
            parameters,
            summary,
            raw_samples: None,
            run_settings: None,
        }
    }

    /// Attach raw samples.
    pub fn with_raw_samples(mut self, samples: Vec<Vec<f64>>) -> Self {
        self.raw_samples = Some(samples);
        self
    }

    /// Attach run settings.
    pub fn with_run_settings(mut self, settings: RunSettings) -> Self {
        self.run_settings = Some(settings);
        self
    }

    /// Parameter value for `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key)
    }

    pub fn unit(&self) -> &str {
        &self.summary.unit
    }
}
