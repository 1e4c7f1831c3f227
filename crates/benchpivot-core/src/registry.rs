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

//! Plot declarations per benchmark, and their resolution.
//!
//! Declarations live at two levels: on the class declaring a benchmark method
//! (keyed by the identity minus its last segment) and on the method itself
//! (keyed by the full identity). Resolution lists class-level plots first and
//! method-level plots after, so the most specific plot comes last.

use crate::config::{AxisDefault, ChartKind, Orientation, PlotConfiguration};
use crate::error::ConfigurationError;
use crate::name::class_name;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plot declarations keyed by class and by method.
///
/// Owned by the caller and passed into resolution; populated once at startup.
#[derive(Debug, Clone, Default)]
pub struct PlotRegistry {
    classes: HashMap<String, Vec<PlotConfiguration>>,
    methods: HashMap<String, Vec<PlotConfiguration>>,
}

impl PlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a plot for every benchmark method of `class`.
    pub fn declare_class(&mut self, class: impl Into<String>, config: PlotConfiguration) {
        self.classes.entry(class.into()).or_default().push(config);
    }

    /// Declare a plot for one benchmark identity.
    pub fn declare_method(&mut self, benchmark_id: impl Into<String>, config: PlotConfiguration) {
        self.methods.entry(benchmark_id.into()).or_default().push(config);
    }

    /// Class-level declarations applying to `benchmark_id`.
    pub fn class_plots(&self, benchmark_id: &str) -> &[PlotConfiguration] {
        class_name(benchmark_id)
            .and_then(|class| self.classes.get(class))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Method-level declarations for `benchmark_id`.
    pub fn method_plots(&self, benchmark_id: &str) -> &[PlotConfiguration] {
        self.methods
            .get(benchmark_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.methods.is_empty()
    }

    /// See [`resolve_configurations`].
    pub fn resolve(&self, benchmark_id: &str) -> Vec<PlotConfiguration> {
        resolve_configurations(self, benchmark_id)
    }
}

/// Plot configurations for a benchmark: class-level first, then method-level,
/// or a single default configuration when nothing is declared.
///
/// ```
/// use benchpivot_core::{resolve_configurations, PlotConfiguration, PlotRegistry};
///
/// let mut registry = PlotRegistry::new();
/// registry.declare_method("pkg.Bench.run", PlotConfiguration::builder().axis_key("size").build().unwrap());
///
/// assert_eq!(resolve_configurations(&registry, "pkg.Bench.run")[0].axis_key(), Some("size"));
/// assert_eq!(resolve_configurations(&registry, "pkg.Bench.other"), vec![PlotConfiguration::default()]);
/// ```
pub fn resolve_configurations(registry: &PlotRegistry, benchmark_id: &str) -> Vec<PlotConfiguration> {
    let mut configurations: Vec<PlotConfiguration> = registry
        .class_plots(benchmark_id)
        .iter()
        .chain(registry.method_plots(benchmark_id))
        .cloned()
        .collect();

    if configurations.is_empty() {
        debug!(benchmark = benchmark_id, "no plot declared, using default");
        configurations.push(PlotConfiguration::default());
    }
    configurations
}

/// Declarative form of one plot, as written in a registry file.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PlotDeclaration {
    /// Parameter key → regex pattern.
    pub filters: BTreeMap<String, String>,
    /// Explicit axis key.
    pub axis: Option<String>,
    /// Default axis policy.
    pub axis_default: AxisDefault,
    /// Split key.
    pub split_by: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub chart: ChartKind,
    pub orientation: Orientation,
    pub log_scale: bool,
    pub title: Option<String>,
}

impl PlotDeclaration {
    /// Compile into a [`PlotConfiguration`].
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidPattern`] for a filter that does not compile.
    pub fn to_configuration(&self) -> Result<PlotConfiguration, ConfigurationError> {
        let mut builder = PlotConfiguration::builder()
            .axis_default(self.axis_default)
            .chart_kind(self.chart)
            .orientation(self.orientation)
            .log_scale(self.log_scale);
        for (key, pattern) in &self.filters {
            builder = builder.filter(key.clone(), pattern.clone());
        }
        if let Some(axis) = &self.axis {
            builder = builder.axis_key(axis.clone());
        }
        if let Some(split_by) = &self.split_by {
            builder = builder.split_by(split_by.clone());
        }
        if let Some(title) = &self.title {
            builder = builder.title(title.clone());
        }
        builder.build()
    }
}

/// Declarative form of a whole registry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RegistryFile {
    /// Class name → plots for all its methods.
    pub classes: BTreeMap<String, Vec<PlotDeclaration>>,
    /// Benchmark identity → plots for that method.
    pub methods: BTreeMap<String, Vec<PlotDeclaration>>,
}

impl RegistryFile {
    /// Compile every declaration into a [`PlotRegistry`].
    ///
    /// # Errors
    ///
    /// The first [`ConfigurationError`] met, with declaration order preserved.
    pub fn into_registry(self) -> Result<PlotRegistry, ConfigurationError> {
        let mut registry = PlotRegistry::new();
        for (class, plots) in self.classes {
            for plot in &plots {
                registry.declare_class(class.clone(), plot.to_configuration()?);
            }
        }
        for (method, plots) in self.methods {
            for plot in &plots {
                registry.declare_method(method.clone(), plot.to_configuration()?);
            }
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(key: &str) -> PlotConfiguration {
        PlotConfiguration::builder().axis_key(key).build().unwrap()
    }

    #[test]
    fn test_default_when_nothing_declared() {
        let registry = PlotRegistry::new();
        let configs = resolve_configurations(&registry, "pkg.Bench.run");
        assert_eq!(configs, vec![PlotConfiguration::default()]);
    }

    #[test]
    fn test_class_level_before_method_level() {
        let mut registry = PlotRegistry::new();
        registry.declare_method("pkg.Bench.run", axis("method"));
        registry.declare_class("pkg.Bench", axis("class-1"));
        registry.declare_class("pkg.Bench", axis("class-2"));

        let keys: Vec<_> = registry
            .resolve("pkg.Bench.run")
            .iter()
            .map(|c| c.axis_key().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["class-1", "class-2", "method"]);
    }

    #[test]
    fn test_class_plots_apply_to_every_method() {
        let mut registry = PlotRegistry::new();
        registry.declare_class("pkg.Bench", axis("size"));
        assert_eq!(registry.resolve("pkg.Bench.add").len(), 1);
        assert_eq!(registry.resolve("pkg.Bench.remove").len(), 1);
        assert_eq!(registry.resolve("pkg.Other.add"), vec![PlotConfiguration::default()]);
    }

    #[test]
    fn test_undotted_identity_has_no_class() {
        let mut registry = PlotRegistry::new();
        registry.declare_class("", axis("size"));
        assert!(registry.class_plots("run").is_empty());
    }

    #[test]
    fn test_declaration_to_configuration() {
        let mut filters = BTreeMap::new();
        filters.insert("impl".to_string(), "^A$".to_string());
        let declaration = PlotDeclaration {
            filters,
            axis: Some("size".to_string()),
            chart: ChartKind::Lines,
            log_scale: true,
            ..Default::default()
        };
        let config = declaration.to_configuration().unwrap();
        assert_eq!(config.axis_key(), Some("size"));
        assert_eq!(config.chart_kind(), ChartKind::Lines);
        assert!(config.log_scale());
        assert_eq!(config.series_filter().rules().collect::<Vec<_>>(), vec![("impl", "^A$")]);
    }

    #[test]
    fn test_registry_file_rejects_bad_pattern() {
        let mut filters = BTreeMap::new();
        filters.insert("impl".to_string(), "[".to_string());
        let mut file = RegistryFile::default();
        file.methods.insert(
            "pkg.Bench.run".to_string(),
            vec![PlotDeclaration {
                filters,
                ..Default::default()
            }],
        );
        assert!(matches!(
            file.into_registry(),
            Err(ConfigurationError::InvalidPattern { .. })
        ));
    }
}
