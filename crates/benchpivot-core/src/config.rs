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

//! Plot configuration: the policy controlling one pivot.

use crate::error::ConfigurationError;
use regex::Regex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a renderer draws the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartKind {
    #[default]
    Bars,
    Lines,
}

/// Direction of the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Which parameter key becomes the axis when none is configured.
///
/// Only consulted for groups with more than one parameter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisDefault {
    /// Second key in first-seen order; the first labels the series.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "second_key"))]
    Second,
    /// First key in first-seen order.
    #[cfg_attr(feature = "serde", serde(alias = "first_key"))]
    First,
}

impl AxisDefault {
    /// Position of the default axis key among the group's keys.
    pub fn position(self) -> usize {
        match self {
            Self::Second => 1,
            Self::First => 0,
        }
    }
}

/// Compiled per-parameter value filters, in declaration order.
#[derive(Clone, Default)]
pub struct SeriesFilter {
    rules: Vec<(String, Regex)>,
}

impl SeriesFilter {
    /// Empty filter, keeps every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `key`. A later rule for the same key replaces the earlier one.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidPattern`] if `pattern` does not compile.
    pub fn add(&mut self, key: impl Into<String>, pattern: &str) -> Result<(), ConfigurationError> {
        let key = key.into();
        let regex = Regex::new(pattern).map_err(|e| ConfigurationError::InvalidPattern {
            key: key.clone(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.rules.retain(|(k, _)| *k != key);
        self.rules.push((key, regex));
        Ok(())
    }

    /// Whether every rule matches the value `lookup` yields for its key.
    ///
    /// A missing value never matches.
    pub fn matches<'a, F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        self.rules
            .iter()
            .all(|(key, regex)| lookup(key).map_or(false, |value| regex.is_match(value)))
    }

    /// `(key, pattern)` pairs in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for SeriesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rules()).finish()
    }
}

impl PartialEq for SeriesFilter {
    fn eq(&self, other: &Self) -> bool {
        self.rules().eq(other.rules())
    }
}

/// Immutable policy for one pivot of a benchmark group.
///
/// The default configuration keeps every record, picks the axis key by
/// [`AxisDefault::Second`], and asks for vertical bars on a linear scale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotConfiguration {
    series_filter: SeriesFilter,
    axis_key: Option<String>,
    axis_default: AxisDefault,
    split_by: Option<String>,
    chart_kind: ChartKind,
    orientation: Orientation,
    log_scale: bool,
    title: Option<String>,
}

impl PlotConfiguration {
    /// Start building a configuration.
    pub fn builder() -> PlotConfigurationBuilder {
        PlotConfigurationBuilder::default()
    }

    pub fn series_filter(&self) -> &SeriesFilter {
        &self.series_filter
    }

    /// Explicit axis key, if any.
    pub fn axis_key(&self) -> Option<&str> {
        self.axis_key.as_deref()
    }

    pub fn axis_default(&self) -> AxisDefault {
        self.axis_default
    }

    /// Key whose values split the group into one dataset each.
    pub fn split_by(&self) -> Option<&str> {
        self.split_by.as_deref()
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn log_scale(&self) -> bool {
        self.log_scale
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Builder for [`PlotConfiguration`].
///
/// Filter patterns are compiled in [`build`](Self::build), so an invalid
/// pattern surfaces there.
///
/// # Example
///
/// ```
/// use benchpivot_core::{ChartKind, PlotConfiguration};
///
/// let config = PlotConfiguration::builder()
///     .filter("impl", "^(Array|Linked)List$")
///     .axis_key("size")
///     .chart_kind(ChartKind::Lines)
///     .log_scale(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.axis_key(), Some("size"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlotConfigurationBuilder {
    filters: Vec<(String, String)>,
    axis_key: Option<String>,
    axis_default: AxisDefault,
    split_by: Option<String>,
    chart_kind: ChartKind,
    orientation: Orientation,
    log_scale: bool,
    title: Option<String>,
}

impl PlotConfigurationBuilder {
    /// Keep only records whose value for `key` matches `pattern`.
    pub fn filter(mut self, key: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filters.push((key.into(), pattern.into()));
        self
    }

    pub fn axis_key(mut self, key: impl Into<String>) -> Self {
        self.axis_key = Some(key.into());
        self
    }

    pub fn axis_default(mut self, policy: AxisDefault) -> Self {
        self.axis_default = policy;
        self
    }

    pub fn split_by(mut self, key: impl Into<String>) -> Self {
        self.split_by = Some(key.into());
        self
    }

    pub fn chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = kind;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Compile the filters and freeze the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidPattern`] for the first pattern that does
    /// not compile.
    pub fn build(self) -> Result<PlotConfiguration, ConfigurationError> {
        let mut series_filter = SeriesFilter::new();
        for (key, pattern) in &self.filters {
            series_filter.add(key.clone(), pattern)?;
        }
        Ok(PlotConfiguration {
            series_filter,
            axis_key: self.axis_key,
            axis_default: self.axis_default,
            split_by: self.split_by,
            chart_kind: self.chart_kind,
            orientation: self.orientation,
            log_scale: self.log_scale,
            title: self.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = PlotConfiguration::default();
        assert!(config.series_filter().is_empty());
        assert_eq!(config.axis_key(), None);
        assert_eq!(config.axis_default(), AxisDefault::Second);
        assert_eq!(config.chart_kind(), ChartKind::Bars);
        assert_eq!(config.orientation(), Orientation::Vertical);
        assert!(!config.log_scale());
        assert_eq!(config, PlotConfiguration::builder().build().unwrap());
    }

    #[test]
    fn test_filter_requires_every_rule() {
        let mut filter = SeriesFilter::new();
        filter.add("impl", "^A$").unwrap();
        filter.add("size", "^1").unwrap();

        let lookup = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        };
        assert!(filter.matches(lookup(&[("impl", "A"), ("size", "100")])));
        assert!(!filter.matches(lookup(&[("impl", "AB"), ("size", "100")])));
        assert!(!filter.matches(lookup(&[("impl", "A"), ("size", "200")])));
        assert!(!filter.matches(lookup(&[("size", "100")])));
    }

    #[test]
    fn test_filter_uses_search_semantics() {
        let mut filter = SeriesFilter::new();
        filter.add("impl", "List").unwrap();
        assert!(filter.matches(|_| Some("ArrayListImpl")));
    }

    #[test]
    fn test_filter_replaces_rule_for_same_key() {
        let mut filter = SeriesFilter::new();
        filter.add("impl", "^A$").unwrap();
        filter.add("impl", "^B$").unwrap();
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.rules().collect::<Vec<_>>(), vec![("impl", "^B$")]);
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let err = PlotConfiguration::builder()
            .filter("impl", "(unclosed")
            .build()
            .unwrap_err();
        match err {
            ConfigurationError::InvalidPattern { key, pattern, .. } => {
                assert_eq!(key, "impl");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_axis_default_position() {
        assert_eq!(AxisDefault::Second.position(), 1);
        assert_eq!(AxisDefault::First.position(), 0);
    }

    #[test]
    fn test_builder_sets_every_field() {
        let config = PlotConfiguration::builder()
            .axis_key("size")
            .axis_default(AxisDefault::First)
            .split_by("threads")
            .chart_kind(ChartKind::Lines)
            .orientation(Orientation::Horizontal)
            .log_scale(true)
            .title("Throughput")
            .build()
            .unwrap();
        assert_eq!(config.axis_key(), Some("size"));
        assert_eq!(config.axis_default(), AxisDefault::First);
        assert_eq!(config.split_by(), Some("threads"));
        assert_eq!(config.chart_kind(), ChartKind::Lines);
        assert_eq!(config.orientation(), Orientation::Horizontal);
        assert!(config.log_scale());
        assert_eq!(config.title(), Some("Throughput"));
    }
}
