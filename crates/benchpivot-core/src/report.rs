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

//! Report assembly: grouping followed by every declared pivot of every group.
//!
//! A failing group (inconsistent records) is left out of the chapters and
//! listed in [`Report::rejected`]. A failing plot is kept in its chapter as an
//! error outcome; other plots and groups are unaffected.

use crate::config::PlotConfiguration;
use crate::error::{ConsistencyError, PivotError, PivotResult};
use crate::group::{group_partitioned, BenchmarkGroup, Groups};
use crate::pivot::{pivot_split, PivotedDataset};
use crate::record::MeasurementRecord;
use crate::registry::PlotRegistry;
use tracing::{info, warn};

/// Result of applying one plot configuration to a group.
#[derive(Debug, Clone)]
pub struct PlotOutcome {
    pub configuration: PlotConfiguration,
    /// One dataset per split value (a single unlabelled one without split).
    pub result: PivotResult<Vec<(String, PivotedDataset)>>,
}

/// One benchmark group with its plots.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// 1-based position in the report.
    pub number: usize,
    pub group: BenchmarkGroup,
    pub plots: Vec<PlotOutcome>,
}

impl Chapter {
    /// Datasets of every successful plot, in declaration order.
    pub fn datasets(&self) -> impl Iterator<Item = (&PlotConfiguration, &str, &PivotedDataset)> {
        self.plots.iter().flat_map(|plot| {
            plot.result
                .iter()
                .flatten()
                .map(move |(label, dataset)| (&plot.configuration, label.as_str(), dataset))
        })
    }

    /// Errors of every failed plot.
    pub fn failures(&self) -> impl Iterator<Item = &PivotError> {
        self.plots.iter().filter_map(|plot| plot.result.as_ref().err())
    }
}

/// Chapters in benchmark first-seen order plus rejected groups.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub chapters: Vec<Chapter>,
    pub rejected: Vec<ConsistencyError>,
}

impl Report {
    /// Number of failed plots across all chapters.
    pub fn failed_plots(&self) -> usize {
        self.chapters.iter().map(|c| c.failures().count()).sum()
    }

    /// Whether every group was consistent and every plot succeeded.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.failed_plots() == 0
    }
}

/// Group `records` and pivot each group under each resolved configuration.
pub fn build_report<I>(records: I, registry: &PlotRegistry) -> Report
where
    I: IntoIterator<Item = MeasurementRecord>,
{
    let grouping = group_partitioned(records);
    let chapters = grouping
        .groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| chapter(i + 1, group, registry))
        .collect();
    finish(chapters, grouping.rejected)
}

/// Pivot already-grouped benchmarks.
pub fn build_report_from_groups(groups: Groups, registry: &PlotRegistry) -> Report {
    let chapters = groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| chapter(i + 1, group, registry))
        .collect();
    finish(chapters, Vec::new())
}

/// [`build_report`] with groups pivoted on the rayon pool.
///
/// Grouping stays sequential; chapter order is the same as [`build_report`].
#[cfg(feature = "parallel")]
pub fn build_report_parallel<I>(records: I, registry: &PlotRegistry) -> Report
where
    I: IntoIterator<Item = MeasurementRecord>,
{
    use rayon::prelude::*;

    let grouping = group_partitioned(records);
    let chapters = grouping
        .groups
        .into_vec()
        .into_par_iter()
        .enumerate()
        .map(|(i, group)| chapter(i + 1, group, registry))
        .collect();
    finish(chapters, grouping.rejected)
}

fn chapter(number: usize, group: BenchmarkGroup, registry: &PlotRegistry) -> Chapter {
    let plots = registry
        .resolve(group.benchmark_id())
        .into_iter()
        .map(|configuration| {
            let result = pivot_split(&group, &configuration);
            if let Err(err) = &result {
                warn!(benchmark = group.benchmark_id(), kind = err.kind(), "{}", err);
            }
            PlotOutcome {
                configuration,
                result,
            }
        })
        .collect();
    Chapter {
        number,
        group,
        plots,
    }
}

fn finish(chapters: Vec<Chapter>, rejected: Vec<ConsistencyError>) -> Report {
    let report = Report { chapters, rejected };
    info!(
        chapters = report.chapters.len(),
        rejected = report.rejected.len(),
        failed_plots = report.failed_plots(),
        "report assembled"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Params, Summary};

    fn rec(id: &str, params: &[(&str, &str)], unit: &str) -> MeasurementRecord {
        MeasurementRecord::new(
            id,
            params.iter().copied().collect::<Params>(),
            Summary::new(1.0, 0.1, unit),
        )
    }

    #[test]
    fn test_chapters_in_first_seen_order() {
        let report = build_report(
            vec![
                rec("p.B.run", &[("n", "1")], "ns/op"),
                rec("p.A.run", &[("n", "1")], "ns/op"),
                rec("p.B.run", &[("n", "2")], "ns/op"),
            ],
            &PlotRegistry::new(),
        );
        let ids: Vec<_> = report.chapters.iter().map(|c| c.group.benchmark_id()).collect();
        assert_eq!(ids, vec!["p.B.run", "p.A.run"]);
        assert_eq!(report.chapters[0].number, 1);
        assert_eq!(report.chapters[1].number, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn test_rejected_group_excluded() {
        let report = build_report(
            vec![
                rec("p.B.run", &[("n", "1")], "ns/op"),
                rec("p.B.run", &[("n", "2")], "us/op"),
                rec("p.A.run", &[("n", "1")], "ns/op"),
            ],
            &PlotRegistry::new(),
        );
        assert_eq!(report.chapters.len(), 1);
        assert_eq!(report.chapters[0].group.benchmark_id(), "p.A.run");
        assert_eq!(report.rejected.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_failed_plot_does_not_stop_others() {
        let mut registry = PlotRegistry::new();
        registry.declare_method(
            "p.B.run",
            PlotConfiguration::builder().axis_key("missing").build().unwrap(),
        );
        registry.declare_method("p.B.run", PlotConfiguration::default());

        let report = build_report(
            vec![
                rec("p.B.run", &[("impl", "A"), ("size", "1")], "ns/op"),
                rec("p.B.run", &[("impl", "A"), ("size", "2")], "ns/op"),
            ],
            &registry,
        );
        let chapter = &report.chapters[0];
        assert_eq!(chapter.plots.len(), 2);
        assert_eq!(chapter.failures().count(), 1);
        assert_eq!(chapter.datasets().count(), 1);
        assert_eq!(report.failed_plots(), 1);
    }

    #[test]
    fn test_split_plot_yields_several_datasets() {
        let mut registry = PlotRegistry::new();
        registry.declare_class(
            "p.B",
            PlotConfiguration::builder().split_by("threads").build().unwrap(),
        );
        let report = build_report(
            vec![
                rec("p.B.run", &[("impl", "A"), ("threads", "1")], "ns/op"),
                rec("p.B.run", &[("impl", "A"), ("threads", "2")], "ns/op"),
            ],
            &registry,
        );
        let labels: Vec<_> = report.chapters[0].datasets().map(|(_, l, _)| l.to_string()).collect();
        assert_eq!(labels, vec!["1", "2"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential_order() {
        let records: Vec<_> = (0..20)
            .map(|i| rec(&format!("p.B{}.run", i), &[("n", "1")], "ns/op"))
            .collect();
        let sequential = build_report(records.clone(), &PlotRegistry::new());
        let parallel = build_report_parallel(records, &PlotRegistry::new());
        let ids = |r: &Report| -> Vec<String> {
            r.chapters.iter().map(|c| c.group.benchmark_id().to_string()).collect()
        };
        assert_eq!(ids(&sequential), ids(&parallel));
    }
}
