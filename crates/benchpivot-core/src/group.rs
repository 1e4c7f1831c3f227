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

//! Grouping engine: buckets records by benchmark identity.
//!
//! Grouping is a single ordered pass. The first record seen for an identity
//! creates its group and fixes the parameter key set and the unit; every later
//! record of that identity must agree on both. Groups come out in the order
//! their identities first appeared, which is the chapter order of a report.

use crate::error::{ConsistencyConflict, ConsistencyError};
use crate::name::short_name;
use crate::record::{MeasurementRecord, RunSettings};
use std::collections::HashMap;
use tracing::{debug, warn};

/// All records sharing one benchmark identity.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkGroup {
    benchmark_id: String,
    short_name: String,
    param_keys: Vec<String>,
    unit: String,
    records: Vec<MeasurementRecord>,
}

impl BenchmarkGroup {
    fn open(record: MeasurementRecord) -> Self {
        Self {
            short_name: short_name(&record.benchmark_id),
            benchmark_id: record.benchmark_id.clone(),
            param_keys: record.parameters.keys().map(str::to_string).collect(),
            unit: record.summary.unit.clone(),
            records: vec![record],
        }
    }

    /// Full benchmark identity.
    pub fn benchmark_id(&self) -> &str {
        &self.benchmark_id
    }

    /// Display name, see [`short_name`].
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Parameter keys shared by every record, in first-seen order.
    pub fn param_keys(&self) -> &[String] {
        &self.param_keys
    }

    /// Measurement unit shared by every record.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Records in arrival order.
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `key` is one of the group's parameter keys.
    pub fn has_param(&self, key: &str) -> bool {
        self.param_keys.iter().any(|k| k == key)
    }

    /// Run settings of the first record that reports any.
    pub fn run_settings(&self) -> Option<&RunSettings> {
        self.records.iter().find_map(|r| r.run_settings.as_ref())
    }

    fn check(&self, record: &MeasurementRecord) -> Option<ConsistencyConflict> {
        let same_keys = record.parameters.len() == self.param_keys.len()
            && self.param_keys.iter().all(|k| record.parameters.contains_key(k));
        if !same_keys {
            return Some(ConsistencyConflict::ParamKeys {
                expected: self.param_keys.clone(),
                found: record.parameters.keys().map(str::to_string).collect(),
            });
        }
        if record.summary.unit != self.unit {
            return Some(ConsistencyConflict::Unit {
                expected: self.unit.clone(),
                found: record.summary.unit.clone(),
            });
        }
        None
    }
}

/// Groups keyed by benchmark identity, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    groups: Vec<BenchmarkGroup>,
    index: HashMap<String, usize>,
}

impl Groups {
    fn push(&mut self, group: BenchmarkGroup) {
        self.index
            .insert(group.benchmark_id.clone(), self.groups.len());
        self.groups.push(group);
    }

    /// Group for a full benchmark identity.
    pub fn get(&self, benchmark_id: &str) -> Option<&BenchmarkGroup> {
        self.index.get(benchmark_id).map(|&i| &self.groups[i])
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkGroup> {
        self.groups.iter()
    }

    /// Benchmark identities in first-seen order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.benchmark_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Unwrap into the ordered group list.
    pub fn into_vec(self) -> Vec<BenchmarkGroup> {
        self.groups
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a BenchmarkGroup;
    type IntoIter = std::slice::Iter<'a, BenchmarkGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for Groups {
    type Item = BenchmarkGroup;
    type IntoIter = std::vec::IntoIter<BenchmarkGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Outcome of [`group_partitioned`]: surviving groups plus one error per
/// rejected identity.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    /// Consistent groups, first-seen order.
    pub groups: Groups,
    /// Inconsistent identities, first-seen order.
    pub rejected: Vec<ConsistencyError>,
}

enum Slot {
    Open { group: BenchmarkGroup, first_index: usize },
    Rejected(ConsistencyError),
}

/// Group records by benchmark identity, failing on the first inconsistency.
///
/// # Errors
///
/// Returns [`ConsistencyError`] as soon as a record disagrees with its group's
/// key set or unit.
///
/// # Example
///
/// ```
/// use benchpivot_core::{group, MeasurementRecord, Params, Summary};
///
/// let records = vec![
///     MeasurementRecord::new("pkg.B.y", Params::new(), Summary::new(1.0, 0.0, "ns/op")),
///     MeasurementRecord::new("pkg.A.x", Params::new(), Summary::new(2.0, 0.0, "ns/op")),
/// ];
/// let groups = group(records).unwrap();
/// assert_eq!(groups.ids().collect::<Vec<_>>(), vec!["pkg.B.y", "pkg.A.x"]);
/// ```
pub fn group<I>(records: I) -> Result<Groups, ConsistencyError>
where
    I: IntoIterator<Item = MeasurementRecord>,
{
    let slots = accumulate(records, true)?;
    let mut groups = Groups::default();
    for slot in slots {
        if let Slot::Open { group, .. } = slot {
            groups.push(group);
        }
    }
    Ok(groups)
}

/// Group records by benchmark identity, excluding inconsistent identities
/// instead of failing.
///
/// Once an identity is rejected, its remaining records are skipped; the
/// other groups are unaffected.
pub fn group_partitioned<I>(records: I) -> Grouping
where
    I: IntoIterator<Item = MeasurementRecord>,
{
    let mut grouping = Grouping::default();
    // accumulate only fails in strict mode
    let slots = accumulate(records, false).unwrap_or_default();
    for slot in slots {
        match slot {
            Slot::Open { group, .. } => grouping.groups.push(group),
            Slot::Rejected(err) => grouping.rejected.push(err),
        }
    }
    grouping
}

fn accumulate<I>(records: I, strict: bool) -> Result<Vec<Slot>, ConsistencyError>
where
    I: IntoIterator<Item = MeasurementRecord>,
{
    let mut slots: Vec<Slot> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (record_index, record) in records.into_iter().enumerate() {
        let Some(&slot_index) = index.get(&record.benchmark_id) else {
            debug!(
                benchmark = %record.benchmark_id,
                params = record.parameters.len(),
                "opening benchmark group"
            );
            index.insert(record.benchmark_id.clone(), slots.len());
            slots.push(Slot::Open {
                group: BenchmarkGroup::open(record),
                first_index: record_index,
            });
            continue;
        };

        let slot = &mut slots[slot_index];
        let Slot::Open { group, first_index } = slot else {
            debug!(benchmark = %record.benchmark_id, record_index, "skipping record of rejected group");
            continue;
        };

        match group.check(&record) {
            None => group.records.push(record),
            Some(conflict) => {
                let err = ConsistencyError {
                    benchmark_id: record.benchmark_id,
                    first_index: *first_index,
                    record_index,
                    conflict,
                };
                warn!("{}", err);
                if strict {
                    return Err(err);
                }
                *slot = Slot::Rejected(err);
            }
        }
    }

    Ok(slots)
}
