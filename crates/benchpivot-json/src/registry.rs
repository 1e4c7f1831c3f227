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

//! Plot registry files in JSON.

use crate::error::{JsonError, Result};
use benchpivot_core::{PlotRegistry, RegistryFile};
use tracing::debug;

/// Load a plot registry from its JSON declaration.
///
/// ```
/// use benchpivot_json::registry_from_json;
///
/// let registry = registry_from_json(r#"{
///     "methods": { "pkg.Bench.run": [ { "axis": "size", "type": "lines" } ] }
/// }"#).unwrap();
/// assert_eq!(registry.resolve("pkg.Bench.run")[0].axis_key(), Some("size"));
/// ```
///
/// # Errors
///
/// - [`JsonError::RegistryFormat`] for malformed JSON or unknown fields
/// - [`JsonError::Registry`] for a filter pattern that does not compile
pub fn registry_from_json(json: &str) -> Result<PlotRegistry> {
    let file: RegistryFile =
        serde_json::from_str(json).map_err(|e| JsonError::RegistryFormat(e.to_string()))?;
    debug!(
        classes = file.classes.len(),
        methods = file.methods.len(),
        "loaded plot registry"
    );
    Ok(file.into_registry()?)
}
