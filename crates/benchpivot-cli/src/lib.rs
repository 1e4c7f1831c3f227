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

//! benchpivot CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **groups**: list the benchmark groups of a JMH result file
//! - **pivot**: pivot one benchmark into a series × axis matrix (JSON or CSV)
//! - **report**: every benchmark under every declared plot (JSON or CSV)
//!
//! # Logging
//!
//! Diagnostics go through `tracing` to stderr. The filter defaults to
//! `benchpivot=info`, `RUST_LOG` overrides it and `--verbose` raises it to
//! `debug`.

pub mod cli;
pub mod commands;
pub mod error;

use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "benchpivot=debug" } else { "benchpivot=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
