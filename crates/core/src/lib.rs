// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The in-memory domain store for the farm dashboard.
//!
//! [`State`] holds farms, daily reports and per-operation status flags.
//! Commands are validated with [`validate`] and committed with [`commit`];
//! [`apply`] does both in one synchronous step. Derived views live in
//! [`selectors`].

mod apply;
mod command;
mod error;
mod id;
pub mod seed;
pub mod selectors;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, commit, validate};
pub use command::{Command, Committed};
pub use error::CoreError;
pub use id::generate_id;
pub use selectors::{AggregateMetrics, FarmEggCount, ReportWithFarm, WeeklyEggEntry};
pub use state::{Operation, OperationStatus, State};
