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

mod error;
mod types;
mod validation;

pub mod iso_date;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use types::{
    DailyReport, DailyReportSubmission, Farm, FarmId, FarmRegistration, FarmWithReports,
    FlockType, Location, ReportId,
};
pub use validation::{
    MAX_BIRD_COUNT, MAX_EGGS_COLLECTED, MAX_FEED_USED_KG, MAX_MORTALITY, MAX_NAME_CHARS,
    MIN_BIRD_COUNT, MIN_NAME_CHARS, validate_daily_report_submission, validate_farm_exists,
    validate_farm_registration,
};
