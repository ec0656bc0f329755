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

//! Form boundary for the farm dashboard.
//!
//! Raw form values are checked field by field here before anything is
//! dispatched. The synchronous entry points below validate a request,
//! apply it to a store and return a response DTO; the asynchronous
//! command processor reuses the same validation functions.

mod error;
mod request_response;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{ApiError, FieldError, translate_core_error, translate_domain_error};
pub use request_response::{
    RegisterFarmRequest, RegisterFarmResponse, SubmitDailyReportRequest,
    SubmitDailyReportResponse,
};
pub use validation::{validate_register_farm, validate_submit_daily_report};

use flockdash::{Command, Committed, State, apply};
use flockdash_domain::{DailyReportSubmission, FarmRegistration};
use time::OffsetDateTime;

/// Registers a farm against a store without simulated latency.
///
/// # Arguments
///
/// * `state` - The store to commit into
/// * `request` - The raw form values
/// * `now` - The commit timestamp
///
/// # Errors
///
/// Returns an error if any field is invalid or a domain rule rejects
/// the registration. The store's register-farm status records the failure
/// only when the command reached the store.
pub fn register_farm(
    state: &mut State,
    request: &RegisterFarmRequest,
    now: OffsetDateTime,
) -> Result<RegisterFarmResponse, ApiError> {
    let registration: FarmRegistration = validate_register_farm(request)?;
    let command: Command = Command::RegisterFarm { registration };

    match apply(state, command, now).map_err(translate_core_error)? {
        Committed::FarmRegistered(farm) => {
            let message: String = format!("Successfully registered farm '{}'", farm.farm_name);
            Ok(RegisterFarmResponse { farm, message })
        }
        Committed::ReportSubmitted(report) => Err(ApiError::DomainRuleViolation {
            rule: String::from("command_outcome"),
            message: format!("Unexpected report '{}' from farm registration", report.id),
        }),
    }
}

/// Submits a daily report against a store without simulated latency.
///
/// # Errors
///
/// Returns an error if any field is invalid or the farm is not in the
/// store.
pub fn submit_daily_report(
    state: &mut State,
    request: &SubmitDailyReportRequest,
    now: OffsetDateTime,
) -> Result<SubmitDailyReportResponse, ApiError> {
    let submission: DailyReportSubmission = validate_submit_daily_report(request)?;
    let command: Command = Command::SubmitDailyReport { submission };

    match apply(state, command, now).map_err(translate_core_error)? {
        Committed::ReportSubmitted(report) => {
            let message: String = format!(
                "Successfully submitted report for farm '{}' on {}",
                report.farm_id,
                flockdash_domain::iso_date::format(report.date)
            );
            Ok(SubmitDailyReportResponse { report, message })
        }
        Committed::FarmRegistered(farm) => Err(ApiError::DomainRuleViolation {
            rule: String::from("command_outcome"),
            message: format!("Unexpected farm '{}' from report submission", farm.id),
        }),
    }
}
