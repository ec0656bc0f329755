// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, Committed};
use crate::error::CoreError;
use crate::id::generate_id;
use crate::state::{Operation, State};
use flockdash_domain::{
    DailyReport, Farm, FarmId, ReportId, validate_daily_report_submission, validate_farm_exists,
    validate_farm_registration,
};
use time::OffsetDateTime;

/// Checks a command against the current state without changing it.
///
/// Field ranges are re-checked even though the form layer validates them
/// first. Report submissions must reference a registered farm.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to check
///
/// # Errors
///
/// Returns an error if:
/// - A payload field is out of range
/// - The referenced farm does not exist
pub fn validate(state: &State, command: &Command) -> Result<(), CoreError> {
    match command {
        Command::RegisterFarm { registration } => {
            validate_farm_registration(registration)?;
        }
        Command::SubmitDailyReport { submission } => {
            validate_daily_report_submission(submission)?;
            validate_farm_exists(&submission.farm_id, state.farms())?;
        }
    }
    Ok(())
}

/// Stamps identity on a command and appends the result to the state.
///
/// The command must already have passed [`validate`].
///
/// # Arguments
///
/// * `state` - The state to mutate
/// * `command` - The validated command
/// * `created_at` - The creation timestamp to record
pub fn commit(state: &mut State, command: Command, created_at: OffsetDateTime) -> Committed {
    match command {
        Command::RegisterFarm { registration } => {
            let id: FarmId = FarmId::new(&generate_id(created_at));
            let farm: Farm = Farm::from_registration(id, registration, created_at);
            state.apply_farm_registered(farm.clone());
            Committed::FarmRegistered(farm)
        }
        Command::SubmitDailyReport { submission } => {
            let id: ReportId = ReportId::new(&generate_id(created_at));
            let report: DailyReport = DailyReport::from_submission(id, submission, created_at);
            state.apply_report_submitted(report.clone());
            Committed::ReportSubmitted(report)
        }
    }
}

/// Runs a command to completion synchronously.
///
/// Marks the operation pending, validates, and either commits or records
/// the failure reason. A failed command leaves both collections untouched.
///
/// # Errors
///
/// Returns an error if the command fails [`validate`].
pub fn apply(
    state: &mut State,
    command: Command,
    created_at: OffsetDateTime,
) -> Result<Committed, CoreError> {
    let operation: Operation = command.operation();
    state.mark_pending(operation);

    if let Err(err) = validate(state, &command) {
        state.mark_failed(operation, err.reason());
        return Err(err);
    }

    Ok(commit(state, command, created_at))
}
