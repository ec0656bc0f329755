// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{DailyReportSubmission, Farm, FarmId, FarmRegistration};

/// Minimum length of farm and owner names, in characters.
pub const MIN_NAME_CHARS: usize = 2;
/// Maximum length of farm and owner names, in characters.
pub const MAX_NAME_CHARS: usize = 100;
/// Smallest flock a farm may be registered with.
pub const MIN_BIRD_COUNT: u32 = 1;
/// Largest flock a farm may be registered with.
pub const MAX_BIRD_COUNT: u32 = 1_000_000;
/// Upper bound on eggs collected in one report.
pub const MAX_EGGS_COLLECTED: u32 = 100_000;
/// Upper bound on feed used in one report, in kilograms.
pub const MAX_FEED_USED_KG: f64 = 10_000.0;
/// Upper bound on mortality in one report.
pub const MAX_MORTALITY: u32 = 10_000;

fn name_length_ok(value: &str) -> bool {
    let len: usize = value.chars().count();
    (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len)
}

/// Validates the field constraints of a farm registration.
///
/// This is the core's own line of defence; the form layer performs the
/// same checks with per-field messages before dispatch.
///
/// # Arguments
///
/// * `registration` - The registration payload to validate
///
/// # Errors
///
/// Returns an error if:
/// - The farm or owner name is not 2 to 100 characters
/// - The latitude or longitude is out of range or not finite
/// - The initial bird count is not between 1 and 1,000,000
pub fn validate_farm_registration(registration: &FarmRegistration) -> Result<(), DomainError> {
    if !name_length_ok(&registration.farm_name) {
        return Err(DomainError::InvalidFarmName(String::from(
            "Farm name must be between 2 and 100 characters",
        )));
    }

    if !name_length_ok(&registration.owner_name) {
        return Err(DomainError::InvalidOwnerName(String::from(
            "Owner name must be between 2 and 100 characters",
        )));
    }

    // NaN fails both range checks
    let latitude: f64 = registration.location.latitude;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(DomainError::InvalidLocation(format!(
            "Latitude must be between -90 and 90, got {latitude}"
        )));
    }

    let longitude: f64 = registration.location.longitude;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(DomainError::InvalidLocation(format!(
            "Longitude must be between -180 and 180, got {longitude}"
        )));
    }

    let count: u32 = registration.initial_bird_count;
    if !(MIN_BIRD_COUNT..=MAX_BIRD_COUNT).contains(&count) {
        return Err(DomainError::InvalidBirdCount { count });
    }

    Ok(())
}

/// Validates the field constraints of a daily report submission.
///
/// Does not check that the referenced farm exists; see [`validate_farm_exists`].
///
/// # Errors
///
/// Returns an error if:
/// - The farm id is empty
/// - Eggs collected exceeds 100,000
/// - Feed used is negative, above 10,000 kg, or not a number
/// - Mortality exceeds 10,000
pub fn validate_daily_report_submission(
    submission: &DailyReportSubmission,
) -> Result<(), DomainError> {
    if submission.farm_id.value().is_empty() {
        return Err(DomainError::InvalidFarmId(String::from(
            "Farm id cannot be empty",
        )));
    }

    if submission.eggs_collected > MAX_EGGS_COLLECTED {
        return Err(DomainError::InvalidEggCount {
            count: submission.eggs_collected,
        });
    }

    let feed_used: f64 = submission.feed_used;
    if !(0.0..=MAX_FEED_USED_KG).contains(&feed_used) {
        return Err(DomainError::InvalidFeedAmount(format!(
            "Feed used must be between 0 and 10000 kg, got {feed_used}"
        )));
    }

    if submission.mortality > MAX_MORTALITY {
        return Err(DomainError::InvalidMortality {
            count: submission.mortality,
        });
    }

    Ok(())
}

/// Validates that a farm with the given id is registered.
///
/// # Arguments
///
/// * `farm_id` - The farm being referenced
/// * `farms` - The currently registered farms
///
/// # Errors
///
/// Returns `DomainError::FarmNotFound` if no farm has the given id.
pub fn validate_farm_exists(farm_id: &FarmId, farms: &[Farm]) -> Result<(), DomainError> {
    if farms.iter().any(|farm| &farm.id == farm_id) {
        Ok(())
    } else {
        Err(DomainError::FarmNotFound {
            farm_id: farm_id.value().to_string(),
        })
    }
}
