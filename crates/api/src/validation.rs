// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation of form requests.
//!
//! Every failing field is reported, not just the first, so the form can
//! mark them all at once. A request that passes converts into a domain
//! payload ready for dispatch.

use crate::error::{ApiError, FieldError};
use crate::request_response::{RegisterFarmRequest, SubmitDailyReportRequest};
use flockdash_domain::{
    DailyReportSubmission, FarmId, FarmRegistration, FlockType, Location, MAX_BIRD_COUNT,
    MAX_EGGS_COLLECTED, MAX_FEED_USED_KG, MAX_MORTALITY, MAX_NAME_CHARS, MIN_BIRD_COUNT,
    MIN_NAME_CHARS, iso_date,
};
use std::str::FromStr;
use time::Date;

fn check_name(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<String> {
    let len: usize = value.chars().count();
    if len < MIN_NAME_CHARS {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at least {MIN_NAME_CHARS} characters"),
        ));
        None
    } else if len > MAX_NAME_CHARS {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at most {MAX_NAME_CHARS} characters"),
        ));
        None
    } else {
        Some(value.to_string())
    }
}

fn check_coordinate(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: f64,
    limit: f64,
    message: &str,
) -> Option<f64> {
    if (-limit..=limit).contains(&value) {
        Some(value)
    } else {
        errors.push(FieldError::new(field, message));
        None
    }
}

fn check_date(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    required_message: &str,
) -> Option<Date> {
    if value.is_empty() {
        errors.push(FieldError::new(field, required_message));
        return None;
    }
    match iso_date::parse(value) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "Invalid date"));
            None
        }
    }
}

/// Checks that a form number is a whole count within `min..=max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn check_count(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: f64,
    min: u32,
    max: u32,
    below_min_message: &str,
) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        errors.push(FieldError::new(field, "Must be a whole number"));
        None
    } else if value < f64::from(min) {
        errors.push(FieldError::new(field, below_min_message));
        None
    } else if value > f64::from(max) {
        errors.push(FieldError::new(field, format!("Must be at most {max}")));
        None
    } else {
        // In range and integral, so the cast is exact.
        Some(value as u32)
    }
}

/// Validates a farm registration request.
///
/// # Arguments
///
/// * `request` - The raw form values
///
/// # Returns
///
/// The domain registration payload.
///
/// # Errors
///
/// Returns `ApiError::Validation` listing every invalid field.
pub fn validate_register_farm(request: &RegisterFarmRequest) -> Result<FarmRegistration, ApiError> {
    let mut errors: Vec<FieldError> = Vec::new();

    let farm_name = check_name(&mut errors, "farmName", "Farm name", &request.farm_name);
    let owner_name = check_name(&mut errors, "ownerName", "Owner name", &request.owner_name);
    let latitude = check_coordinate(
        &mut errors,
        "latitude",
        request.latitude,
        90.0,
        "Invalid latitude",
    );
    let longitude = check_coordinate(
        &mut errors,
        "longitude",
        request.longitude,
        180.0,
        "Invalid longitude",
    );
    let flock_type: Option<FlockType> = FlockType::from_str(&request.flock_type)
        .map_err(|_| {
            errors.push(FieldError::new("flockType", "Invalid flock type"));
        })
        .ok();
    let initial_bird_count = check_count(
        &mut errors,
        "initialBirdCount",
        request.initial_bird_count,
        MIN_BIRD_COUNT,
        MAX_BIRD_COUNT,
        "Must have at least 1 bird",
    );
    let start_date = check_date(
        &mut errors,
        "startDate",
        &request.start_date,
        "Start date is required",
    );

    match (
        farm_name,
        owner_name,
        latitude,
        longitude,
        flock_type,
        initial_bird_count,
        start_date,
    ) {
        (
            Some(farm_name),
            Some(owner_name),
            Some(latitude),
            Some(longitude),
            Some(flock_type),
            Some(initial_bird_count),
            Some(start_date),
        ) if errors.is_empty() => Ok(FarmRegistration {
            farm_name,
            owner_name,
            location: Location::new(latitude, longitude),
            flock_type,
            initial_bird_count,
            start_date,
        }),
        _ => Err(ApiError::Validation { errors }),
    }
}

/// Validates a daily report request.
///
/// Does not check that the farm exists; the command processor does that
/// against the live store.
///
/// # Errors
///
/// Returns `ApiError::Validation` listing every invalid field.
pub fn validate_submit_daily_report(
    request: &SubmitDailyReportRequest,
) -> Result<DailyReportSubmission, ApiError> {
    let mut errors: Vec<FieldError> = Vec::new();

    let farm_id: Option<FarmId> = if request.farm_id.is_empty() {
        errors.push(FieldError::new("farmId", "Please select a farm"));
        None
    } else {
        Some(FarmId::new(&request.farm_id))
    };
    let date = check_date(&mut errors, "date", &request.date, "Date is required");
    let eggs_collected = check_count(
        &mut errors,
        "eggsCollected",
        request.eggs_collected,
        0,
        MAX_EGGS_COLLECTED,
        "Cannot be negative",
    );
    let feed_used: Option<f64> = if !request.feed_used.is_finite() {
        errors.push(FieldError::new("feedUsed", "Must be a number"));
        None
    } else if request.feed_used < 0.0 {
        errors.push(FieldError::new("feedUsed", "Cannot be negative"));
        None
    } else if request.feed_used > MAX_FEED_USED_KG {
        errors.push(FieldError::new(
            "feedUsed",
            format!("Must be at most {MAX_FEED_USED_KG}"),
        ));
        None
    } else {
        Some(request.feed_used)
    };
    let mortality = check_count(
        &mut errors,
        "mortality",
        request.mortality,
        0,
        MAX_MORTALITY,
        "Cannot be negative",
    );

    match (farm_id, date, eggs_collected, feed_used, mortality) {
        (Some(farm_id), Some(date), Some(eggs_collected), Some(feed_used), Some(mortality))
            if errors.is_empty() =>
        {
            Ok(DailyReportSubmission {
                farm_id,
                date,
                eggs_collected,
                feed_used,
                mortality,
            })
        }
        _ => Err(ApiError::Validation { errors }),
    }
}
