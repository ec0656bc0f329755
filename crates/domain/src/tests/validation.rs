// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DailyReportSubmission, DomainError, Farm, FarmId, FarmRegistration, FlockType, Location,
    validate_daily_report_submission, validate_farm_exists, validate_farm_registration,
};
use time::macros::{date, datetime};

fn create_test_registration() -> FarmRegistration {
    FarmRegistration {
        farm_name: String::from("Sunrise Farms"),
        owner_name: String::from("Sarah Johnson"),
        location: Location::new(34.0522, -118.2437),
        flock_type: FlockType::Broilers,
        initial_bird_count: 8000,
        start_date: date!(2024 - 02 - 01),
    }
}

fn create_test_submission() -> DailyReportSubmission {
    DailyReportSubmission {
        farm_id: FarmId::new("demo-farm-1"),
        date: date!(2024 - 02 - 10),
        eggs_collected: 3500,
        feed_used: 250.0,
        mortality: 1,
    }
}

#[test]
fn test_validate_farm_registration_accepts_valid_payload() {
    assert!(validate_farm_registration(&create_test_registration()).is_ok());
}

#[test]
fn test_validate_farm_registration_rejects_short_farm_name() {
    let mut registration: FarmRegistration = create_test_registration();
    registration.farm_name = String::from("A");

    let result: Result<(), DomainError> = validate_farm_registration(&registration);
    assert!(matches!(result, Err(DomainError::InvalidFarmName(_))));
}

#[test]
fn test_validate_farm_registration_counts_characters_not_bytes() {
    let mut registration: FarmRegistration = create_test_registration();
    // Two characters, four bytes.
    registration.owner_name = String::from("éé");
    assert!(validate_farm_registration(&registration).is_ok());

    registration.owner_name = "x".repeat(101);
    let result: Result<(), DomainError> = validate_farm_registration(&registration);
    assert!(matches!(result, Err(DomainError::InvalidOwnerName(_))));
}

#[test]
fn test_validate_farm_registration_rejects_out_of_range_location() {
    let mut registration: FarmRegistration = create_test_registration();
    registration.location = Location::new(90.5, 0.0);
    assert!(matches!(
        validate_farm_registration(&registration),
        Err(DomainError::InvalidLocation(_))
    ));

    registration.location = Location::new(0.0, -180.01);
    assert!(matches!(
        validate_farm_registration(&registration),
        Err(DomainError::InvalidLocation(_))
    ));

    registration.location = Location::new(f64::NAN, 0.0);
    assert!(matches!(
        validate_farm_registration(&registration),
        Err(DomainError::InvalidLocation(_))
    ));
}

#[test]
fn test_validate_farm_registration_accepts_boundary_location() {
    let mut registration: FarmRegistration = create_test_registration();
    registration.location = Location::new(-90.0, 180.0);
    assert!(validate_farm_registration(&registration).is_ok());
}

#[test]
fn test_validate_farm_registration_rejects_bird_count_bounds() {
    let mut registration: FarmRegistration = create_test_registration();
    registration.initial_bird_count = 0;
    assert_eq!(
        validate_farm_registration(&registration),
        Err(DomainError::InvalidBirdCount { count: 0 })
    );

    registration.initial_bird_count = 1_000_001;
    assert_eq!(
        validate_farm_registration(&registration),
        Err(DomainError::InvalidBirdCount { count: 1_000_001 })
    );

    registration.initial_bird_count = 1_000_000;
    assert!(validate_farm_registration(&registration).is_ok());
}

#[test]
fn test_validate_daily_report_submission_accepts_valid_payload() {
    assert!(validate_daily_report_submission(&create_test_submission()).is_ok());
}

#[test]
fn test_validate_daily_report_submission_rejects_empty_farm_id() {
    let mut submission: DailyReportSubmission = create_test_submission();
    submission.farm_id = FarmId::new("");
    assert!(matches!(
        validate_daily_report_submission(&submission),
        Err(DomainError::InvalidFarmId(_))
    ));
}

#[test]
fn test_validate_daily_report_submission_rejects_out_of_range_values() {
    let mut submission: DailyReportSubmission = create_test_submission();
    submission.eggs_collected = 100_001;
    assert_eq!(
        validate_daily_report_submission(&submission),
        Err(DomainError::InvalidEggCount { count: 100_001 })
    );

    let mut submission: DailyReportSubmission = create_test_submission();
    submission.feed_used = -0.5;
    assert!(matches!(
        validate_daily_report_submission(&submission),
        Err(DomainError::InvalidFeedAmount(_))
    ));

    let mut submission: DailyReportSubmission = create_test_submission();
    submission.feed_used = f64::NAN;
    assert!(matches!(
        validate_daily_report_submission(&submission),
        Err(DomainError::InvalidFeedAmount(_))
    ));

    let mut submission: DailyReportSubmission = create_test_submission();
    submission.mortality = 10_001;
    assert_eq!(
        validate_daily_report_submission(&submission),
        Err(DomainError::InvalidMortality { count: 10_001 })
    );
}

#[test]
fn test_validate_farm_exists() {
    let farm: Farm = Farm::from_registration(
        FarmId::new("demo-farm-2"),
        create_test_registration(),
        datetime!(2024-02-01 08:00 UTC),
    );
    let farms: Vec<Farm> = vec![farm];

    assert!(validate_farm_exists(&FarmId::new("demo-farm-2"), &farms).is_ok());
    assert_eq!(
        validate_farm_exists(&FarmId::new("nonexistent"), &farms),
        Err(DomainError::FarmNotFound {
            farm_id: String::from("nonexistent"),
        })
    );
}
