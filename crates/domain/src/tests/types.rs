// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DailyReport, DailyReportSubmission, DomainError, Farm, FarmId, FarmRegistration, FlockType,
    Location, ReportId, iso_date,
};
use std::str::FromStr;
use time::macros::{date, datetime};

fn create_test_registration() -> FarmRegistration {
    FarmRegistration {
        farm_name: String::from("Green Valley Poultry"),
        owner_name: String::from("John Smith"),
        location: Location::new(40.7128, -74.006),
        flock_type: FlockType::Layers,
        initial_bird_count: 5000,
        start_date: date!(2024 - 01 - 15),
    }
}

#[test]
fn test_flock_type_round_trips_through_text() {
    for flock_type in FlockType::ALL {
        let parsed: FlockType = FlockType::from_str(flock_type.as_str()).unwrap();
        assert_eq!(parsed, flock_type);
    }
    assert_eq!(FlockType::FreeRange.to_string(), "Free Range");
}

#[test]
fn test_flock_type_rejects_unknown_text() {
    let result: Result<FlockType, DomainError> = FlockType::from_str("Ducks");
    assert!(matches!(result, Err(DomainError::InvalidFlockType(_))));
}

#[test]
fn test_free_range_serializes_with_space() {
    let json: String = serde_json::to_string(&FlockType::FreeRange).unwrap();
    assert_eq!(json, "\"Free Range\"");
}

#[test]
fn test_farm_from_registration_keeps_fields() {
    let created_at = datetime!(2024-01-15 08:00 UTC);
    let farm: Farm = Farm::from_registration(
        FarmId::new("farm-1"),
        create_test_registration(),
        created_at,
    );

    assert_eq!(farm.id.value(), "farm-1");
    assert_eq!(farm.farm_name, "Green Valley Poultry");
    assert_eq!(farm.initial_bird_count, 5000);
    assert_eq!(farm.created_at, created_at);
    assert!(farm.is_layer_farm());
}

#[test]
fn test_farm_serializes_camel_case_with_iso_dates() {
    let farm: Farm = Farm::from_registration(
        FarmId::new("farm-1"),
        create_test_registration(),
        datetime!(2024-01-15 08:00 UTC),
    );

    let value: serde_json::Value = serde_json::to_value(&farm).unwrap();
    assert_eq!(value["farmName"], "Green Valley Poultry");
    assert_eq!(value["flockType"], "Layers");
    assert_eq!(value["startDate"], "2024-01-15");
    assert_eq!(value["createdAt"], "2024-01-15T08:00:00Z");
    assert_eq!(value["location"]["latitude"], 40.7128);
}

#[test]
fn test_report_from_submission_keeps_fields() {
    let submission: DailyReportSubmission = DailyReportSubmission {
        farm_id: FarmId::new("farm-1"),
        date: date!(2024 - 03 - 02),
        eggs_collected: 3600,
        feed_used: 260.5,
        mortality: 2,
    };

    let report: DailyReport = DailyReport::from_submission(
        ReportId::new("report-1"),
        submission,
        datetime!(2024-03-02 18:30 UTC),
    );

    assert_eq!(report.id.value(), "report-1");
    assert_eq!(report.farm_id, FarmId::new("farm-1"));
    assert_eq!(report.eggs_collected, 3600);
    assert!((report.feed_used - 260.5).abs() < f64::EPSILON);
    assert_eq!(report.mortality, 2);
}

#[test]
fn test_iso_date_parse_and_format() {
    let parsed = iso_date::parse("2024-02-01").unwrap();
    assert_eq!(parsed, date!(2024 - 02 - 01));
    assert_eq!(iso_date::format(parsed), "2024-02-01");
}

#[test]
fn test_iso_date_rejects_garbage() {
    let result = iso_date::parse("02/01/2024");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}
