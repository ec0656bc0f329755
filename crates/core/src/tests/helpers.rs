// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use flockdash_domain::{
    DailyReport, DailyReportSubmission, Farm, FarmId, FarmRegistration, FlockType, Location,
    ReportId,
};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2024-03-10 12:00 UTC)
}

pub fn create_test_registration(name: &str, flock_type: FlockType) -> FarmRegistration {
    FarmRegistration {
        farm_name: String::from(name),
        owner_name: String::from("Test Owner"),
        location: Location::new(40.0, -74.0),
        flock_type,
        initial_bird_count: 1000,
        start_date: date!(2024 - 01 - 01),
    }
}

pub fn create_test_submission(farm_id: &str, date: Date) -> DailyReportSubmission {
    DailyReportSubmission {
        farm_id: FarmId::new(farm_id),
        date,
        eggs_collected: 100,
        feed_used: 25.0,
        mortality: 1,
    }
}

pub fn create_test_farm(id: &str, name: &str, flock_type: FlockType, birds: u32) -> Farm {
    let mut registration: FarmRegistration = create_test_registration(name, flock_type);
    registration.initial_bird_count = birds;
    Farm::from_registration(FarmId::new(id), registration, create_test_timestamp())
}

pub fn create_test_report(
    id: &str,
    farm_id: &str,
    date: Date,
    eggs: u32,
    mortality: u32,
) -> DailyReport {
    DailyReport {
        id: ReportId::new(id),
        farm_id: FarmId::new(farm_id),
        date,
        eggs_collected: eggs,
        feed_used: 10.0,
        mortality,
        created_at: create_test_timestamp(),
    }
}
