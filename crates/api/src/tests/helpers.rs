// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use flockdash::State;
use flockdash_domain::{Farm, FarmId, FarmRegistration, FlockType, Location};
use time::OffsetDateTime;
use time::macros::{date, datetime};

use crate::{RegisterFarmRequest, SubmitDailyReportRequest};

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2024-03-10 12:00 UTC)
}

pub fn create_valid_farm_request() -> RegisterFarmRequest {
    RegisterFarmRequest {
        farm_name: String::from("Sunny Acres"),
        owner_name: String::from("Jordan Lee"),
        latitude: 39.7392,
        longitude: -104.9903,
        flock_type: String::from("Layers"),
        initial_bird_count: 2500.0,
        start_date: String::from("2024-01-15"),
    }
}

pub fn create_valid_report_request(farm_id: &str) -> SubmitDailyReportRequest {
    SubmitDailyReportRequest {
        farm_id: String::from(farm_id),
        date: String::from("2024-03-09"),
        eggs_collected: 1800.0,
        feed_used: 120.5,
        mortality: 2.0,
    }
}

pub fn create_state_with_farm(farm_id: &str) -> State {
    let registration: FarmRegistration = FarmRegistration {
        farm_name: String::from("Existing Farm"),
        owner_name: String::from("Sam Ortiz"),
        location: Location::new(35.0, -90.0),
        flock_type: FlockType::Layers,
        initial_bird_count: 1000,
        start_date: date!(2024 - 01 - 01),
    };
    let farm: Farm =
        Farm::from_registration(FarmId::new(farm_id), registration, create_test_timestamp());
    State::with_data(vec![farm], Vec::new())
}
