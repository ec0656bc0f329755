// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use flockdash::State;
use flockdash_domain::{DailyReportSubmission, FarmId, FarmRegistration, FlockType, Location};
use time::macros::date;

use crate::{ProcessorConfig, ProcessorHandle, spawn};

pub const TEST_LATENCY: Duration = Duration::from_millis(600);

pub fn spawn_empty() -> ProcessorHandle {
    spawn(State::new(), ProcessorConfig::with_latency(TEST_LATENCY))
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

pub fn create_test_submission(farm_id: &FarmId, eggs: u32) -> DailyReportSubmission {
    DailyReportSubmission {
        farm_id: farm_id.clone(),
        date: date!(2024 - 03 - 09),
        eggs_collected: eggs,
        feed_used: 25.0,
        mortality: 1,
    }
}
