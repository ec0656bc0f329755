// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data used to populate a fresh dashboard.
//!
//! Report values are random within fixed ranges; only the ranges are stable.

use crate::state::State;
use flockdash_domain::{DailyReport, Farm, FarmId, FlockType, Location, ReportId};
use time::macros::{date, datetime};
use time::{Date, Duration, OffsetDateTime};

/// Id of the seeded layer farm.
pub const DEMO_LAYER_FARM_ID: &str = "demo-farm-1";
/// Id of the seeded broiler farm.
pub const DEMO_BROILER_FARM_ID: &str = "demo-farm-2";
/// Days of history seeded per farm, ending today.
pub const DEMO_DAYS: i64 = 7;

/// Returns a uniformly random value in `base..base + span`.
fn random_in(base: u32, span: u32) -> u32 {
    base + rand::random::<u32>() % span
}

/// The two demo farms.
#[must_use]
pub fn demo_farms() -> Vec<Farm> {
    vec![
        Farm {
            id: FarmId::new(DEMO_LAYER_FARM_ID),
            farm_name: String::from("Green Valley Poultry"),
            owner_name: String::from("John Smith"),
            location: Location::new(40.7128, -74.006),
            flock_type: FlockType::Layers,
            initial_bird_count: 5000,
            start_date: date!(2024 - 01 - 15),
            created_at: datetime!(2024-01-15 08:00 UTC),
        },
        Farm {
            id: FarmId::new(DEMO_BROILER_FARM_ID),
            farm_name: String::from("Sunrise Farms"),
            owner_name: String::from("Sarah Johnson"),
            location: Location::new(34.0522, -118.2437),
            flock_type: FlockType::Broilers,
            initial_bird_count: 8000,
            start_date: date!(2024 - 02 - 01),
            created_at: datetime!(2024-02-01 08:00 UTC),
        },
    ]
}

/// Seven days of reports for each demo farm, oldest first.
///
/// Layer reports: eggs 3500-3999, feed 250-299 kg, mortality 0-4.
/// Broiler reports: no eggs, feed 400-479 kg, mortality 0-7.
#[must_use]
pub fn demo_reports(today: Date) -> Vec<DailyReport> {
    let mut reports: Vec<DailyReport> = Vec::new();

    for days_ago in (0..DEMO_DAYS).rev() {
        let day: Date = today.saturating_sub(Duration::days(days_ago));
        let created_at: OffsetDateTime = day.midnight().assume_utc() + Duration::hours(8);

        reports.push(DailyReport {
            id: ReportId::new(&format!("report-1-{days_ago}")),
            farm_id: FarmId::new(DEMO_LAYER_FARM_ID),
            date: day,
            eggs_collected: random_in(3500, 500),
            feed_used: f64::from(random_in(250, 50)),
            mortality: random_in(0, 5),
            created_at,
        });

        reports.push(DailyReport {
            id: ReportId::new(&format!("report-2-{days_ago}")),
            farm_id: FarmId::new(DEMO_BROILER_FARM_ID),
            date: day,
            eggs_collected: 0,
            feed_used: f64::from(random_in(400, 80)),
            mortality: random_in(0, 8),
            created_at,
        });
    }

    reports
}

/// A state holding the demo farms and their reports, every operation idle.
#[must_use]
pub fn demo_state(today: Date) -> State {
    State::with_data(demo_farms(), demo_reports(today))
}
