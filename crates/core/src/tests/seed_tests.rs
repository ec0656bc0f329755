// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seed::{DEMO_BROILER_FARM_ID, DEMO_LAYER_FARM_ID, demo_state};
use crate::{Operation, State};
use flockdash_domain::{FarmId, FlockType};
use time::macros::date;

#[test]
fn test_demo_state_has_two_farms_and_a_week_of_reports_each() {
    let today = date!(2024 - 03 - 10);
    let state: State = demo_state(today);

    assert_eq!(state.farms().len(), 2);
    assert_eq!(state.farms()[0].flock_type, FlockType::Layers);
    assert_eq!(state.farms()[1].flock_type, FlockType::Broilers);
    assert_eq!(state.all_reports().len(), 14);
    assert_eq!(state.all_reports()[0].date, date!(2024 - 03 - 04));
    assert_eq!(state.all_reports()[0].id.value(), "report-1-6");
    assert_eq!(state.all_reports()[13].date, today);
    assert_eq!(state.all_reports()[13].id.value(), "report-2-0");
    for operation in Operation::ALL {
        assert!(state.status(operation).is_idle());
    }
}

#[test]
fn test_demo_report_values_stay_in_range() {
    for _ in 0..20 {
        let state: State = demo_state(date!(2024 - 03 - 10));

        for report in state.reports_by_farm(&FarmId::new(DEMO_LAYER_FARM_ID)) {
            assert!((3500..4000).contains(&report.eggs_collected));
            assert!((250.0..300.0).contains(&report.feed_used));
            assert!(report.mortality < 5);
        }
        for report in state.reports_by_farm(&FarmId::new(DEMO_BROILER_FARM_ID)) {
            assert_eq!(report.eggs_collected, 0);
            assert!((400.0..480.0).contains(&report.feed_used));
            assert!(report.mortality < 8);
        }
    }
}

#[test]
fn test_demo_metrics_start_from_thirteen_thousand_birds() {
    let state: State = demo_state(date!(2024 - 03 - 10));
    let metrics = state.aggregate_metrics(date!(2024 - 03 - 10));

    assert_eq!(
        metrics.total_birds_current,
        13_000 - i64::try_from(metrics.total_mortality).unwrap()
    );
    assert_eq!(metrics.todays_report_count, 2);
}
