// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_registration, create_test_submission};
use crate::{Command, State, apply, generate_id};
use flockdash_domain::FlockType;
use std::collections::HashSet;
use time::OffsetDateTime;
use time::macros::{date, datetime};

#[test]
fn test_generated_id_has_timestamp_and_suffix() {
    let id: String = generate_id(datetime!(2024-01-15 08:00 UTC));
    let (millis, suffix) = id.split_once('-').unwrap();

    assert_eq!(millis, "1705305600000");
    assert_eq!(suffix.len(), 9);
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );
}

#[test]
fn test_generated_ids_are_unique_within_one_millisecond() {
    let now: OffsetDateTime = datetime!(2024-01-15 08:00 UTC);
    let ids: HashSet<String> = (0..20_000).map(|_| generate_id(now)).collect();
    assert_eq!(ids.len(), 20_000);
}

#[test]
fn test_ids_across_mixed_commands_are_pairwise_distinct() {
    let mut state: State = State::new();
    let now: OffsetDateTime = datetime!(2024-01-15 08:00 UTC);
    apply(
        &mut state,
        Command::RegisterFarm {
            registration: create_test_registration("Hilltop", FlockType::Layers),
        },
        now,
    )
    .unwrap();
    let farm_id: String = state.farms()[0].id.value().to_string();

    for i in 0..500 {
        let command: Command = if i % 2 == 0 {
            Command::RegisterFarm {
                registration: create_test_registration("Farm", FlockType::Broilers),
            }
        } else {
            Command::SubmitDailyReport {
                submission: create_test_submission(&farm_id, date!(2024 - 01 - 15)),
            }
        };
        apply(&mut state, command, now).unwrap();
    }

    let mut ids: HashSet<&str> = HashSet::new();
    for farm in state.farms() {
        assert!(ids.insert(farm.id.value()));
    }
    for report in state.all_reports() {
        assert!(ids.insert(report.id.value()));
    }
    assert_eq!(ids.len(), 501);
}
