// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidFarmName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid farm name: test");

    let err: DomainError = DomainError::InvalidOwnerName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid owner name: test");

    let err: DomainError = DomainError::InvalidLocation(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid location: test");

    let err: DomainError = DomainError::InvalidFlockType(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid flock type: test");

    let err: DomainError = DomainError::InvalidBirdCount { count: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid initial bird count: 0. Must be between 1 and 1000000"
    );

    let err: DomainError = DomainError::InvalidMortality { count: 20_000 };
    assert_eq!(
        format!("{err}"),
        "Invalid mortality: 20000. Must be between 0 and 10000"
    );

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2024-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2024-13-01': bad month"
    );
}

#[test]
fn test_farm_not_found_reason_omits_the_id() {
    let err: DomainError = DomainError::FarmNotFound {
        farm_id: String::from("nonexistent"),
    };
    assert_eq!(format!("{err}"), "Farm not found");
}
