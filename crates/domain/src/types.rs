// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Opaque identifier of a registered farm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FarmId(String);

impl FarmId {
    /// Creates a new `FarmId` from its textual form.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FarmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of a submitted daily report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Creates a new `ReportId` from its textual form.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The husbandry purpose of a flock.
///
/// This is a closed set; no other categories exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlockType {
    /// Egg-laying hens.
    Layers,
    /// Meat birds.
    Broilers,
    /// Breeding stock.
    Breeders,
    /// Free-range flock.
    #[serde(rename = "Free Range")]
    FreeRange,
}

impl FlockType {
    /// All flock types in display order.
    pub const ALL: [Self; 4] = [Self::Layers, Self::Broilers, Self::Breeders, Self::FreeRange];

    /// Returns the string representation of this flock type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Layers => "Layers",
            Self::Broilers => "Broilers",
            Self::Breeders => "Breeders",
            Self::FreeRange => "Free Range",
        }
    }
}

impl FromStr for FlockType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Layers" => Ok(Self::Layers),
            "Broilers" => Ok(Self::Broilers),
            "Breeders" => Ok(Self::Breeders),
            "Free Range" => Ok(Self::FreeRange),
            _ => Err(DomainError::InvalidFlockType(format!(
                "Unknown flock type: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for FlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position of a farm in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude, -90 to 90.
    pub latitude: f64,
    /// Longitude, -180 to 180.
    pub longitude: f64,
}

impl Location {
    /// Creates a new `Location`.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The fields a user supplies when registering a farm.
///
/// Identity and creation time are assigned by the command processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmRegistration {
    /// Display name of the farm.
    pub farm_name: String,
    /// Name of the farm owner.
    pub owner_name: String,
    /// Where the farm is.
    pub location: Location,
    /// What the flock is kept for.
    pub flock_type: FlockType,
    /// Birds stocked at the start date.
    pub initial_bird_count: u32,
    /// The day the flock was stocked.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
}

/// A registered poultry farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    /// Unique identifier, immutable once assigned.
    pub id: FarmId,
    /// Display name of the farm.
    pub farm_name: String,
    /// Name of the farm owner.
    pub owner_name: String,
    /// Where the farm is.
    pub location: Location,
    /// What the flock is kept for.
    pub flock_type: FlockType,
    /// Birds stocked at the start date.
    pub initial_bird_count: u32,
    /// The day the flock was stocked.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
    /// When the farm was registered.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Farm {
    /// Builds a farm from a registration payload and its assigned identity.
    ///
    /// # Arguments
    ///
    /// * `id` - The freshly assigned farm identifier
    /// * `registration` - The validated registration payload
    /// * `created_at` - The creation timestamp
    #[must_use]
    pub fn from_registration(
        id: FarmId,
        registration: FarmRegistration,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            farm_name: registration.farm_name,
            owner_name: registration.owner_name,
            location: registration.location,
            flock_type: registration.flock_type,
            initial_bird_count: registration.initial_bird_count,
            start_date: registration.start_date,
            created_at,
        }
    }

    /// Returns whether this farm keeps laying hens.
    #[must_use]
    pub fn is_layer_farm(&self) -> bool {
        self.flock_type == FlockType::Layers
    }
}

/// The fields a user supplies when submitting a daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportSubmission {
    /// The farm this report is for.
    pub farm_id: FarmId,
    /// The day being reported.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Eggs collected that day.
    pub eggs_collected: u32,
    /// Feed used that day, in kilograms.
    pub feed_used: f64,
    /// Birds lost that day.
    pub mortality: u32,
}

/// One day's production record for one farm.
///
/// `farm_id` is a back-reference; the report does not own the farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Unique identifier, immutable once assigned.
    pub id: ReportId,
    /// The farm this report is for.
    pub farm_id: FarmId,
    /// The day being reported.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Eggs collected that day.
    pub eggs_collected: u32,
    /// Feed used that day, in kilograms.
    pub feed_used: f64,
    /// Birds lost that day.
    pub mortality: u32,
    /// When the report was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl DailyReport {
    /// Builds a report from a submission payload and its assigned identity.
    #[must_use]
    pub fn from_submission(
        id: ReportId,
        submission: DailyReportSubmission,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            farm_id: submission.farm_id,
            date: submission.date,
            eggs_collected: submission.eggs_collected,
            feed_used: submission.feed_used,
            mortality: submission.mortality,
            created_at,
        }
    }
}

/// A farm together with all of its reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmWithReports {
    /// The farm.
    #[serde(flatten)]
    pub farm: Farm,
    /// Reports referencing the farm, in insertion order.
    pub reports: Vec<DailyReport>,
}
