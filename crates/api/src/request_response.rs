// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the two dashboard commands.
//!
//! Requests carry raw form values; numbers arrive as `f64` because form
//! inputs do not guarantee integers or signs.

use flockdash_domain::{DailyReport, Farm};
use serde::{Deserialize, Serialize};

/// API request to register a new farm.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFarmRequest {
    /// The farm's display name.
    pub farm_name: String,
    /// The owner's name.
    pub owner_name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// One of `Layers`, `Broilers`, `Breeders`, `Free Range`.
    pub flock_type: String,
    /// Birds stocked at the start date.
    pub initial_bird_count: f64,
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
}

/// API request to submit a daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDailyReportRequest {
    /// The farm being reported on.
    pub farm_id: String,
    /// Report date, `YYYY-MM-DD`.
    pub date: String,
    /// Eggs collected.
    pub eggs_collected: f64,
    /// Feed used in kilograms.
    pub feed_used: f64,
    /// Birds lost.
    pub mortality: f64,
}

/// API response for a successful farm registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterFarmResponse {
    /// The registered farm, with its assigned id.
    pub farm: Farm,
    /// A success message.
    pub message: String,
}

/// API response for a successful report submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitDailyReportResponse {
    /// The stored report, with its assigned id.
    pub report: DailyReport,
    /// A success message.
    pub message: String,
}
