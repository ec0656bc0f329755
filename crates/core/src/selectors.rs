// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived views over the store.
//!
//! Every selector is a pure function of the state (and, where noted, of the
//! calendar date passed in as "today"). Calling one twice without an
//! intervening commit yields identical output.

use crate::state::State;
use flockdash_domain::{DailyReport, Farm, FarmId, FlockType};
use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

/// Number of days covered by the weekly egg series.
pub const WEEKLY_SERIES_DAYS: i64 = 7;

/// Farm name shown for reports whose farm is not registered.
pub const UNKNOWN_FARM_NAME: &str = "Unknown Farm";

/// Flock type label shown for reports whose farm is not registered.
pub const UNKNOWN_FLOCK_TYPE: &str = "Unknown";

const DAY_LABEL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none]");

/// Headline figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    /// Number of registered farms.
    pub total_farms: usize,
    /// Number of farms keeping layers.
    pub layer_farms: usize,
    /// Mortality summed over every report.
    pub total_mortality: u64,
    /// Initial stock of every farm minus all recorded mortality.
    ///
    /// This is a lifetime aggregate and is not clamped, so it can go negative.
    pub total_birds_current: i64,
    /// Eggs summed over every report.
    pub total_eggs_all_time: u64,
    /// Eggs summed over the reports dated today.
    pub todays_eggs: u64,
    /// Number of reports dated today.
    pub todays_report_count: usize,
}

/// Eggs one farm collected on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmEggCount {
    /// The farm.
    pub farm_id: FarmId,
    /// The farm's display name.
    pub farm_name: String,
    /// Eggs collected, 0 when no report exists.
    pub eggs: u32,
}

/// One day of the weekly egg production series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEggEntry {
    /// The calendar day.
    #[serde(with = "flockdash_domain::iso_date")]
    pub date: Date,
    /// Short axis label, e.g. `Mar 5`.
    pub label: String,
    /// One count per farm shown, in farm registration order.
    pub farms: Vec<FarmEggCount>,
}

impl WeeklyEggEntry {
    /// Eggs recorded for the first farm with the given name.
    #[must_use]
    pub fn eggs_for(&self, farm_name: &str) -> Option<u32> {
        self.farms
            .iter()
            .find(|count| count.farm_name == farm_name)
            .map(|count| count.eggs)
    }
}

/// A report joined with the name and flock type of its farm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportWithFarm {
    /// The report itself.
    #[serde(flatten)]
    pub report: DailyReport,
    /// The farm name, or `Unknown Farm`.
    pub farm_name: String,
    /// The farm's flock type; `None` when the farm is not registered.
    #[serde(serialize_with = "serialize_flock_label")]
    pub flock_type: Option<FlockType>,
}

impl ReportWithFarm {
    /// The flock type as displayed, `Unknown` when the farm is missing.
    #[must_use]
    pub fn flock_type_label(&self) -> &'static str {
        self.flock_type
            .as_ref()
            .map_or(UNKNOWN_FLOCK_TYPE, FlockType::as_str)
    }
}

#[allow(clippy::ref_option)]
fn serialize_flock_label<S: Serializer>(
    flock_type: &Option<FlockType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(
        flock_type
            .as_ref()
            .map_or(UNKNOWN_FLOCK_TYPE, FlockType::as_str),
    )
}

/// Formats a date as a short chart label such as `Jan 5`.
#[must_use]
pub fn day_label(date: Date) -> String {
    date.format(DAY_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

impl State {
    /// Computes the headline dashboard figures.
    ///
    /// # Arguments
    ///
    /// * `today` - The calendar date whose reports count as "today"
    #[must_use]
    pub fn aggregate_metrics(&self, today: Date) -> AggregateMetrics {
        let farms: &[Farm] = self.farms();
        let reports: &[DailyReport] = self.all_reports();

        let initial_birds: i64 = farms
            .iter()
            .map(|farm| i64::from(farm.initial_bird_count))
            .sum();
        let total_mortality: u64 = reports.iter().map(|r| u64::from(r.mortality)).sum();
        let total_eggs_all_time: u64 = reports.iter().map(|r| u64::from(r.eggs_collected)).sum();

        let mut todays_eggs: u64 = 0;
        let mut todays_report_count: usize = 0;
        for report in reports.iter().filter(|r| r.date == today) {
            todays_eggs += u64::from(report.eggs_collected);
            todays_report_count += 1;
        }

        AggregateMetrics {
            total_farms: farms.len(),
            layer_farms: farms.iter().filter(|farm| farm.is_layer_farm()).count(),
            total_mortality,
            total_birds_current: initial_birds
                .saturating_sub(i64::try_from(total_mortality).unwrap_or(i64::MAX)),
            total_eggs_all_time,
            todays_eggs,
            todays_report_count,
        }
    }

    /// Builds the egg production series for the trailing seven days.
    ///
    /// Without a farm filter the series covers every layer farm. With one,
    /// it covers that farm alone whatever its flock type; an unknown id
    /// yields days with no farm counts.
    ///
    /// # Arguments
    ///
    /// * `today` - The last day of the series
    /// * `farm_id` - Optional single farm to chart
    #[must_use]
    pub fn weekly_egg_series(&self, today: Date, farm_id: Option<&FarmId>) -> Vec<WeeklyEggEntry> {
        let shown: Vec<&Farm> = self
            .farms()
            .iter()
            .filter(|farm| farm_id.map_or_else(|| farm.is_layer_farm(), |id| &farm.id == id))
            .collect();

        (0..WEEKLY_SERIES_DAYS)
            .map(|offset| {
                let date: Date =
                    today.saturating_sub(Duration::days(WEEKLY_SERIES_DAYS - 1 - offset));
                let farms: Vec<FarmEggCount> = shown
                    .iter()
                    .map(|farm| FarmEggCount {
                        farm_id: farm.id.clone(),
                        farm_name: farm.farm_name.clone(),
                        eggs: self
                            .all_reports()
                            .iter()
                            .find(|r| r.farm_id == farm.id && r.date == date)
                            .map_or(0, |r| r.eggs_collected),
                    })
                    .collect();
                WeeklyEggEntry {
                    date,
                    label: day_label(date),
                    farms,
                }
            })
            .collect()
    }

    /// Joins every report with its farm, newest date first.
    ///
    /// Reports sharing a date keep their submission order.
    #[must_use]
    pub fn reports_with_farm_names(&self) -> Vec<ReportWithFarm> {
        let mut rows: Vec<ReportWithFarm> = self
            .all_reports()
            .iter()
            .map(|report| {
                let farm: Option<&Farm> = self.farm(&report.farm_id);
                ReportWithFarm {
                    report: report.clone(),
                    farm_name: farm.map_or_else(
                        || String::from(UNKNOWN_FARM_NAME),
                        |f| f.farm_name.clone(),
                    ),
                    flock_type: farm.map(|f| f.flock_type),
                }
            })
            .collect();

        // sort_by is stable
        rows.sort_by(|a, b| b.report.date.cmp(&a.report.date));
        rows
    }
}
