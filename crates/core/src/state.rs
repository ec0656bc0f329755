// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use flockdash_domain::{DailyReport, Farm, FarmId, FarmWithReports};
use serde::Serialize;

/// The operations whose progress is tracked for presentation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Bulk load of the farm collection.
    FetchFarms,
    /// Bulk load of the report collection.
    FetchReports,
    /// Registration of a single farm.
    RegisterFarm,
    /// Submission of a single daily report.
    SubmitReport,
}

impl Operation {
    /// All tracked operations.
    pub const ALL: [Self; 4] = [
        Self::FetchFarms,
        Self::FetchReports,
        Self::RegisterFarm,
        Self::SubmitReport,
    ];

    /// Returns the string representation of this operation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FetchFarms => "fetch-farms",
            Self::FetchReports => "fetch-reports",
            Self::RegisterFarm => "register-farm",
            Self::SubmitReport => "submit-report",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loading and error flags for one tracked operation.
///
/// The two fields are independent: a stale error may coexist with a new
/// pending flag only until `mark_pending` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    /// Whether a command of this kind is in flight.
    pub pending: bool,
    /// The reason the last command of this kind failed, if it did.
    pub error: Option<String>,
}

impl OperationStatus {
    /// Returns whether the operation is neither pending nor failed.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.pending && self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationStatuses {
    fetch_farms: OperationStatus,
    fetch_reports: OperationStatus,
    register_farm: OperationStatus,
    submit_report: OperationStatus,
}

impl OperationStatuses {
    const fn get(&self, operation: Operation) -> &OperationStatus {
        match operation {
            Operation::FetchFarms => &self.fetch_farms,
            Operation::FetchReports => &self.fetch_reports,
            Operation::RegisterFarm => &self.register_farm,
            Operation::SubmitReport => &self.submit_report,
        }
    }

    const fn get_mut(&mut self, operation: Operation) -> &mut OperationStatus {
        match operation {
            Operation::FetchFarms => &mut self.fetch_farms,
            Operation::FetchReports => &mut self.fetch_reports,
            Operation::RegisterFarm => &mut self.register_farm,
            Operation::SubmitReport => &mut self.submit_report,
        }
    }
}

/// The canonical farm and report collections plus operation status flags.
///
/// Both collections are append-only under commands; only the bulk
/// `apply_*_loaded` operations replace them wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    farms: Vec<Farm>,
    reports: Vec<DailyReport>,
    status: OperationStatuses,
}

impl State {
    /// Creates an empty state with every operation idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding the given collections.
    #[must_use]
    pub fn with_data(farms: Vec<Farm>, reports: Vec<DailyReport>) -> Self {
        Self {
            farms,
            reports,
            status: OperationStatuses::default(),
        }
    }

    /// Appends a registered farm and settles the register-farm status.
    ///
    /// The caller guarantees the farm id is unique.
    pub fn apply_farm_registered(&mut self, farm: Farm) {
        self.farms.push(farm);
        *self.status.get_mut(Operation::RegisterFarm) = OperationStatus::default();
    }

    /// Appends a submitted report and settles the submit-report status.
    ///
    /// Does not check that the referenced farm exists.
    pub fn apply_report_submitted(&mut self, report: DailyReport) {
        self.reports.push(report);
        *self.status.get_mut(Operation::SubmitReport) = OperationStatus::default();
    }

    /// Replaces the farm collection.
    pub fn apply_farms_loaded(&mut self, farms: Vec<Farm>) {
        self.farms = farms;
        self.status.get_mut(Operation::FetchFarms).pending = false;
    }

    /// Replaces the report collection.
    pub fn apply_reports_loaded(&mut self, reports: Vec<DailyReport>) {
        self.reports = reports;
        self.status.get_mut(Operation::FetchReports).pending = false;
    }

    /// Marks an operation as in flight, clearing its previous error.
    pub fn mark_pending(&mut self, operation: Operation) {
        let status: &mut OperationStatus = self.status.get_mut(operation);
        status.pending = true;
        status.error = None;
    }

    /// Records that an operation failed.
    pub fn mark_failed(&mut self, operation: Operation, reason: impl Into<String>) {
        let status: &mut OperationStatus = self.status.get_mut(operation);
        status.pending = false;
        status.error = Some(reason.into());
    }

    /// Clears the error of every operation. Pending flags are untouched.
    pub fn clear_errors(&mut self) {
        for operation in Operation::ALL {
            self.status.get_mut(operation).error = None;
        }
    }

    /// Returns the status of one operation.
    #[must_use]
    pub const fn status(&self, operation: Operation) -> &OperationStatus {
        self.status.get(operation)
    }

    /// All farms in registration order.
    #[must_use]
    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    /// Looks up a farm by id.
    #[must_use]
    pub fn farm(&self, farm_id: &FarmId) -> Option<&Farm> {
        self.farms.iter().find(|farm| &farm.id == farm_id)
    }

    /// All reports in submission order.
    #[must_use]
    pub fn all_reports(&self) -> &[DailyReport] {
        &self.reports
    }

    /// Reports for one farm, in submission order.
    #[must_use]
    pub fn reports_by_farm(&self, farm_id: &FarmId) -> Vec<&DailyReport> {
        self.reports
            .iter()
            .filter(|report| &report.farm_id == farm_id)
            .collect()
    }

    /// A farm together with its reports, if the farm exists.
    #[must_use]
    pub fn farm_with_reports(&self, farm_id: &FarmId) -> Option<FarmWithReports> {
        let farm: &Farm = self.farm(farm_id)?;
        Some(FarmWithReports {
            farm: farm.clone(),
            reports: self
                .reports_by_farm(farm_id)
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}
