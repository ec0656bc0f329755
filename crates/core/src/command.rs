// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Operation;
use flockdash_domain::{DailyReport, DailyReportSubmission, Farm, FarmRegistration};

/// A command represents user intent as data only.
///
/// Commands are the only way to add farms or reports.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new farm.
    RegisterFarm {
        /// The registration payload, without identity.
        registration: FarmRegistration,
    },
    /// Submit a daily production report for an existing farm.
    SubmitDailyReport {
        /// The report payload, without identity.
        submission: DailyReportSubmission,
    },
}

impl Command {
    /// Returns the tracked operation this command reports its status under.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::RegisterFarm { .. } => Operation::RegisterFarm,
            Self::SubmitDailyReport { .. } => Operation::SubmitReport,
        }
    }
}

/// The entity produced by a committed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Committed {
    /// A farm was appended to the farm collection.
    FarmRegistered(Farm),
    /// A report was appended to the report collection.
    ReportSubmitted(DailyReport),
}
