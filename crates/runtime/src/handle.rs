// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use flockdash::{
    AggregateMetrics, Command, Operation, OperationStatus, ReportWithFarm, State, WeeklyEggEntry,
};
use flockdash_domain::{
    DailyReport, DailyReportSubmission, Farm, FarmId, FarmRegistration, FarmWithReports,
};
use time::{Date, OffsetDateTime};
use tokio::sync::{mpsc, oneshot, watch};

use crate::error::CommandError;
use crate::processor::{Message, Reply};

/// Async handle to a running command processor.
///
/// Cheap to clone. Commands go through the processor's queue; reads are
/// served from the most recently published snapshot and never wait.
#[derive(Clone)]
pub struct ProcessorHandle {
    sender: mpsc::Sender<Message>,
    snapshot: watch::Receiver<Arc<State>>,
}

impl std::fmt::Debug for ProcessorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorHandle")
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl ProcessorHandle {
    pub(crate) const fn new(
        sender: mpsc::Sender<Message>,
        snapshot: watch::Receiver<Arc<State>>,
    ) -> Self {
        Self { sender, snapshot }
    }

    async fn send(&self, message: Message) -> Result<(), CommandError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| CommandError::ProcessorGone)
    }

    // ------------------------------------------------------------------
    // Request/response commands
    // ------------------------------------------------------------------

    /// Registers a farm and waits for it to be committed.
    ///
    /// # Returns
    ///
    /// The stored farm, with its assigned id and creation timestamp.
    ///
    /// # Errors
    ///
    /// * [`CommandError::Rejected`] if the registration is out of range.
    /// * [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn register_farm(
        &self,
        registration: FarmRegistration,
    ) -> Result<Farm, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(Message::Command {
            command: Command::RegisterFarm { registration },
            reply: Some(Reply::Farm(tx)),
        })
        .await?;
        rx.await.map_err(|_| CommandError::ProcessorGone)?
    }

    /// Submits a daily report and waits for it to be committed.
    ///
    /// The farm is looked up when the processor receives the command.
    ///
    /// # Errors
    ///
    /// * [`CommandError::Rejected`] with reason `Farm not found` if the
    ///   farm is not in the store, or a range message.
    /// * [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn submit_daily_report(
        &self,
        submission: DailyReportSubmission,
    ) -> Result<DailyReport, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(Message::Command {
            command: Command::SubmitDailyReport { submission },
            reply: Some(Reply::Report(tx)),
        })
        .await?;
        rx.await.map_err(|_| CommandError::ProcessorGone)?
    }

    /// Reloads the farm collection.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn fetch_farms(&self) -> Result<Vec<Farm>, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(Message::Fetch {
            operation: Operation::FetchFarms,
            reply: Some(Reply::Farms(tx)),
        })
        .await?;
        rx.await.map_err(|_| CommandError::ProcessorGone)?
    }

    /// Reloads the report collection.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn fetch_reports(&self) -> Result<Vec<DailyReport>, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(Message::Fetch {
            operation: Operation::FetchReports,
            reply: Some(Reply::Reports(tx)),
        })
        .await?;
        rx.await.map_err(|_| CommandError::ProcessorGone)?
    }

    /// Clears every operation's error flag.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn clear_errors(&self) -> Result<(), CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(Message::ClearErrors { reply: tx }).await?;
        rx.await.map_err(|_| CommandError::ProcessorGone)
    }

    // ------------------------------------------------------------------
    // Fire-and-forget commands
    // ------------------------------------------------------------------

    /// Queues a farm registration without waiting for the outcome.
    ///
    /// Progress is visible through [`Self::status`] and [`Self::subscribe`].
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn dispatch_register_farm(
        &self,
        registration: FarmRegistration,
    ) -> Result<(), CommandError> {
        self.send(Message::Command {
            command: Command::RegisterFarm { registration },
            reply: None,
        })
        .await
    }

    /// Queues a daily report without waiting for the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ProcessorGone`] if the processor has exited.
    pub async fn dispatch_submit_daily_report(
        &self,
        submission: DailyReportSubmission,
    ) -> Result<(), CommandError> {
        self.send(Message::Command {
            command: Command::SubmitDailyReport { submission },
            reply: None,
        })
        .await
    }

    // ------------------------------------------------------------------
    // Snapshot reads
    // ------------------------------------------------------------------

    /// The most recently published store snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<State> {
        Arc::clone(&self.snapshot.borrow())
    }

    /// A receiver that is notified after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<State>> {
        self.snapshot.clone()
    }

    /// Whether the processor task is still accepting work.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }

    #[must_use]
    pub fn status(&self, operation: Operation) -> OperationStatus {
        self.snapshot().status(operation).clone()
    }

    #[must_use]
    pub fn farms(&self) -> Vec<Farm> {
        self.snapshot().farms().to_vec()
    }

    #[must_use]
    pub fn farm(&self, farm_id: &FarmId) -> Option<Farm> {
        self.snapshot().farm(farm_id).cloned()
    }

    #[must_use]
    pub fn all_reports(&self) -> Vec<DailyReport> {
        self.snapshot().all_reports().to_vec()
    }

    #[must_use]
    pub fn reports_by_farm(&self, farm_id: &FarmId) -> Vec<DailyReport> {
        self.snapshot()
            .reports_by_farm(farm_id)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn farm_with_reports(&self, farm_id: &FarmId) -> Option<FarmWithReports> {
        self.snapshot().farm_with_reports(farm_id)
    }

    /// Dashboard totals, using the current UTC date as today.
    #[must_use]
    pub fn aggregate_metrics(&self) -> AggregateMetrics {
        self.snapshot().aggregate_metrics(today())
    }

    /// Egg counts for the trailing week ending today (UTC).
    #[must_use]
    pub fn weekly_egg_series(&self, farm_id: Option<&FarmId>) -> Vec<WeeklyEggEntry> {
        self.snapshot().weekly_egg_series(today(), farm_id)
    }

    #[must_use]
    pub fn reports_with_farm_names(&self) -> Vec<ReportWithFarm> {
        self.snapshot().reports_with_farm_names()
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
