// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor loop that owns the domain store and resolves commands.
//!
//! The actor is the only code that mutates the [`State`]. Messages arrive
//! from [`ProcessorHandle`](crate::ProcessorHandle) over a bounded queue.
//! Each accepted operation is marked pending, checked against the store as
//! it is at dispatch, then parked in the latency lane for its kind. Lanes
//! release jobs in dispatch order once their delay has elapsed, and the
//! actor commits or fails them. A fresh snapshot is published after every
//! mutation.

use std::sync::Arc;
use std::time::Duration;

use flockdash::{Command, Committed, CoreError, Operation, State, commit, validate};
use flockdash_domain::{DailyReport, Farm};
use time::OffsetDateTime;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, sleep_until};
use tracing::{Instrument, debug, info, info_span, warn};

use crate::error::CommandError;

/// Reply channel for a caller waiting on an operation's outcome.
pub(crate) enum Reply {
    /// Waits for a registered farm.
    Farm(oneshot::Sender<Result<Farm, CommandError>>),
    /// Waits for a stored report.
    Report(oneshot::Sender<Result<DailyReport, CommandError>>),
    /// Waits for the reloaded farm collection.
    Farms(oneshot::Sender<Result<Vec<Farm>, CommandError>>),
    /// Waits for the reloaded report collection.
    Reports(oneshot::Sender<Result<Vec<DailyReport>, CommandError>>),
}

impl Reply {
    /// Answers the caller with a rejection. A dropped receiver means the
    /// caller stopped waiting.
    fn reject(self, err: CommandError) {
        match self {
            Self::Farm(tx) => {
                let _ = tx.send(Err(err));
            }
            Self::Report(tx) => {
                let _ = tx.send(Err(err));
            }
            Self::Farms(tx) => {
                let _ = tx.send(Err(err));
            }
            Self::Reports(tx) => {
                let _ = tx.send(Err(err));
            }
        }
    }
}

/// Messages sent from the handle to the actor loop.
pub(crate) enum Message {
    /// Dispatch a farm registration or report submission.
    Command {
        /// The command payload.
        command: Command,
        /// Present for request/response callers, absent for fire-and-forget.
        reply: Option<Reply>,
    },
    /// Dispatch a bulk reload of one collection.
    Fetch {
        /// Either `FetchFarms` or `FetchReports`.
        operation: Operation,
        /// Present for request/response callers.
        reply: Option<Reply>,
    },
    /// Clear every operation's error flag.
    ClearErrors {
        /// Acknowledged once the cleared snapshot is published.
        reply: oneshot::Sender<()>,
    },
}

/// Work parked in a latency lane.
enum Job {
    Command {
        operation: Operation,
        outcome: Result<Command, CoreError>,
        reply: Option<Reply>,
    },
    Fetch {
        operation: Operation,
        reply: Option<Reply>,
    },
}

impl Job {
    const fn operation(&self) -> Operation {
        match self {
            Self::Command { operation, .. } | Self::Fetch { operation, .. } => *operation,
        }
    }
}

struct Scheduled {
    due: Instant,
    job: Job,
}

/// One sender per operation kind.
struct Lanes {
    fetch_farms: mpsc::UnboundedSender<Scheduled>,
    fetch_reports: mpsc::UnboundedSender<Scheduled>,
    register_farm: mpsc::UnboundedSender<Scheduled>,
    submit_report: mpsc::UnboundedSender<Scheduled>,
}

impl Lanes {
    fn spawn(resolved: &mpsc::UnboundedSender<Job>) -> Self {
        Self {
            fetch_farms: spawn_lane(Operation::FetchFarms, resolved.clone()),
            fetch_reports: spawn_lane(Operation::FetchReports, resolved.clone()),
            register_farm: spawn_lane(Operation::RegisterFarm, resolved.clone()),
            submit_report: spawn_lane(Operation::SubmitReport, resolved.clone()),
        }
    }

    const fn lane(&self, operation: Operation) -> &mpsc::UnboundedSender<Scheduled> {
        match operation {
            Operation::FetchFarms => &self.fetch_farms,
            Operation::FetchReports => &self.fetch_reports,
            Operation::RegisterFarm => &self.register_farm,
            Operation::SubmitReport => &self.submit_report,
        }
    }
}

/// Starts a lane that holds each job until it is due, in arrival order.
///
/// The lane exits once its sender is dropped and the queue is drained.
fn spawn_lane(
    operation: Operation,
    resolved: mpsc::UnboundedSender<Job>,
) -> mpsc::UnboundedSender<Scheduled> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Scheduled>();
    let span = info_span!("lane", operation = %operation);
    tokio::spawn(
        async move {
            while let Some(Scheduled { due, job }) = rx.recv().await {
                sleep_until(due).await;
                if resolved.send(job).is_err() {
                    break;
                }
            }
            debug!("lane drained");
        }
        .instrument(span),
    );
    tx
}

/// The actor's owned state.
struct Processor {
    state: State,
    latency: Duration,
    snapshot: watch::Sender<Arc<State>>,
}

impl Processor {
    fn publish(&self) {
        self.snapshot.send_replace(Arc::new(self.state.clone()));
    }

    /// Marks the operation pending and builds the job to park.
    fn dispatch(&mut self, message: Message) -> Option<Job> {
        match message {
            Message::Command { command, reply } => {
                let operation: Operation = command.operation();
                self.state.mark_pending(operation);
                self.publish();
                let outcome: Result<Command, CoreError> =
                    validate(&self.state, &command).map(|()| command);
                if let Err(err) = &outcome {
                    debug!(
                        operation = %operation,
                        reason = %err.reason(),
                        "command rejected at dispatch"
                    );
                }
                Some(Job::Command {
                    operation,
                    outcome,
                    reply,
                })
            }
            Message::Fetch { operation, reply } => {
                self.state.mark_pending(operation);
                self.publish();
                Some(Job::Fetch { operation, reply })
            }
            Message::ClearErrors { reply } => {
                self.state.clear_errors();
                self.publish();
                let _ = reply.send(());
                None
            }
        }
    }

    /// Parks a job in its lane, due one latency window from now.
    fn schedule(&mut self, lanes: Option<&Lanes>, job: Job) {
        let operation: Operation = job.operation();
        let Some(lanes) = lanes else {
            warn!(operation = %operation, "lanes closed, resolving immediately");
            self.resolve(job);
            return;
        };
        let scheduled: Scheduled = Scheduled {
            due: Instant::now() + self.latency,
            job,
        };
        if let Err(err) = lanes.lane(operation).send(scheduled) {
            warn!(operation = %operation, "latency lane closed, resolving immediately");
            self.resolve(err.0.job);
        }
    }

    /// Moves a due job to its terminal state and answers the caller.
    fn resolve(&mut self, job: Job) {
        match job {
            Job::Command {
                operation,
                outcome: Ok(command),
                reply,
            } => {
                let committed: Committed =
                    commit(&mut self.state, command, OffsetDateTime::now_utc());
                self.publish();
                match committed {
                    Committed::FarmRegistered(farm) => {
                        info!(
                            operation = %operation,
                            farm_id = %farm.id,
                            farm_name = %farm.farm_name,
                            "farm registered"
                        );
                        if let Some(Reply::Farm(tx)) = reply {
                            let _ = tx.send(Ok(farm));
                        }
                    }
                    Committed::ReportSubmitted(report) => {
                        info!(
                            operation = %operation,
                            report_id = %report.id,
                            farm_id = %report.farm_id,
                            "report submitted"
                        );
                        if let Some(Reply::Report(tx)) = reply {
                            let _ = tx.send(Ok(report));
                        }
                    }
                }
            }
            Job::Command {
                operation,
                outcome: Err(err),
                reply,
            } => {
                let reason: String = err.reason();
                self.state.mark_failed(operation, reason.clone());
                self.publish();
                warn!(operation = %operation, reason = %reason, "operation failed");
                if let Some(reply) = reply {
                    reply.reject(CommandError::Rejected { reason });
                }
            }
            Job::Fetch {
                operation: Operation::FetchReports,
                reply,
            } => {
                let reports: Vec<DailyReport> = self.state.all_reports().to_vec();
                self.state.apply_reports_loaded(reports.clone());
                self.publish();
                debug!(count = reports.len(), "reports loaded");
                if let Some(Reply::Reports(tx)) = reply {
                    let _ = tx.send(Ok(reports));
                }
            }
            Job::Fetch { operation, reply } => {
                let farms: Vec<Farm> = self.state.farms().to_vec();
                self.state.apply_farms_loaded(farms.clone());
                self.publish();
                debug!(operation = %operation, count = farms.len(), "farms loaded");
                if let Some(Reply::Farms(tx)) = reply {
                    let _ = tx.send(Ok(farms));
                }
            }
        }
    }
}

/// Runs the processor until every handle is dropped and all parked work
/// has resolved.
///
/// # Arguments
///
/// * `state` - The initial store contents
/// * `inbox` - Receiving end of the handle queue
/// * `snapshot` - Where snapshots are published after each mutation
/// * `latency` - Delay applied to every dispatched operation
pub(crate) async fn run_processor(
    state: State,
    mut inbox: mpsc::Receiver<Message>,
    snapshot: watch::Sender<Arc<State>>,
    latency: Duration,
) {
    let (resolved_tx, mut resolved_rx) = mpsc::unbounded_channel::<Job>();
    let mut lanes: Option<Lanes> = Some(Lanes::spawn(&resolved_tx));
    // Only the lanes hold resolved senders, so the channel closes once
    // every lane has drained.
    drop(resolved_tx);

    let mut processor: Processor = Processor {
        state,
        latency,
        snapshot,
    };
    info!(latency_ms = latency.as_millis(), "command processor started");

    loop {
        tokio::select! {
            message = inbox.recv(), if lanes.is_some() => match message {
                Some(message) => {
                    if let Some(job) = processor.dispatch(message) {
                        processor.schedule(lanes.as_ref(), job);
                    }
                }
                None => {
                    debug!("all handles dropped, draining lanes");
                    lanes = None;
                }
            },
            job = resolved_rx.recv() => match job {
                Some(job) => processor.resolve(job),
                None => break,
            },
        }
    }

    info!("command processor stopped");
}
