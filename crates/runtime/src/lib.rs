// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Asynchronous command processor for the farm dashboard.
//!
//! [`spawn`] starts an actor task that owns a [`flockdash::State`] and
//! returns a [`ProcessorHandle`]. Every dispatched operation is marked
//! pending at once and resolves after the configured latency, in dispatch
//! order per operation kind. Readers get immutable snapshots published
//! after each mutation.

mod config;
mod error;
mod handle;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_LATENCY, DEFAULT_QUEUE_CAPACITY, ProcessorConfig};
pub use error::CommandError;
pub use handle::ProcessorHandle;

use std::sync::Arc;

use flockdash::State;
use tokio::sync::{mpsc, watch};
use tracing::{Instrument, info_span};

/// Spawns a command processor that owns `state`.
///
/// Must be called from within a tokio runtime. The processor runs until
/// every handle clone is dropped and all parked operations have resolved.
#[must_use]
pub fn spawn(state: State, config: ProcessorConfig) -> ProcessorHandle {
    let (tx, rx) = mpsc::channel::<processor::Message>(config.queue_capacity.max(1));
    let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(state.clone()));
    let span = info_span!("processor", latency_ms = config.latency.as_millis());

    tokio::spawn(
        processor::run_processor(state, rx, snapshot_tx, config.latency).instrument(span),
    );

    ProcessorHandle::new(tx, snapshot_rx)
}
