// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

/// Default simulated latency applied to every operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// Default capacity of the processor's inbound queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Settings for a command processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// How long each dispatched operation waits before it resolves.
    pub latency: Duration,
    /// How many messages may wait in the inbound queue before senders
    /// are made to wait.
    pub queue_capacity: usize,
}

impl ProcessorConfig {
    /// Creates a config with the given latency and the default queue size.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }
}
