// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors returned to callers of the command processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command failed validation or referenced a missing farm.
    ///
    /// The same reason is recorded in the operation's error flag.
    #[error("{reason}")]
    Rejected {
        /// Human-readable reason, e.g. `Farm not found`.
        reason: String,
    },
    /// The processor task has exited and can no longer accept work.
    #[error("command processor is no longer running")]
    ProcessorGone,
}
