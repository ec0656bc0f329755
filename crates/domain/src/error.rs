// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Farm name is too short or too long.
    InvalidFarmName(String),
    /// Owner name is too short or too long.
    InvalidOwnerName(String),
    /// Latitude or longitude is out of range.
    InvalidLocation(String),
    /// Flock type is not one of the known categories.
    InvalidFlockType(String),
    /// Initial bird count is out of range.
    InvalidBirdCount {
        /// The rejected count.
        count: u32,
    },
    /// Eggs collected is out of range.
    InvalidEggCount {
        /// The rejected count.
        count: u32,
    },
    /// Feed used is negative, too large, or not a number.
    InvalidFeedAmount(String),
    /// Mortality is out of range.
    InvalidMortality {
        /// The rejected count.
        count: u32,
    },
    /// Farm identifier is empty.
    InvalidFarmId(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The referenced farm does not exist.
    FarmNotFound {
        /// The farm identifier that was looked up.
        farm_id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFarmName(msg) => write!(f, "Invalid farm name: {msg}"),
            Self::InvalidOwnerName(msg) => write!(f, "Invalid owner name: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "Invalid location: {msg}"),
            Self::InvalidFlockType(msg) => write!(f, "Invalid flock type: {msg}"),
            Self::InvalidBirdCount { count } => {
                write!(
                    f,
                    "Invalid initial bird count: {count}. Must be between 1 and 1000000"
                )
            }
            Self::InvalidEggCount { count } => {
                write!(
                    f,
                    "Invalid eggs collected: {count}. Must be between 0 and 100000"
                )
            }
            Self::InvalidFeedAmount(msg) => write!(f, "Invalid feed used: {msg}"),
            Self::InvalidMortality { count } => {
                write!(f, "Invalid mortality: {count}. Must be between 0 and 10000")
            }
            Self::InvalidFarmId(msg) => write!(f, "Invalid farm id: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            // The reason string is shown verbatim to users.
            Self::FarmNotFound { .. } => write!(f, "Farm not found"),
        }
    }
}

impl std::error::Error for DomainError {}
