// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use flockdash::CoreError;
use flockdash_domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// One form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The field name as the form knows it, e.g. `farmName`.
    pub field: &'static str,
    /// A message suitable for showing next to the field.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// One or more request fields are invalid. Every failing field is listed.
    #[error("Invalid input: {}", join_field_errors(.errors))]
    Validation {
        /// The failing fields, in form order.
        errors: Vec<FieldError>,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl ApiError {
    /// Returns the field errors if this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ")
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::FarmNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Farm"),
            message: err.to_string(),
        },
        DomainError::InvalidFarmName(_) => rule_violation("farm_name", &err),
        DomainError::InvalidOwnerName(_) => rule_violation("owner_name", &err),
        DomainError::InvalidLocation(_) => rule_violation("location", &err),
        DomainError::InvalidFlockType(_) => rule_violation("flock_type", &err),
        DomainError::InvalidBirdCount { .. } => rule_violation("initial_bird_count", &err),
        DomainError::InvalidEggCount { .. } => rule_violation("eggs_collected", &err),
        DomainError::InvalidFeedAmount(_) => rule_violation("feed_used", &err),
        DomainError::InvalidMortality { .. } => rule_violation("mortality", &err),
        DomainError::InvalidFarmId(_) => rule_violation("farm_id", &err),
        DomainError::DateParseError { .. } => rule_violation("date", &err),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

fn rule_violation(rule: &str, err: &DomainError) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message: err.to_string(),
    }
}
