// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the clock, the drivers and the date parser.
//!
//! The calculator and the classifier are total functions and never fail;
//! every variant here belongs to a boundary: building the epoch, validating
//! driver parameters, or parsing user-supplied dates.

use thiserror::Error;

use crate::search::Target;

/// Errors raised by `pom`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PomError {
    /// The compiled-in reference epoch could not be built.
    #[error("reference epoch {0} is not a valid UTC instant")]
    Epoch(&'static str),

    /// A date string did not match `YYYY-MM`, `YYYY-MM-DD` or `YYYY-MM-DD:HH`.
    #[error("invalid date `{input}`: {reason}")]
    InvalidDate { input: String, reason: String },

    /// Sampling density must be at least one record per day.
    #[error("sampling density must be at least one record per day")]
    InvalidSampling,

    /// The last sampled instant would fall outside the representable range.
    #[error("{days} days at {per_day} records per day run past the representable date range")]
    SamplingOutOfRange { days: u32, per_day: u32 },

    /// The search step must move forward in time.
    #[error("search step must be a positive duration")]
    InvalidStep,

    /// A moon state name other than `full` or `new`.
    #[error("unknown moon state `{0}`, expected `full` or `new`")]
    InvalidTarget(String),

    /// No instant matched the target within the search horizon.
    #[error("no {target} moon found within {horizon_days} days")]
    SearchExhausted { target: Target, horizon_days: i64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PomError>;
