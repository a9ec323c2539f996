// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Forward search for the next full or new moon.
//!
//! The search is a plain linear scan: starting at a given instant it steps
//! forward by [`SearchConfig::step`] until the rounded illumination equals the
//! target percentage.  A lunation lasts about 29.5 days, so any target is met
//! within roughly 15 days; the scan still gives up after
//! [`SearchConfig::horizon`] rather than looping forever.

use chrono::{DateTime, Duration, TimeZone};
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::MoonClock;
use crate::error::{PomError, Result};

/// Phase the search is looking for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Target {
    Full,
    New,
}

impl Target {
    /// Rounded illumination percentage that marks the target.
    pub const fn percentage(&self) -> f64 {
        match self {
            Target::Full => 100.0,
            Target::New => 0.0,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Full => "full",
            Target::New => "new",
        })
    }
}

impl FromStr for Target {
    type Err = PomError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Target::Full),
            "new" => Ok(Target::New),
            _ => Err(PomError::InvalidTarget(s.to_owned())),
        }
    }
}

/// Step and horizon of the forward scan.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Time between two evaluations.
    pub step: Duration,
    /// Scan length after which the search gives up.
    pub horizon: Duration,
}

impl SearchConfig {
    /// Hourly steps over 60 days.
    pub fn new() -> Self {
        Self {
            step: Duration::hours(1),
            horizon: Duration::days(60),
        }
    }

    /// Same horizon, different step.
    pub fn with_step(self, step: Duration) -> Self {
        Self { step, ..self }
    }

    /// Same step, different horizon.
    pub fn with_horizon(self, horizon: Duration) -> Self {
        Self { horizon, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MoonClock {
    /// First instant at or after `start` whose rounded illumination equals
    /// the target percentage.
    ///
    /// # Errors
    /// [`PomError::InvalidStep`] when the step is not positive, and
    /// [`PomError::SearchExhausted`] when nothing matches within the horizon
    /// or the scan runs past the last representable instant.
    pub fn next_phase<Tz: TimeZone>(
        &self,
        target: Target,
        start: &DateTime<Tz>,
        config: &SearchConfig,
    ) -> Result<DateTime<Tz>> {
        if config.step <= Duration::zero() {
            return Err(PomError::InvalidStep);
        }
        let wanted = target.percentage();
        // A horizon past the end of the calendar scans until the calendar ends.
        let limit = start.clone().checked_add_signed(config.horizon);
        let mut instant = start.clone();

        loop {
            if limit.as_ref().is_some_and(|limit| instant > *limit) {
                break;
            }
            if self.illumination(&instant).round() == wanted {
                debug!("next {target} moon at {:?}", instant.naive_utc());
                return Ok(instant);
            }
            match instant.checked_add_signed(config.step) {
                Some(next) => instant = next,
                None => break,
            }
        }

        warn!(
            "no {target} moon within {} days of {:?}",
            config.horizon.num_days(),
            start.naive_utc()
        );
        Err(PomError::SearchExhausted {
            target,
            horizon_days: config.horizon.num_days(),
        })
    }
}

/// Render an instant to minute precision: `YYYY-MM-DDTHH:MM:00±hh:mm`.
pub fn format_minute<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .fixed_offset()
        .format("%Y-%m-%dT%H:%M:00%:z")
        .to_string()
}
