// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil time → days since the reference epoch.
//!
//! [`MoonClock`] owns the reference epoch (1989-12-31 00:00 UTC) and turns any
//! `chrono::DateTime<Tz>` into a signed [`Days`] offset, which is what the
//! [`ephemeris`](crate::ephemeris) consumes.  Building the epoch is the only
//! fallible step and happens once, in [`MoonClock::new`]; everything
//! downstream is infallible.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;
use qtty::{Day, Days, Seconds};

use crate::ephemeris;
use crate::error::{PomError, Result};

/// Reference epoch as `(year, month, day, hour)` in UTC.
pub const EPOCH_UTC: (i32, u32, u32, u32) = (1989, 12, 31, 0);

/// Human readable form of [`EPOCH_UTC`], used in error messages.
const EPOCH_LABEL: &str = "1989-12-31T00:00:00Z";

/// Build the reference epoch as a UTC instant.
pub fn epoch() -> Result<DateTime<Utc>> {
    let (year, month, day, hour) = EPOCH_UTC;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(PomError::Epoch(EPOCH_LABEL))
}

/// Adapter from absolute instants to the ephemeris' day count.
///
/// The struct is `Copy` and holds no mutable state, so a single clock can be
/// shared freely between threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoonClock {
    epoch: DateTime<Utc>,
}

impl MoonClock {
    /// Create a clock anchored on the standard epoch.
    pub fn new() -> Result<Self> {
        let epoch = epoch()?;
        debug!("moon clock anchored at {epoch}");
        Ok(Self { epoch })
    }

    /// The reference epoch.
    #[inline]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Signed days elapsed between the epoch and `instant`.
    ///
    /// Instants before the epoch give negative values. No rounding is
    /// applied: one hour is exactly `1/24` day.
    pub fn days_since_epoch<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Days {
        let delta = instant.naive_utc() - self.epoch.naive_utc();
        let seconds = Seconds::new(delta.num_seconds() as f64)
            + Seconds::new(delta.subsec_nanos() as f64 / 1e9);
        seconds.to::<Day>()
    }

    /// Illuminated percentage of the Moon at `instant`.
    #[inline]
    pub fn illumination<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        ephemeris::illumination(self.days_since_epoch(instant))
    }
}
