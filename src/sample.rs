// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Evenly spaced phase records over a span of days.
//!
//! [`Samples`] only describes the grid (start, spacing, count); records are
//! computed lazily by [`SampleIter`].  Calling [`Samples::iter`] again starts
//! a fresh pass, so the same description can be walked any number of times.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pom::MoonClock;
//!
//! let clock = MoonClock::new().unwrap();
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let week = clock.sample(&start, 7, 4).unwrap();
//!
//! assert_eq!(week.len(), 28);
//! for record in week.iter() {
//!     println!("{record}");
//! }
//! ```

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use log::debug;
use std::iter::FusedIterator;

use crate::clock::MoonClock;
use crate::error::{PomError, Result};
use crate::phase::PhaseRecord;

/// Nanoseconds in one civil day.
const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// A grid of `days × per_day` instants, `24 h / per_day` apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Samples {
    clock: MoonClock,
    start: DateTime<FixedOffset>,
    spacing_nanos: i64,
    count: usize,
    labelled: bool,
}

impl Samples {
    /// Whether records carry a phase label (default) or only a percentage.
    pub fn labelled(self, labelled: bool) -> Self {
        Self { labelled, ..self }
    }

    /// First instant of the grid.
    #[inline]
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Distance between two consecutive instants.
    #[inline]
    pub fn spacing(&self) -> Duration {
        Duration::nanoseconds(self.spacing_nanos)
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when the grid holds no record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Instant of the `index`-th record, `None` past the end of the grid.
    pub fn instant(&self, index: usize) -> Option<DateTime<FixedOffset>> {
        if index >= self.count {
            return None;
        }
        let offset = i64::try_from(index).ok()?.checked_mul(self.spacing_nanos)?;
        self.start.checked_add_signed(Duration::nanoseconds(offset))
    }

    /// Lazily evaluate the grid, oldest instant first.
    pub fn iter(&self) -> SampleIter {
        SampleIter {
            samples: *self,
            front: 0,
            back: self.count,
        }
    }
}

impl IntoIterator for Samples {
    type Item = PhaseRecord;
    type IntoIter = SampleIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Samples {
    type Item = PhaseRecord;
    type IntoIter = SampleIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`Samples`] grid.
#[derive(Debug, Clone)]
pub struct SampleIter {
    samples: Samples,
    front: usize,
    back: usize,
}

impl SampleIter {
    fn record(&self, index: usize) -> Option<PhaseRecord> {
        let instant = self.samples.instant(index)?;
        Some(if self.samples.labelled {
            self.samples.clock.classify(&instant)
        } else {
            self.samples.clock.measure(&instant)
        })
    }
}

impl Iterator for SampleIter {
    type Item = PhaseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let record = self.record(self.front)?;
        self.front += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SampleIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let record = self.record(self.back - 1)?;
        self.back -= 1;
        Some(record)
    }
}

impl ExactSizeIterator for SampleIter {}

impl FusedIterator for SampleIter {}

impl MoonClock {
    /// Describe `days × per_day` records starting at `start`.
    ///
    /// The whole grid is checked up front: every index below
    /// [`Samples::len`] maps to a representable instant.
    ///
    /// # Errors
    /// [`PomError::InvalidSampling`] when `per_day` is zero, and
    /// [`PomError::SamplingOutOfRange`] when the last instant cannot be
    /// represented.
    pub fn sample<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        days: u32,
        per_day: u32,
    ) -> Result<Samples> {
        if per_day == 0 {
            return Err(PomError::InvalidSampling);
        }
        let out_of_range = PomError::SamplingOutOfRange { days, per_day };
        let spacing_nanos = NANOS_PER_DAY / i64::from(per_day);
        let count = usize::try_from(u64::from(days) * u64::from(per_day))
            .map_err(|_| out_of_range.clone())?;
        let start = start.fixed_offset();

        if let Some(last) = count.checked_sub(1) {
            let span = i64::try_from(last)
                .ok()
                .and_then(|n| n.checked_mul(spacing_nanos))
                .ok_or_else(|| out_of_range.clone())?;
            if start.checked_add_signed(Duration::nanoseconds(span)).is_none() {
                return Err(out_of_range);
            }
        }

        debug!("sampling {count} records every {spacing_nanos} ns");
        Ok(Samples {
            clock: *self,
            start,
            spacing_nanos,
            count,
            labelled: true,
        })
    }
}
