// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Phase classification and rendering.
//!
//! The illuminated percentage alone cannot tell a waxing Moon from a waning
//! one, so the classifier also looks at the percentage 24 hours later:
//!
//! ```text
//!  0            New
//!  0 <  p < 50  Waxing Crescent    /  Waning Crescent
//! 50            First quarter      /  Last quarter
//! 50 <  p < 100 Waxing Gibbous     /  Waning Gibbous
//! 100           Full
//! ```
//!
//! The exact values are tested on the percentage rounded to the nearest
//! integer.

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, TimeZone};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::MoonClock;

/// Glyph repeated by [`Render::Bar`].
pub const BAR_GLYPH: char = '#';

// ═══════════════════════════════════════════════════════════════════════════
// Phase / Trend
// ═══════════════════════════════════════════════════════════════════════════

/// Direction of the illumination change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Trend {
    Waxing,
    Waning,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Waxing => "Waxing",
            Trend::Waning => "Waning",
        })
    }
}

/// The eight named phases of a lunation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl Phase {
    /// Classify from today's percentage and the percentage one day later.
    pub fn classify(now: f64, tomorrow: f64) -> Self {
        let rounded = now.round();
        let waxing = tomorrow > now;
        if rounded == 100.0 {
            Phase::Full
        } else if rounded == 0.0 {
            Phase::New
        } else if rounded == 50.0 {
            if waxing {
                Phase::FirstQuarter
            } else {
                Phase::LastQuarter
            }
        } else {
            match (waxing, now < 50.0) {
                (true, true) => Phase::WaxingCrescent,
                (true, false) => Phase::WaxingGibbous,
                (false, true) => Phase::WaningCrescent,
                (false, false) => Phase::WaningGibbous,
            }
        }
    }

    /// Label printed for this phase.
    pub const fn label(&self) -> &'static str {
        match self {
            Phase::New => "New",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::Full => "Full",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::LastQuarter => "Last quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Waxing or waning; `None` at New and Full.
    pub const fn trend(&self) -> Option<Trend> {
        match self {
            Phase::New | Phase::Full => None,
            Phase::WaxingCrescent | Phase::FirstQuarter | Phase::WaxingGibbous => {
                Some(Trend::Waxing)
            }
            Phase::WaningGibbous | Phase::LastQuarter | Phase::WaningCrescent => {
                Some(Trend::Waning)
            }
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PhaseRecord
// ═══════════════════════════════════════════════════════════════════════════

/// How a [`PhaseRecord`] is printed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Render {
    /// `<timestamp>: <label> moon at <pct>%`
    #[default]
    Label,
    /// `<timestamp>: ####…`, one glyph per rounded percent.
    Bar,
}

/// Illumination of the Moon at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseRecord {
    pub instant: DateTime<FixedOffset>,
    pub phase: Option<Phase>,
    pub illumination: f64,
}

impl PhaseRecord {
    /// Printable view of the record in the given style.
    #[inline]
    pub fn render(&self, style: Render) -> Rendered<'_> {
        Rendered {
            record: self,
            style,
        }
    }

    /// RFC 3339 timestamp with whole seconds, `Z` for UTC.
    pub fn timestamp(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for PhaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(Render::Label), f)
    }
}

/// Display adapter returned by [`PhaseRecord::render`].
#[derive(Debug, Copy, Clone)]
pub struct Rendered<'a> {
    record: &'a PhaseRecord,
    style: Render,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        write!(f, "{}: ", record.timestamp())?;
        match (self.style, record.phase) {
            (Render::Bar, _) => {
                let width = record.illumination.round().max(0.0) as usize;
                let bar: String = std::iter::repeat(BAR_GLYPH).take(width).collect();
                f.write_str(&bar)
            }
            (Render::Label, Some(phase)) => {
                write!(f, "{phase} moon at {:.1}%", record.illumination)
            }
            (Render::Label, None) => write!(f, "moon at {:.1}%", record.illumination),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Classification on the clock
// ═══════════════════════════════════════════════════════════════════════════

impl MoonClock {
    /// Percentage and named phase at `instant`.
    pub fn classify<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> PhaseRecord {
        let instant = instant.fixed_offset();
        let now = self.illumination(&instant);
        let tomorrow = self.illumination(&(instant + Duration::days(1)));
        PhaseRecord {
            instant,
            phase: Some(Phase::classify(now, tomorrow)),
            illumination: now,
        }
    }

    /// Percentage only, without a phase label.
    pub fn measure<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> PhaseRecord {
        let instant = instant.fixed_offset();
        PhaseRecord {
            instant,
            phase: None,
            illumination: self.illumination(&instant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(phase: Option<Phase>, illumination: f64) -> PhaseRecord {
        PhaseRecord {
            instant: Utc
                .with_ymd_and_hms(2024, 1, 25, 18, 0, 0)
                .unwrap()
                .fixed_offset(),
            phase,
            illumination,
        }
    }

    #[test]
    fn test_extremes_ignore_tomorrow() {
        assert_eq!(Phase::classify(99.6, 99.9), Phase::Full);
        assert_eq!(Phase::classify(100.0, 97.0), Phase::Full);
        assert_eq!(Phase::classify(0.4, 3.0), Phase::New);
        assert_eq!(Phase::classify(0.0, 0.0), Phase::New);
    }

    #[test]
    fn test_quarters_use_direction() {
        assert_eq!(Phase::classify(49.9, 60.8), Phase::FirstQuarter);
        assert_eq!(Phase::classify(50.4, 39.8), Phase::LastQuarter);
        // Equal values are not waxing.
        assert_eq!(Phase::classify(50.0, 50.0), Phase::LastQuarter);
    }

    #[test]
    fn test_crescent_and_gibbous() {
        assert_eq!(Phase::classify(20.0, 30.0), Phase::WaxingCrescent);
        assert_eq!(Phase::classify(20.0, 10.0), Phase::WaningCrescent);
        assert_eq!(Phase::classify(70.0, 80.0), Phase::WaxingGibbous);
        assert_eq!(Phase::classify(70.0, 60.0), Phase::WaningGibbous);
        // 49.4 rounds to 49: still a crescent.
        assert_eq!(Phase::classify(49.4, 55.0), Phase::WaxingCrescent);
        // 50.6 rounds to 51: gibbous.
        assert_eq!(Phase::classify(50.6, 45.0), Phase::WaningGibbous);
    }

    #[test]
    fn test_trend() {
        assert_eq!(Phase::Full.trend(), None);
        assert_eq!(Phase::New.trend(), None);
        assert_eq!(Phase::FirstQuarter.trend(), Some(Trend::Waxing));
        assert_eq!(Phase::WaningCrescent.trend(), Some(Trend::Waning));
        assert_eq!(Trend::Waxing.to_string(), "Waxing");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Phase::FirstQuarter.to_string(), "First quarter");
        assert_eq!(Phase::LastQuarter.to_string(), "Last quarter");
        assert_eq!(Phase::WaxingGibbous.to_string(), "Waxing Gibbous");
    }

    #[test]
    fn test_render_label() {
        let r = record(Some(Phase::Full), 99.98);
        assert_eq!(
            r.render(Render::Label).to_string(),
            "2024-01-25T18:00:00Z: Full moon at 100.0%"
        );
        assert_eq!(r.to_string(), r.render(Render::Label).to_string());
    }

    #[test]
    fn test_render_unlabelled() {
        let r = record(None, 42.04);
        assert_eq!(
            r.render(Render::Label).to_string(),
            "2024-01-25T18:00:00Z: moon at 42.0%"
        );
    }

    #[test]
    fn test_render_bar() {
        let r = record(Some(Phase::WaxingCrescent), 4.6);
        assert_eq!(r.render(Render::Bar).to_string(), "2024-01-25T18:00:00Z: #####");
        let empty = record(Some(Phase::New), 0.2);
        assert_eq!(empty.render(Render::Bar).to_string(), "2024-01-25T18:00:00Z: ");
    }

    #[test]
    fn test_timestamp_keeps_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let mut r = record(None, 1.0);
        r.instant = r.instant.with_timezone(&offset);
        assert_eq!(r.timestamp(), "2024-01-25T20:00:00+02:00");
    }

    #[test]
    fn test_classify_documented_full_moon() {
        let clock = MoonClock::new().unwrap();
        let t = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let r = clock.classify(&t);
        assert_eq!(r.phase, Some(Phase::Full));
        assert_eq!(r.instant, t.fixed_offset());
    }

    #[test]
    fn test_measure_has_no_label() {
        let clock = MoonClock::new().unwrap();
        let t = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let r = clock.measure(&t);
        assert_eq!(r.phase, None);
        assert_eq!(r.illumination, clock.classify(&t).illumination);
    }
}
