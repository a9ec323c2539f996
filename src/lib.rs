// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Phase of the Moon
//!
//! This crate computes the illuminated fraction of the Moon at any instant
//! with Duffett-Smith's classical approximation, names the phase, lists the
//! Moon over a span of days and finds the next full or new moon.
//!
//! # Core types
//!
//! - [`MoonClock`] — anchors instants on the 1989-12-31 reference epoch and
//!   drives every operation below.
//! - [`LunarTerms`] — intermediate angles of one ephemeris evaluation.
//! - [`Phase`] / [`Trend`] — the eight named phases and their direction.
//! - [`PhaseRecord`] — `(instant, phase, percentage)`, printable through
//!   [`Render`].
//! - [`Samples`] — restartable grid of records over a number of days.
//! - [`Target`] / [`SearchConfig`] — next full / new moon search.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pom::{MoonClock, Phase, SearchConfig, Target};
//!
//! let clock = MoonClock::new().unwrap();
//! let t = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
//! assert_eq!(clock.classify(&t).phase, Some(Phase::Full));
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let full = clock.next_phase(Target::Full, &start, &SearchConfig::default()).unwrap();
//! assert_eq!(pom::format_minute(&full), "2024-01-25T01:00:00+00:00");
//! ```

pub mod angle;
mod clock;
pub mod date;
pub mod ephemeris;
mod error;
mod phase;
mod sample;
mod search;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{normalize_degrees, to_radians};
pub use clock::{epoch, MoonClock, EPOCH_UTC};
pub use date::parse_date;
pub use ephemeris::{illumination, terms, LunarTerms};
pub use error::{PomError, Result};
pub use phase::{Phase, PhaseRecord, Render, Rendered, Trend, BAR_GLYPH};
pub use sample::{SampleIter, Samples};
pub use search::{format_minute, SearchConfig, Target};
