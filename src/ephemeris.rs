// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Phase of the Moon — Duffett-Smith approximation
//!
//! Illuminated fraction of the lunar disk from the number of days elapsed
//! since the 1989-12-31 00:00 UTC reference epoch, following the sections of
//! *Peter Duffett-Smith — Practical Astronomy with your Calculator (3rd ed.)*
//! used by the BSD `pom(6)` program:
//!
//! | Section | Quantity |
//! |---------|----------|
//! | §46 | Sun's mean anomaly and ecliptic longitude |
//! | §65 | Moon's mean longitude, anomaly, node and the four main perturbations |
//! | §67 | Moon's age and illuminated fraction |
//!
//! Every intermediate angle that the book reduces to `[0°, 360°)` is wrapped
//! with [`normalize_degrees`] and the wrapped value is the one carried into
//! the following step.
//!
//! ## Quick Example
//! ```rust
//! use pom::ephemeris::illumination;
//! use qtty::Days;
//!
//! let pct = illumination(Days::new(0.0));
//! assert!((pct - 8.530_222_938_578_259).abs() < 1e-9);
//! ```
//!
//! ## Accuracy
//! The approximation is good to a fraction of a percent over a few decades
//! around the epoch. Far from it the secular terms drift and results should
//! be read as indicative only.

use qtty::{Days, Degrees};
use std::f64::consts::PI;

use crate::angle::{cos_deg, normalize_degrees, sin_deg};

// ═══════════════════════════════════════════════════════════════════════════
// Orbital elements at the epoch
// ═══════════════════════════════════════════════════════════════════════════

/// Solar ecliptic longitude at the epoch.
pub const EPSILON_G: Degrees = Degrees::new(279.403_303);
/// Solar ecliptic longitude of perigee at the epoch.
pub const RHO_G: Degrees = Degrees::new(282.768_422);
/// Eccentricity of the Sun–Earth orbit.
pub const ECCENTRICITY: f64 = 0.016_713;
/// Lunar mean longitude at the epoch.
pub const L_ZERO: Degrees = Degrees::new(318.351_648);
/// Lunar mean longitude of perigee at the epoch.
pub const P_ZERO: Degrees = Degrees::new(36.340_410);
/// Lunar mean longitude of the ascending node at the epoch.
pub const N_ZERO: Degrees = Degrees::new(318.510_107);

// ── Rates ─────────────────────────────────────────────────────────────────

/// Length of the tropical year in days.
pub const TROPICAL_YEAR: Days = Days::new(365.242_191);
/// Moon's mean daily motion in longitude (°/day).
const MOON_MEAN_MOTION: f64 = 13.176_396_6;
/// Daily motion of the lunar perigee (°/day).
const PERIGEE_MOTION: f64 = 0.111_404_1;
/// Daily regression of the lunar node (°/day).
const NODE_MOTION: f64 = 0.052_953_9;

// ── Perturbation amplitudes (degrees) ─────────────────────────────────────

const EVECTION: f64 = 1.2739;
const ANNUAL_EQUATION: f64 = 0.1858;
const THIRD_CORRECTION: f64 = 0.37;
const EQUATION_OF_CENTRE: f64 = 6.2886;
const FOURTH_CORRECTION: f64 = 0.214;
const VARIATION: f64 = 0.6583;

// ═══════════════════════════════════════════════════════════════════════════
// LunarTerms
// ═══════════════════════════════════════════════════════════════════════════

/// Intermediate angles of one evaluation of the algorithm.
///
/// Produced by [`terms`]. Most callers only need [`LunarTerms::illumination`],
/// the other fields are kept for inspection and diagnostics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LunarTerms {
    /// Sun's mean anomaly, `[0°, 360°)`.
    pub sun_mean_anomaly: Degrees,
    /// Sun's true ecliptic longitude, `[0°, 360°)`.
    pub sun_longitude: Degrees,
    /// Moon's mean longitude, `[0°, 360°)`.
    pub moon_mean_longitude: Degrees,
    /// Moon's mean anomaly, `[0°, 360°)`.
    pub moon_mean_anomaly: Degrees,
    /// Longitude of the ascending node, `[0°, 360°)`.
    pub node_longitude: Degrees,
    /// Moon's true orbital longitude (not wrapped).
    pub moon_true_longitude: Degrees,
    /// Moon's age: true longitude minus the Sun's longitude (not wrapped).
    pub age: Degrees,
}

impl LunarTerms {
    /// Illuminated fraction of the disk as a percentage, `50 × (1 − cos D)`.
    #[inline]
    pub fn illumination(&self) -> f64 {
        50.0 * (1.0 - cos_deg(self.age))
    }

    /// Moon–Sun elongation wrapped into `[0°, 360°)`.
    ///
    /// Below 180° the Moon is waxing, above it is waning.
    #[inline]
    pub fn elongation(&self) -> Degrees {
        normalize_degrees(self.age)
    }
}

/// Evaluate every step of the approximation for `days` since the epoch.
pub fn terms(days: Days) -> LunarTerms {
    let d = days.value();

    // §46: the Sun
    let n = normalize_degrees(Degrees::new(360.0 * d / TROPICAL_YEAR.value()));
    let sun_mean_anomaly = normalize_degrees(n + EPSILON_G - RHO_G);
    let ec = Degrees::new(360.0 / PI * ECCENTRICITY * sin_deg(sun_mean_anomaly));
    let sun_longitude = normalize_degrees(n + ec + EPSILON_G);

    // §65: mean elements of the Moon
    let l = normalize_degrees(Degrees::new(MOON_MEAN_MOTION * d) + L_ZERO);
    let mm = normalize_degrees(l - Degrees::new(PERIGEE_MOTION * d) - P_ZERO);
    let node_longitude = normalize_degrees(N_ZERO - Degrees::new(NODE_MOTION * d));

    // §65: perturbations
    let ev = Degrees::new(EVECTION * sin_deg((l - sun_longitude) * 2.0 - mm));
    let ac = Degrees::new(ANNUAL_EQUATION * sin_deg(sun_mean_anomaly));
    let a3 = Degrees::new(THIRD_CORRECTION * sin_deg(sun_mean_anomaly));
    let mm_corrected = mm + ev - ac - a3;
    let ec = Degrees::new(EQUATION_OF_CENTRE * sin_deg(mm_corrected));
    let a4 = Degrees::new(FOURTH_CORRECTION * sin_deg(mm_corrected * 2.0));
    let l_corrected = l + ev + ec - ac + a4;
    let v = Degrees::new(VARIATION * sin_deg((l_corrected - sun_longitude) * 2.0));
    let moon_true_longitude = l_corrected + v;

    // §67: age
    let age = moon_true_longitude - sun_longitude;

    LunarTerms {
        sun_mean_anomaly,
        sun_longitude,
        moon_mean_longitude: l,
        moon_mean_anomaly: mm,
        node_longitude,
        moon_true_longitude,
        age,
    }
}

/// Illuminated percentage of the Moon `days` after the epoch.
///
/// Pure and total for every finite input; the result lies in `[0, 100]`.
#[inline]
pub fn illumination(days: Days) -> f64 {
    terms(days).illumination()
}
