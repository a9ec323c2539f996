// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle helpers used by the ephemeris.

use qtty::{Degrees, Radians};
use std::f64::consts::PI;

/// One full turn, in degrees.
const FULL_TURN: f64 = 360.0;

/// Wrap an angle into `[0, 360)`.
///
/// Uses the truncating `%` remainder and shifts negative results up by one
/// turn, so `-30°` becomes `330°` and `725°` becomes `5°`.
#[inline]
pub fn normalize_degrees(deg: Degrees) -> Degrees {
    let wrapped = deg.value() % FULL_TURN;
    if wrapped < 0.0 {
        Degrees::new(wrapped + FULL_TURN)
    } else {
        Degrees::new(wrapped)
    }
}

/// Degrees to radians: `deg × π / 180`.
#[inline]
pub fn to_radians(deg: Degrees) -> Radians {
    Radians::new(deg.value() * PI / 180.0)
}

/// Sine of an angle given in degrees.
///
/// Goes through [`to_radians`] rather than the quantity's own `sin`, so the
/// ephemeris converts with exactly `deg × π / 180` everywhere.
#[inline]
pub(crate) fn sin_deg(deg: Degrees) -> f64 {
    to_radians(deg).value().sin()
}

/// Cosine of an angle given in degrees, converted like [`sin_deg`].
#[inline]
pub(crate) fn cos_deg(deg: Degrees) -> f64 {
    to_radians(deg).value().cos()
}
