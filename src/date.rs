// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parsing of user-supplied dates.
//!
//! Three shapes are accepted, all read as UTC:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `YYYY-MM` | first day of the month, 00:00 |
//! | `YYYY-MM-DD` | that day, 00:00 |
//! | `YYYY-MM-DD:HH` | that day, at the given hour |

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{PomError, Result};

/// Parse `YYYY-MM`, `YYYY-MM-DD` or `YYYY-MM-DD:HH` into a UTC instant.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let invalid = |reason: &str| PomError::InvalidDate {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (day, hour) = match input.len() {
        7 => (format!("{input}-01"), 0),
        10 => (input.to_string(), 0),
        13 => {
            let (day, hour) = input
                .split_once(':')
                .filter(|(day, _)| day.len() == 10)
                .ok_or_else(|| invalid("expected `:` between date and hour"))?;
            if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("hour must be two digits"));
            }
            let hour: u32 = hour.parse().map_err(|_| invalid("hour is not a number"))?;
            (day.to_string(), hour)
        }
        _ => return Err(invalid("format should be YYYY-MM[-DD[:HH]]")),
    };

    let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map_err(|e| invalid(&e.to_string()))?;
    date.and_hms_opt(hour, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| invalid("hour out of range"))
}
