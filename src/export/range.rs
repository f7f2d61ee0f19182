// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{all_days_of_month, parse_date, parse_month};
use chrono::{Datelike, NaiveDate};

fn range_error(r: &str, why: &str) -> AppError {
    AppError::Validation(format!("Invalid --range '{r}': {why}"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD` period.
fn period_bounds(p: &str, r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| range_error(r, "invalid year"))?;
            match (
                NaiveDate::from_ymd_opt(y, 1, 1),
                NaiveDate::from_ymd_opt(y, 12, 31),
            ) {
                (Some(first), Some(last)) => Ok((first, last)),
                _ => Err(range_error(r, "invalid year")),
            }
        }
        7 => {
            let m = parse_month(p)?;
            let days = all_days_of_month(m.year(), m.month());
            match (days.first(), days.last()) {
                (Some(f), Some(l)) => Ok((*f, *l)),
                _ => Err(range_error(r, "invalid month")),
            }
        }
        10 => {
            let d = parse_date(p)?;
            Ok((d, d))
        }
        _ => Err(range_error(r, "unsupported format")),
    }
}

/// Parse --range (year / month / day / intervallo).
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return period_bounds(r.trim(), r);
    };

    let start = start_raw.trim();
    let end = end_raw.trim();

    if start.len() != end.len() {
        return Err(range_error(r, "start and end must have the same format"));
    }

    let (from, _) = period_bounds(start, r)?;
    let (_, to) = period_bounds(end, r)?;

    if from > to {
        return Err(range_error(r, "start is after end"));
    }
    Ok((from, to))
}
