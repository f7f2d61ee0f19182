use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.into()))
}

/// Parse an optional date argument, defaulting to today.
pub fn parse_date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    s.map(parse_date).unwrap_or_else(|| Ok(today()))
}

/// Parse a `YYYY-MM` month into its first day.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    let t = s.trim();
    if t.len() != 7 {
        return Err(AppError::InvalidMonth(s.into()));
    }
    NaiveDate::parse_from_str(&format!("{t}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.into()))
}

/// Canonical `YYYY-MM` key of the month containing `d`.
pub fn month_key(d: &NaiveDate) -> String {
    d.format("%Y-%m").to_string()
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: &NaiveDate) -> (NaiveDate, NaiveDate) {
    let days = all_days_of_month(d.year(), d.month());
    let first = days.first().copied().unwrap_or(*d);
    let last = days.last().copied().unwrap_or(*d);
    (first, last)
}

/// Monday to Sunday of the week containing `d`.
pub fn week_days(d: &NaiveDate) -> Vec<NaiveDate> {
    let offset = d.weekday().num_days_from_monday() as u64;
    let monday = d.checked_sub_days(Days::new(offset)).unwrap_or(*d);
    monday.iter_days().take(7).collect()
}
