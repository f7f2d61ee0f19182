//! Per-project and per-issue subtotals of logged hours over a date range.
//!
//! Everything here is a pure function of its arguments: no I/O, no shared
//! state, inputs are never mutated.

use crate::models::assignment_row::AssignmentRow;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Lookup key of a logged-hours entry. `date` is the canonical
/// `YYYY-MM-DD` string, never a parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoursKey {
    pub task_id: i64,
    pub user_id: i64,
    pub date: String,
}

impl HoursKey {
    pub fn new(task_id: i64, user_id: i64, date: impl Into<String>) -> Self {
        Self {
            task_id,
            user_id,
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggedHours {
    pub id: i64,
    pub hours: f64,
}

/// Sparse map of logged hours; an absent key means zero.
pub type HoursByKey = HashMap<HoursKey, LoggedHours>;

/// Hours per date plus the row-wide total.
///
/// `total` is accumulated together with `per_date`, so it always equals the
/// sum of the per-date values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTotals {
    pub per_date: BTreeMap<String, f64>,
    pub total: f64,
}

impl DailyTotals {
    /// Zero-filled totals with one entry per date.
    pub fn zeroed(dates: &[NaiveDate]) -> Self {
        Self {
            per_date: dates.iter().map(|d| (date_key(d), 0.0)).collect(),
            total: 0.0,
        }
    }

    pub fn get(&self, date: &str) -> f64 {
        self.per_date.get(date).copied().unwrap_or(0.0)
    }

    fn add(&mut self, date: &str, hours: f64) {
        *self.per_date.entry(date.to_string()).or_insert(0.0) += hours;
        self.total += hours;
    }
}

pub type ProjectTotals = BTreeMap<i64, DailyTotals>;
pub type IssueTotals = BTreeMap<(i64, i64), DailyTotals>;

/// Canonical date key used by [`HoursKey`] and [`DailyTotals`].
pub fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn lookup(hours_by_key: &HoursByKey, row: &AssignmentRow, date: &str) -> f64 {
    hours_by_key
        .get(&HoursKey::new(row.task_id, row.user_id, date))
        .map(|l| l.hours)
        .unwrap_or(0.0)
}

/// Project and issue subtotals for `rows` across `dates`.
///
/// Every project id in `rows` gets an entry in the first map and every
/// `(project_id, issue_id)` pair in the second; every date is present in
/// every entry, zero when nothing was logged. Rows repeating a pair add to
/// the same accumulator.
pub fn aggregate(
    rows: &[AssignmentRow],
    dates: &[NaiveDate],
    hours_by_key: &HoursByKey,
) -> (ProjectTotals, IssueTotals) {
    let keys: Vec<String> = dates.iter().map(date_key).collect();

    let mut project_totals = ProjectTotals::new();
    let mut issue_totals = IssueTotals::new();

    for row in rows {
        let project = project_totals
            .entry(row.project_id)
            .or_insert_with(|| DailyTotals::zeroed(dates));
        let issue = issue_totals
            .entry((row.project_id, row.issue_id))
            .or_insert_with(|| DailyTotals::zeroed(dates));

        for key in &keys {
            let hours = lookup(hours_by_key, row, key);
            project.add(key, hours);
            issue.add(key, hours);
        }
    }

    (project_totals, issue_totals)
}

/// Hours of a single assignment row across `dates`.
pub fn row_hours(
    row: &AssignmentRow,
    dates: &[NaiveDate],
    hours_by_key: &HoursByKey,
) -> DailyTotals {
    let mut totals = DailyTotals::zeroed(dates);
    for d in dates {
        let key = date_key(d);
        let hours = lookup(hours_by_key, row, &key);
        totals.add(&key, hours);
    }
    totals
}

/// Column sums over all rows, with the grand total in `total`.
pub fn column_totals(
    rows: &[AssignmentRow],
    dates: &[NaiveDate],
    hours_by_key: &HoursByKey,
) -> DailyTotals {
    let mut totals = DailyTotals::zeroed(dates);
    for row in rows {
        for d in dates {
            let key = date_key(d);
            let hours = lookup(hours_by_key, row, &key);
            totals.add(&key, hours);
        }
    }
    totals
}
