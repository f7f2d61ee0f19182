use crate::core::calculator::grid::{HoursByKey, HoursKey, LoggedHours};
use crate::models::report_log::ReportLog;
use crate::models::work_log::{WorkLog, WorkLogEntry, WorkLogFilter};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashMap;

fn map_work_log(row: &Row) -> Result<WorkLog> {
    Ok(WorkLog {
        id: row.get("id")?,
        task_id: row.get("task_id")?,
        user_id: row.get("user_id")?,
        work_date: row.get("work_date")?,
        hours: row.get("hours")?,
    })
}

fn map_entry(row: &Row) -> Result<WorkLogEntry> {
    Ok(WorkLogEntry {
        id: row.get("id")?,
        work_date: row.get("work_date")?,
        user_cd: row.get("user_cd")?,
        user_name: row.get("user_name")?,
        project_cd: row.get("project_cd")?,
        issue_cd: row.get("issue_cd")?,
        task_id: row.get("task_id")?,
        task_name: row.get("task_name")?,
        hours: row.get("hours")?,
    })
}

pub fn find_work_log(
    conn: &Connection,
    task_id: i64,
    user_id: i64,
    work_date: &str,
) -> Result<Option<WorkLog>> {
    conn.query_row(
        "SELECT id, task_id, user_id, work_date, hours FROM work_log
         WHERE task_id = ?1 AND user_id = ?2 AND work_date = ?3",
        params![task_id, user_id, work_date],
        map_work_log,
    )
    .optional()
}

pub fn find_work_log_by_id(conn: &Connection, id: i64) -> Result<Option<WorkLog>> {
    conn.query_row(
        "SELECT id, task_id, user_id, work_date, hours FROM work_log WHERE id = ?1",
        [id],
        map_work_log,
    )
    .optional()
}

pub fn insert_work_log(
    conn: &Connection,
    task_id: i64,
    user_id: i64,
    work_date: &str,
    hours: f64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO work_log (task_id, user_id, work_date, hours) VALUES (?1, ?2, ?3, ?4)",
        params![task_id, user_id, work_date, hours],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_work_log(conn: &Connection, id: i64, hours: f64) -> Result<usize> {
    conn.execute(
        "UPDATE work_log SET hours = ?1 WHERE id = ?2",
        params![hours, id],
    )
}

pub fn delete_work_log(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM work_log WHERE id = ?1", [id])
}

/// Logged hours between `from` and `to` (inclusive), keyed for the grid.
pub fn hours_by_key(conn: &Connection, from: &str, to: &str) -> Result<HoursByKey> {
    let mut stmt = conn.prepare(
        "SELECT id, task_id, user_id, work_date, hours FROM work_log
         WHERE work_date BETWEEN ?1 AND ?2",
    )?;
    let rows = stmt.query_map(params![from, to], map_work_log)?;

    let mut out = HoursByKey::new();
    for r in rows {
        let log = r?;
        out.insert(
            HoursKey::new(log.task_id, log.user_id, log.work_date),
            LoggedHours {
                id: log.id,
                hours: log.hours,
            },
        );
    }
    Ok(out)
}

/// One user's logs for a day, ordered by project cd, issue cd, task name.
pub fn daily_report_logs(conn: &Connection, user_id: i64, date: &str) -> Result<Vec<ReportLog>> {
    let mut stmt = conn.prepare(
        "SELECT p.cd AS project_cd, p.name AS project_name,
                i.cd AS issue_cd, i.name AS issue_name,
                t.name AS task_name, t.progress_rate, w.hours
         FROM work_log w
         JOIN task t ON w.task_id = t.id
         JOIN issue i ON t.issue_id = i.id
         JOIN project p ON i.project_id = p.id
         WHERE w.user_id = ?1 AND w.work_date = ?2
         ORDER BY p.cd, i.cd, t.name",
    )?;
    let rows = stmt.query_map(params![user_id, date], |row| {
        Ok(ReportLog {
            project_cd: row.get("project_cd")?,
            project_name: row.get("project_name")?,
            issue_cd: row.get("issue_cd")?,
            issue_name: row.get("issue_name")?,
            task_name: row.get("task_name")?,
            progress_rate: row.get("progress_rate")?,
            hours: row.get("hours")?,
        })
    })?;
    rows.collect()
}

/// Joined work-log listing, oldest first.
pub fn list_entries(conn: &Connection, filter: &WorkLogFilter) -> Result<Vec<WorkLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT w.id, w.work_date, w.hours, w.task_id,
                u.cd AS user_cd, u.name AS user_name,
                p.cd AS project_cd, i.cd AS issue_cd, t.name AS task_name
         FROM work_log w
         JOIN task t ON w.task_id = t.id
         JOIN issue i ON t.issue_id = i.id
         JOIN project p ON i.project_id = p.id
         JOIN user u ON w.user_id = u.id
         WHERE (?1 IS NULL OR u.id = ?1)
           AND (?2 IS NULL OR p.id = ?2)
           AND (?3 IS NULL OR i.id = ?3)
           AND (?4 IS NULL OR w.work_date >= ?4)
           AND (?5 IS NULL OR w.work_date <= ?5)
         ORDER BY w.work_date, u.cd, p.cd, i.cd, t.cd",
    )?;
    let rows = stmt.query_map(
        params![
            filter.user_id,
            filter.project_id,
            filter.issue_id,
            filter.from,
            filter.to
        ],
        map_entry,
    )?;
    rows.collect()
}

/// Sum of logged hours between `from` and `to`, for one user or everyone.
pub fn sum_hours(conn: &Connection, user_id: Option<i64>, from: &str, to: &str) -> Result<f64> {
    conn.query_row(
        "SELECT COALESCE(SUM(hours), 0) FROM work_log
         WHERE (?1 IS NULL OR user_id = ?1) AND work_date BETWEEN ?2 AND ?3",
        params![user_id, from, to],
        |row| row.get(0),
    )
}

/// Logged hours per (user, project) between `from` and `to`.
pub fn actuals_by_user_project(
    conn: &Connection,
    from: &str,
    to: &str,
) -> Result<HashMap<(i64, i64), f64>> {
    let mut stmt = conn.prepare(
        "SELECT w.user_id, i.project_id, SUM(w.hours)
         FROM work_log w
         JOIN task t ON w.task_id = t.id
         JOIN issue i ON t.issue_id = i.id
         WHERE w.work_date BETWEEN ?1 AND ?2
         GROUP BY w.user_id, i.project_id",
    )?;
    let rows = stmt.query_map(params![from, to], |row| {
        Ok((
            (row.get::<_, i64>(0)?, row.get::<_, i64>(1)?),
            row.get::<_, f64>(2)?,
        ))
    })?;
    rows.collect()
}
