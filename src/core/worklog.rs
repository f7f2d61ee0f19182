use crate::config::Config;
use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{assignees, work_logs};
use crate::errors::{AppError, AppResult};
use crate::models::UpsertOutcome;
use crate::models::work_log::{WorkLogEntry, WorkLogFilter};
use crate::utils::date;
use chrono::NaiveDate;

/// True when `hours` is a whole number of `step`s.
pub fn is_multiple_of_step(hours: f64, step: f64) -> bool {
    let q = hours / step;
    (q - q.round()).abs() < 1e-9
}

/// Reject negative hours and positive hours off the configured grid.
pub fn validate_hours(hours: f64, step: f64) -> AppResult<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::InvalidHours(format!(
            "{hours} (hours must not be negative)"
        )));
    }
    if hours > 0.0 && !is_multiple_of_step(hours, step) {
        return Err(AppError::InvalidHours(format!(
            "{hours} (must be a multiple of {step})"
        )));
    }
    Ok(())
}

pub struct WorklogLogic;

impl WorklogLogic {
    /// Set the hours a user logged on a task for a day.
    ///
    /// Zero removes the entry; the user must be assigned to the task.
    pub fn set_hours(
        pool: &mut DbPool,
        cfg: &Config,
        task_id: i64,
        user_key: &str,
        work_date: NaiveDate,
        hours: f64,
    ) -> AppResult<UpsertOutcome> {
        validate_hours(hours, cfg.hours_step)?;

        let task = lookup::task(&pool.conn, task_id)?;
        let user = lookup::user(&pool.conn, user_key)?;

        if assignees::find_assignee(&pool.conn, task.id, user.id)?.is_none() {
            return Err(AppError::Validation(format!(
                "User '{}' is not assigned to task #{}",
                user.cd, task.id
            )));
        }

        let day = work_date.format("%Y-%m-%d").to_string();
        let existing = work_logs::find_work_log(&pool.conn, task.id, user.id, &day)?;

        let outcome = match (existing, hours == 0.0) {
            (Some(log), true) => {
                work_logs::delete_work_log(&pool.conn, log.id)?;
                UpsertOutcome::Deleted
            }
            (None, true) => UpsertOutcome::Unchanged,
            (Some(log), false) => {
                work_logs::update_work_log(&pool.conn, log.id, hours)?;
                UpsertOutcome::Updated(log.id)
            }
            (None, false) => {
                let id = work_logs::insert_work_log(&pool.conn, task.id, user.id, &day, hours)?;
                UpsertOutcome::Inserted(id)
            }
        };

        if outcome != UpsertOutcome::Unchanged {
            audit_log_quiet(
                &pool.conn,
                "hours",
                &format!("task #{} {} {}", task.id, user.cd, day),
                &format!("{hours:.2}h"),
            );
        }

        Ok(outcome)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let log = work_logs::find_work_log_by_id(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("Work log #{id}")))?;
        work_logs::delete_work_log(&pool.conn, id)?;
        audit_log_quiet(
            &pool.conn,
            "del",
            &format!("work log #{id}"),
            &format!("{} {:.2}h", log.work_date, log.hours),
        );
        Ok(())
    }

    pub fn list(
        pool: &mut DbPool,
        user_key: Option<&str>,
        project_cd: Option<&str>,
        issue_id: Option<i64>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<Vec<WorkLogEntry>> {
        let conn = &pool.conn;
        let filter = WorkLogFilter {
            user_id: user_key.map(|k| lookup::user(conn, k)).transpose()?.map(|u| u.id),
            project_id: project_cd
                .map(|cd| lookup::project(conn, cd))
                .transpose()?
                .map(|p| p.id),
            issue_id,
            from: from.map(date::parse_date).transpose()?.map(|d| d.to_string()),
            to: to.map(date::parse_date).transpose()?.map(|d| d.to_string()),
        };
        Ok(work_logs::list_entries(conn, &filter)?)
    }

    /// Hours a user logged between `from` and `to`, both inclusive.
    pub fn total(
        pool: &mut DbPool,
        user_key: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<f64> {
        let user = lookup::user(&pool.conn, user_key)?;
        Ok(work_logs::sum_hours(
            &pool.conn,
            Some(user.id),
            &from.to_string(),
            &to.to_string(),
        )?)
    }
}
