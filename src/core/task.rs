use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::tasks;
use crate::errors::{AppError, AppResult};
use crate::models::task::{MAX_PROGRESS, Task};

pub struct TaskLogic;

impl TaskLogic {
    pub fn add(
        pool: &mut DbPool,
        issue_id: i64,
        cd: &str,
        name: &str,
        description: &str,
        estimate_hours: Option<f64>,
    ) -> AppResult<i64> {
        lookup::issue(&pool.conn, issue_id)?;
        check_estimate(estimate_hours)?;

        let id = tasks::insert_task(&pool.conn, issue_id, cd, name, description, estimate_hours)
            .map_err(|e| AppError::from_unique(e, &format!("Task '{cd}'")))?;
        audit_log_quiet(&pool.conn, "add", &format!("task #{id}"), name);
        Ok(id)
    }

    pub fn list(pool: &mut DbPool, issue_id: i64) -> AppResult<Vec<Task>> {
        lookup::issue(&pool.conn, issue_id)?;
        Ok(tasks::list_tasks(&pool.conn, issue_id)?)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        estimate_hours: Option<f64>,
    ) -> AppResult<Task> {
        let current = lookup::task(&pool.conn, id)?;
        check_estimate(estimate_hours)?;

        let name = name.unwrap_or(&current.name).to_string();
        let description = description.unwrap_or(&current.description).to_string();
        let estimate_hours = estimate_hours.or(current.estimate_hours);

        tasks::update_task(&pool.conn, id, &name, &description, estimate_hours)?;
        audit_log_quiet(&pool.conn, "edit", &format!("task #{id}"), &name);

        Ok(Task {
            name,
            description,
            estimate_hours,
            ..current
        })
    }

    /// Record progress, a percentage in `0..=100`.
    pub fn set_progress(pool: &mut DbPool, id: i64, progress_rate: i64) -> AppResult<Task> {
        if !(0..=MAX_PROGRESS).contains(&progress_rate) {
            return Err(AppError::Validation(format!(
                "Progress must be between 0 and {MAX_PROGRESS} (got {progress_rate})"
            )));
        }

        let task = lookup::task(&pool.conn, id)?;
        tasks::set_progress(&pool.conn, id, progress_rate)?;
        audit_log_quiet(
            &pool.conn,
            "edit",
            &format!("task #{id}"),
            &format!("progress {progress_rate}%"),
        );

        Ok(Task {
            progress_rate: Some(progress_rate),
            ..task
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Task> {
        let task = lookup::task(&pool.conn, id)?;
        tasks::delete_task(&pool.conn, id)?;
        audit_log_quiet(&pool.conn, "del", &format!("task #{id}"), &task.name);
        Ok(task)
    }
}

fn check_estimate(estimate_hours: Option<f64>) -> AppResult<()> {
    match estimate_hours {
        Some(h) if h < 0.0 => Err(AppError::InvalidHours(format!(
            "estimate must not be negative (got {h})"
        ))),
        _ => Ok(()),
    }
}
