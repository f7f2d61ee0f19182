use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::assignees;
use crate::errors::{AppError, AppResult};
use crate::models::assignment_row::{AssignmentFilter, AssignmentRow};
use crate::models::task::Task;
use crate::models::user::User;
use rusqlite::Connection;

fn resolve(conn: &Connection, task_id: i64, user_key: &str) -> AppResult<(Task, User)> {
    Ok((lookup::task(conn, task_id)?, lookup::user(conn, user_key)?))
}

/// Only new assignments are refused for inactive users.
fn ensure_assignable(user: &User) -> AppResult<()> {
    if user.is_active {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "User '{}' is inactive and cannot be assigned",
        user.cd
    )))
}

pub struct AssigneeLogic;

impl AssigneeLogic {
    pub fn list(pool: &mut DbPool, project_cd: &str) -> AppResult<Vec<AssignmentRow>> {
        let project = lookup::project(&pool.conn, project_cd)?;
        let filter = AssignmentFilter {
            project_id: Some(project.id),
            ..Default::default()
        };
        Ok(assignees::load_assignment_rows(&pool.conn, &filter)?)
    }

    /// Assign a user to a task. An existing assignment is kept as is and
    /// its id returned.
    pub fn add(pool: &mut DbPool, task_id: i64, user_key: &str) -> AppResult<i64> {
        let (task, user) = resolve(&pool.conn, task_id, user_key)?;

        if let Some(id) = assignees::find_assignee(&pool.conn, task.id, user.id)? {
            return Ok(id);
        }
        ensure_assignable(&user)?;

        let id = assignees::insert_assignee(&pool.conn, task.id, user.id)?;
        audit_log_quiet(
            &pool.conn,
            "add",
            &format!("assignee task #{}", task.id),
            &user.cd,
        );
        Ok(id)
    }

    /// Assign when unassigned, unassign otherwise. Returns the new state.
    pub fn toggle(pool: &mut DbPool, task_id: i64, user_key: &str) -> AppResult<bool> {
        let (task, user) = resolve(&pool.conn, task_id, user_key)?;
        let target = format!("assignee task #{}", task.id);

        match assignees::find_assignee(&pool.conn, task.id, user.id)? {
            Some(id) => {
                assignees::delete_assignee(&pool.conn, id)?;
                audit_log_quiet(&pool.conn, "del", &target, &user.cd);
                Ok(false)
            }
            None => {
                ensure_assignable(&user)?;
                assignees::insert_assignee(&pool.conn, task.id, user.id)?;
                audit_log_quiet(&pool.conn, "add", &target, &user.cd);
                Ok(true)
            }
        }
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let rows = assignees::delete_assignee(&pool.conn, id)?;
        lookup::ensure_touched(rows, || format!("Assignment #{id}"))?;
        audit_log_quiet(&pool.conn, "del", &format!("assignee #{id}"), "");
        Ok(())
    }
}
