//! Resolve user-facing identifiers to stored entities, or fail with
//! `NotFound`.

use crate::db::queries::{issues, projects, tasks, users};
use crate::errors::{AppError, AppResult};
use crate::models::issue::Issue;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::models::user::User;
use rusqlite::Connection;

/// Users are addressed by code; a numeric key that matches no code is
/// tried as an id.
pub fn user(conn: &Connection, key: &str) -> AppResult<User> {
    if let Some(u) = users::find_user_by_cd(conn, key)? {
        return Ok(u);
    }
    if let Ok(id) = key.parse::<i64>()
        && let Some(u) = users::find_user(conn, id)?
    {
        return Ok(u);
    }
    Err(AppError::NotFound(format!("User '{key}'")))
}

pub fn project(conn: &Connection, cd: &str) -> AppResult<Project> {
    projects::find_project_by_cd(conn, cd)?
        .ok_or_else(|| AppError::NotFound(format!("Project '{cd}'")))
}

pub fn issue(conn: &Connection, id: i64) -> AppResult<Issue> {
    issues::find_issue(conn, id)?.ok_or_else(|| AppError::NotFound(format!("Issue #{id}")))
}

pub fn task(conn: &Connection, id: i64) -> AppResult<Task> {
    tasks::find_task(conn, id)?.ok_or_else(|| AppError::NotFound(format!("Task #{id}")))
}

/// Map "no row touched" to `NotFound`.
pub fn ensure_touched(rows: usize, what: impl FnOnce() -> String) -> AppResult<()> {
    if rows == 0 {
        Err(AppError::NotFound(what()))
    } else {
        Ok(())
    }
}
