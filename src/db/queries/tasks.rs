use crate::models::task::Task;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_task(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        cd: row.get("cd")?,
        issue_id: row.get("issue_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        sort_order: row.get("sort_order")?,
        estimate_hours: row.get("estimate_hours")?,
        progress_rate: row.get("progress_rate")?,
    })
}

const TASK_COLUMNS: &str =
    "id, cd, issue_id, name, description, sort_order, estimate_hours, progress_rate";

/// Insert a task at the end of its issue's ordering.
pub fn insert_task(
    conn: &Connection,
    issue_id: i64,
    cd: &str,
    name: &str,
    description: &str,
    estimate_hours: Option<f64>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO task (issue_id, cd, name, description, estimate_hours, sort_order)
         VALUES (?1, ?2, ?3, ?4, ?5,
                 (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM task WHERE issue_id = ?1))",
        params![issue_id, cd, name, description, estimate_hours],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_tasks(conn: &Connection, issue_id: i64) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM task WHERE issue_id = ?1 ORDER BY sort_order ASC, cd ASC"
    ))?;
    let rows = stmt.query_map([issue_id], map_task)?;
    rows.collect()
}

pub fn find_task(conn: &Connection, id: i64) -> Result<Option<Task>> {
    conn.query_row(
        &format!("SELECT {TASK_COLUMNS} FROM task WHERE id = ?1"),
        [id],
        map_task,
    )
    .optional()
}

pub fn update_task(
    conn: &Connection,
    id: i64,
    name: &str,
    description: &str,
    estimate_hours: Option<f64>,
) -> Result<usize> {
    conn.execute(
        "UPDATE task SET name = ?1, description = ?2, estimate_hours = ?3 WHERE id = ?4",
        params![name, description, estimate_hours, id],
    )
}

pub fn set_progress(conn: &Connection, id: i64, progress_rate: i64) -> Result<usize> {
    conn.execute(
        "UPDATE task SET progress_rate = ?1 WHERE id = ?2",
        params![progress_rate, id],
    )
}

pub fn delete_task(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM task WHERE id = ?1", [id])
}
