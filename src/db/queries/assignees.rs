use crate::models::assignment_row::{AssignmentFilter, AssignmentRow};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_row(row: &Row) -> Result<AssignmentRow> {
    Ok(AssignmentRow {
        assignee_id: row.get("assignee_id")?,
        project_id: row.get("project_id")?,
        project_cd: row.get("project_cd")?,
        project_name: row.get("project_name")?,
        issue_id: row.get("issue_id")?,
        issue_cd: row.get("issue_cd")?,
        issue_name: row.get("issue_name")?,
        task_id: row.get("task_id")?,
        task_cd: row.get("task_cd")?,
        task_name: row.get("task_name")?,
        progress_rate: row.get("progress_rate")?,
        user_id: row.get("user_id")?,
        user_cd: row.get("user_cd")?,
        user_name: row.get("user_name")?,
    })
}

/// Assignment rows of active users, ordered by project, issue, task and
/// user code (the order the grid renders them in).
pub fn load_assignment_rows(
    conn: &Connection,
    filter: &AssignmentFilter,
) -> Result<Vec<AssignmentRow>> {
    let mut stmt = conn.prepare(
        "SELECT ta.id AS assignee_id,
                p.id AS project_id, p.cd AS project_cd, p.name AS project_name,
                i.id AS issue_id, i.cd AS issue_cd, i.name AS issue_name,
                t.id AS task_id, t.cd AS task_cd, t.name AS task_name,
                t.progress_rate,
                u.id AS user_id, u.cd AS user_cd, u.name AS user_name
         FROM task_assignee ta
         JOIN task t ON ta.task_id = t.id
         JOIN issue i ON t.issue_id = i.id
         JOIN project p ON i.project_id = p.id
         JOIN user u ON ta.user_id = u.id
         WHERE u.is_active = 1
           AND (?1 IS NULL OR u.id = ?1)
           AND (?2 IS NULL OR p.id = ?2)
           AND (?3 IS NULL OR i.id = ?3)
         ORDER BY p.cd, i.cd, t.cd, u.cd",
    )?;
    let rows = stmt.query_map(
        params![filter.user_id, filter.project_id, filter.issue_id],
        map_row,
    )?;
    rows.collect()
}

pub fn find_assignee(conn: &Connection, task_id: i64, user_id: i64) -> Result<Option<i64>> {
    conn.query_row(
        "SELECT id FROM task_assignee WHERE task_id = ?1 AND user_id = ?2",
        params![task_id, user_id],
        |row| row.get(0),
    )
    .optional()
}

pub fn insert_assignee(conn: &Connection, task_id: i64, user_id: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO task_assignee (task_id, user_id) VALUES (?1, ?2)",
        params![task_id, user_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_assignee(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM task_assignee WHERE id = ?1", [id])
}
