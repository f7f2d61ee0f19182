use crate::models::issue::{Issue, IssueSummary};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_issue(row: &Row) -> Result<Issue> {
    Ok(Issue {
        id: row.get("id")?,
        cd: row.get("cd")?,
        project_id: row.get("project_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status: row.get("status")?,
    })
}

fn map_summary(row: &Row) -> Result<IssueSummary> {
    Ok(IssueSummary {
        issue: map_issue(row)?,
        project_cd: row.get("project_cd")?,
        status_name: row.get("status_name")?,
        estimate_hours: row.get("estimate_hours")?,
        actual_hours: row.get("actual_hours")?,
    })
}

pub fn insert_issue(
    conn: &Connection,
    project_id: i64,
    cd: &str,
    name: &str,
    description: &str,
    status: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO issue (project_id, cd, name, description, status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![project_id, cd, name, description, status],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_issue(conn: &Connection, id: i64) -> Result<Option<Issue>> {
    conn.query_row(
        "SELECT id, cd, project_id, name, description, status FROM issue WHERE id = ?1",
        [id],
        map_issue,
    )
    .optional()
}

/// Issues (of one project, or all) with estimate and actual hour totals.
pub fn list_issue_summaries(
    conn: &Connection,
    project_id: Option<i64>,
) -> Result<Vec<IssueSummary>> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.cd, i.project_id, i.name, i.description, i.status,
                p.cd AS project_cd,
                ps.name AS status_name,
                COALESCE((SELECT SUM(e.hours) FROM issue_estimate_item e
                           WHERE e.issue_id = i.id), 0) AS estimate_hours,
                COALESCE((SELECT SUM(w.hours) FROM work_log w
                            JOIN task t ON w.task_id = t.id
                           WHERE t.issue_id = i.id), 0) AS actual_hours
         FROM issue i
         JOIN project p ON i.project_id = p.id
         LEFT JOIN project_status ps ON ps.project_id = i.project_id AND ps.code = i.status
         WHERE ?1 IS NULL OR i.project_id = ?1
         ORDER BY p.cd ASC, i.cd ASC",
    )?;
    let rows = stmt.query_map([project_id], map_summary)?;
    rows.collect()
}

pub fn update_issue(
    conn: &Connection,
    id: i64,
    name: &str,
    description: &str,
    status: &str,
) -> Result<usize> {
    conn.execute(
        "UPDATE issue SET name = ?1, description = ?2, status = ?3 WHERE id = ?4",
        params![name, description, status, id],
    )
}

pub fn delete_issue(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM issue WHERE id = ?1", [id])
}
