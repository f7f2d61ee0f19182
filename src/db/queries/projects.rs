use crate::models::project::{DEFAULT_STATUSES, Project, ProjectSort, ProjectStatus};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_project(row: &Row) -> Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        cd: row.get("cd")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

fn map_status(row: &Row) -> Result<ProjectStatus> {
    Ok(ProjectStatus {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        code: row.get("code")?,
        name: row.get("name")?,
        sort_order: row.get("sort_order")?,
    })
}

/// Insert a project together with its default statuses, atomically.
pub fn insert_project(conn: &Connection, cd: &str, name: &str, description: &str) -> Result<i64> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO project (cd, name, description) VALUES (?1, ?2, ?3)",
        params![cd, name, description],
    )?;
    let id = tx.last_insert_rowid();

    for (code, label, order) in DEFAULT_STATUSES {
        tx.execute(
            "INSERT INTO project_status (project_id, code, name, sort_order)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, code, label, order],
        )?;
    }

    tx.commit()?;
    Ok(id)
}

/// Projects matching `q` (substring of cd, name or description).
pub fn list_projects(
    conn: &Connection,
    q: Option<&str>,
    sort: ProjectSort,
    desc: bool,
) -> Result<Vec<Project>> {
    let order = if desc { "DESC" } else { "ASC" };
    let sql = format!(
        "SELECT id, cd, name, description FROM project
         WHERE ?1 IS NULL
            OR cd LIKE '%' || ?1 || '%'
            OR name LIKE '%' || ?1 || '%'
            OR description LIKE '%' || ?1 || '%'
         ORDER BY {} {}",
        sort.column(),
        order
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([q], map_project)?;
    rows.collect()
}

pub fn find_project(conn: &Connection, id: i64) -> Result<Option<Project>> {
    conn.query_row(
        "SELECT id, cd, name, description FROM project WHERE id = ?1",
        [id],
        map_project,
    )
    .optional()
}

pub fn find_project_by_cd(conn: &Connection, cd: &str) -> Result<Option<Project>> {
    conn.query_row(
        "SELECT id, cd, name, description FROM project WHERE cd = ?1",
        [cd],
        map_project,
    )
    .optional()
}

pub fn update_project(conn: &Connection, id: i64, name: &str, description: &str) -> Result<usize> {
    conn.execute(
        "UPDATE project SET name = ?1, description = ?2 WHERE id = ?3",
        params![name, description, id],
    )
}

pub fn delete_project(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM project WHERE id = ?1", [id])
}

pub fn count_projects(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM project", [], |row| row.get(0))
}

/// (estimate, actual) hour totals over every issue of the project.
pub fn project_hour_totals(conn: &Connection, project_id: i64) -> Result<(f64, f64)> {
    conn.query_row(
        "SELECT
            COALESCE((SELECT SUM(e.hours)
                        FROM issue_estimate_item e
                        JOIN issue i ON e.issue_id = i.id
                       WHERE i.project_id = ?1), 0),
            COALESCE((SELECT SUM(w.hours)
                        FROM work_log w
                        JOIN task t ON w.task_id = t.id
                        JOIN issue i ON t.issue_id = i.id
                       WHERE i.project_id = ?1), 0)",
        [project_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}

// ---------------------------
// Statuses
// ---------------------------

pub fn list_statuses(conn: &Connection, project_id: i64) -> Result<Vec<ProjectStatus>> {
    let mut stmt = conn.prepare(
        "SELECT id, project_id, code, name, sort_order FROM project_status
         WHERE project_id = ?1
         ORDER BY sort_order ASC, id ASC",
    )?;
    let rows = stmt.query_map([project_id], map_status)?;
    rows.collect()
}

pub fn find_status(conn: &Connection, id: i64) -> Result<Option<ProjectStatus>> {
    conn.query_row(
        "SELECT id, project_id, code, name, sort_order FROM project_status WHERE id = ?1",
        [id],
        map_status,
    )
    .optional()
}

pub fn status_exists(conn: &Connection, project_id: i64, code: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM project_status WHERE project_id = ?1 AND code = ?2",
            params![project_id, code],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_status(
    conn: &Connection,
    project_id: i64,
    code: &str,
    name: &str,
    sort_order: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO project_status (project_id, code, name, sort_order)
         VALUES (?1, ?2, ?3, ?4)",
        params![project_id, code, name, sort_order],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_status(conn: &Connection, id: i64, name: &str, sort_order: i64) -> Result<usize> {
    conn.execute(
        "UPDATE project_status SET name = ?1, sort_order = ?2 WHERE id = ?3",
        params![name, sort_order, id],
    )
}

pub fn delete_status(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM project_status WHERE id = ?1", [id])
}

/// True when at least one issue of the status' project uses its code.
pub fn status_in_use(conn: &Connection, status_id: i64) -> Result<bool> {
    let usage: i64 = conn.query_row(
        "SELECT COUNT(*) FROM issue i
         JOIN project_status ps ON i.status = ps.code AND i.project_id = ps.project_id
         WHERE ps.id = ?1",
        [status_id],
        |row| row.get(0),
    )?;
    Ok(usage > 0)
}
