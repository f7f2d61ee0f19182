use crate::models::plan::{MonthlyAssignment, PlanRow};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_assignment(row: &Row) -> Result<MonthlyAssignment> {
    Ok(MonthlyAssignment {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        project_id: row.get("project_id")?,
        year_month: row.get("year_month")?,
        planned_hours: row.get("planned_hours")?,
    })
}

pub fn find_assignment(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
    year_month: &str,
) -> Result<Option<MonthlyAssignment>> {
    conn.query_row(
        "SELECT id, user_id, project_id, year_month, planned_hours FROM monthly_assignment
         WHERE user_id = ?1 AND project_id = ?2 AND year_month = ?3",
        params![user_id, project_id, year_month],
        map_assignment,
    )
    .optional()
}

pub fn insert_assignment(
    conn: &Connection,
    user_id: i64,
    project_id: i64,
    year_month: &str,
    planned_hours: f64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO monthly_assignment (user_id, project_id, year_month, planned_hours)
         VALUES (?1, ?2, ?3, ?4)",
        params![user_id, project_id, year_month, planned_hours],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_assignment(conn: &Connection, id: i64, planned_hours: f64) -> Result<usize> {
    conn.execute(
        "UPDATE monthly_assignment SET planned_hours = ?1 WHERE id = ?2",
        params![planned_hours, id],
    )
}

pub fn delete_assignment(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM monthly_assignment WHERE id = ?1", [id])
}

/// Assignments of a month, ordered by project cd then user cd.
pub fn list_for_month(conn: &Connection, year_month: &str) -> Result<Vec<PlanRow>> {
    let mut stmt = conn.prepare(
        "SELECT ma.id, ma.planned_hours,
                u.id AS user_id, u.cd AS user_cd, u.name AS user_name,
                p.id AS project_id, p.cd AS project_cd, p.name AS project_name
         FROM monthly_assignment ma
         JOIN user u ON ma.user_id = u.id
         JOIN project p ON ma.project_id = p.id
         WHERE ma.year_month = ?1
         ORDER BY p.cd, u.cd",
    )?;
    let rows = stmt.query_map([year_month], |row| {
        Ok(PlanRow {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            user_cd: row.get("user_cd")?,
            user_name: row.get("user_name")?,
            project_id: row.get("project_id")?,
            project_cd: row.get("project_cd")?,
            project_name: row.get("project_name")?,
            planned_hours: row.get("planned_hours")?,
        })
    })?;
    rows.collect()
}

pub fn sum_planned(conn: &Connection, year_month: &str) -> Result<f64> {
    conn.query_row(
        "SELECT COALESCE(SUM(planned_hours), 0) FROM monthly_assignment WHERE year_month = ?1",
        [year_month],
        |row| row.get(0),
    )
}
