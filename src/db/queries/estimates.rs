use crate::models::issue::EstimateItem;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_item(row: &Row) -> Result<EstimateItem> {
    Ok(EstimateItem {
        id: row.get("id")?,
        issue_id: row.get("issue_id")?,
        name: row.get("name")?,
        hours: row.get("hours")?,
        sort_order: row.get("sort_order")?,
    })
}

pub fn list_items(conn: &Connection, issue_id: i64) -> Result<Vec<EstimateItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, issue_id, name, hours, sort_order FROM issue_estimate_item
         WHERE issue_id = ?1
         ORDER BY sort_order ASC, id ASC",
    )?;
    let rows = stmt.query_map([issue_id], map_item)?;
    rows.collect()
}

pub fn find_item(conn: &Connection, id: i64) -> Result<Option<EstimateItem>> {
    conn.query_row(
        "SELECT id, issue_id, name, hours, sort_order FROM issue_estimate_item WHERE id = ?1",
        [id],
        map_item,
    )
    .optional()
}

pub fn insert_item(conn: &Connection, issue_id: i64, name: &str, hours: f64) -> Result<i64> {
    conn.execute(
        "INSERT INTO issue_estimate_item (issue_id, name, hours, sort_order)
         VALUES (?1, ?2, ?3,
                 (SELECT COALESCE(MAX(sort_order), -1) + 1
                    FROM issue_estimate_item WHERE issue_id = ?1))",
        params![issue_id, name, hours],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_item(conn: &Connection, id: i64, name: &str, hours: f64) -> Result<usize> {
    conn.execute(
        "UPDATE issue_estimate_item SET name = ?1, hours = ?2 WHERE id = ?3",
        params![name, hours, id],
    )
}

pub fn delete_item(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM issue_estimate_item WHERE id = ?1", [id])
}
