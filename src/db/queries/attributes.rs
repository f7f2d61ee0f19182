use crate::models::user_attribute::{AttributeOption, AttributeType, UserAttribute};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TYPE_COLUMNS: &str = "t.id, t.code, t.name, t.sort_order,
    (SELECT COUNT(*) FROM user_attribute_option o WHERE o.type_id = t.id) AS option_count";

fn map_type(row: &Row) -> Result<AttributeType> {
    Ok(AttributeType {
        id: row.get("id")?,
        code: row.get("code")?,
        name: row.get("name")?,
        sort_order: row.get("sort_order")?,
        option_count: row.get("option_count")?,
    })
}

fn map_option(row: &Row) -> Result<AttributeOption> {
    Ok(AttributeOption {
        id: row.get("id")?,
        type_id: row.get("type_id")?,
        code: row.get("code")?,
        name: row.get("name")?,
        sort_order: row.get("sort_order")?,
    })
}

// ---------------------------
// Types
// ---------------------------

pub fn list_types(conn: &Connection) -> Result<Vec<AttributeType>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TYPE_COLUMNS} FROM user_attribute_type t ORDER BY t.sort_order ASC, t.id ASC"
    ))?;
    let rows = stmt.query_map([], map_type)?;
    rows.collect()
}

pub fn find_type_by_code(conn: &Connection, code: &str) -> Result<Option<AttributeType>> {
    conn.query_row(
        &format!("SELECT {TYPE_COLUMNS} FROM user_attribute_type t WHERE t.code = ?1"),
        [code],
        map_type,
    )
    .optional()
}

pub fn insert_type(conn: &Connection, code: &str, name: &str, sort_order: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO user_attribute_type (code, name, sort_order) VALUES (?1, ?2, ?3)",
        params![code, name, sort_order],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_type(
    conn: &Connection,
    id: i64,
    code: &str,
    name: &str,
    sort_order: i64,
) -> Result<usize> {
    conn.execute(
        "UPDATE user_attribute_type SET code = ?1, name = ?2, sort_order = ?3 WHERE id = ?4",
        params![code, name, sort_order, id],
    )
}

/// Options of the type go with it.
pub fn delete_type(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM user_attribute_type WHERE id = ?1", [id])
}

/// True when at least one user holds a value of the type.
pub fn type_in_use(conn: &Connection, type_id: i64) -> Result<bool> {
    let usage: i64 = conn.query_row(
        "SELECT COUNT(*) FROM user_attribute WHERE type_id = ?1",
        [type_id],
        |row| row.get(0),
    )?;
    Ok(usage > 0)
}

// ---------------------------
// Options
// ---------------------------

pub fn list_options(conn: &Connection, type_id: i64) -> Result<Vec<AttributeOption>> {
    let mut stmt = conn.prepare(
        "SELECT id, type_id, code, name, sort_order FROM user_attribute_option
         WHERE type_id = ?1
         ORDER BY sort_order ASC, id ASC",
    )?;
    let rows = stmt.query_map([type_id], map_option)?;
    rows.collect()
}

pub fn find_option(conn: &Connection, type_id: i64, code: &str) -> Result<Option<AttributeOption>> {
    conn.query_row(
        "SELECT id, type_id, code, name, sort_order FROM user_attribute_option
         WHERE type_id = ?1 AND code = ?2",
        params![type_id, code],
        map_option,
    )
    .optional()
}

pub fn insert_option(
    conn: &Connection,
    type_id: i64,
    code: &str,
    name: &str,
    sort_order: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO user_attribute_option (type_id, code, name, sort_order)
         VALUES (?1, ?2, ?3, ?4)",
        params![type_id, code, name, sort_order],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_option(
    conn: &Connection,
    id: i64,
    code: &str,
    name: &str,
    sort_order: i64,
) -> Result<usize> {
    conn.execute(
        "UPDATE user_attribute_option SET code = ?1, name = ?2, sort_order = ?3 WHERE id = ?4",
        params![code, name, sort_order, id],
    )
}

pub fn delete_option(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM user_attribute_option WHERE id = ?1", [id])
}

pub fn option_in_use(conn: &Connection, option_id: i64) -> Result<bool> {
    let usage: i64 = conn.query_row(
        "SELECT COUNT(*) FROM user_attribute WHERE option_id = ?1",
        [option_id],
        |row| row.get(0),
    )?;
    Ok(usage > 0)
}

// ---------------------------
// Values held by users
// ---------------------------

/// One value per (user, type): setting it again replaces the option.
pub fn set_user_attribute(
    conn: &Connection,
    user_id: i64,
    type_id: i64,
    option_id: i64,
) -> Result<usize> {
    conn.execute(
        "INSERT INTO user_attribute (user_id, type_id, option_id)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id, type_id) DO UPDATE SET option_id = excluded.option_id",
        params![user_id, type_id, option_id],
    )
}

pub fn clear_user_attribute(conn: &Connection, user_id: i64, type_id: i64) -> Result<usize> {
    conn.execute(
        "DELETE FROM user_attribute WHERE user_id = ?1 AND type_id = ?2",
        params![user_id, type_id],
    )
}

pub fn list_user_attributes(conn: &Connection, user_id: i64) -> Result<Vec<UserAttribute>> {
    let mut stmt = conn.prepare(
        "SELECT t.code AS type_code, t.name AS type_name,
                o.code AS option_code, o.name AS option_name
         FROM user_attribute ua
         JOIN user_attribute_type t ON ua.type_id = t.id
         JOIN user_attribute_option o ON ua.option_id = o.id
         WHERE ua.user_id = ?1
         ORDER BY t.sort_order ASC, t.id ASC",
    )?;
    let rows = stmt.query_map([user_id], |row| {
        Ok(UserAttribute {
            type_code: row.get("type_code")?,
            type_name: row.get("type_name")?,
            option_code: row.get("option_code")?,
            option_name: row.get("option_name")?,
        })
    })?;
    rows.collect()
}
