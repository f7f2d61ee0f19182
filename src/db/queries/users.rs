use crate::models::user::User;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        cd: row.get("cd")?,
        name: row.get("name")?,
        email: row.get("email")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
    })
}

pub fn insert_user(conn: &Connection, cd: &str, name: &str, email: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO user (cd, name, email) VALUES (?1, ?2, ?3)",
        params![cd, name, email],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_users(conn: &Connection, active_only: bool) -> Result<Vec<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, cd, name, email, is_active FROM user
         WHERE ?1 = 0 OR is_active = 1
         ORDER BY cd ASC",
    )?;
    let rows = stmt.query_map([active_only], map_user)?;
    rows.collect()
}

pub fn find_user(conn: &Connection, id: i64) -> Result<Option<User>> {
    conn.query_row(
        "SELECT id, cd, name, email, is_active FROM user WHERE id = ?1",
        [id],
        map_user,
    )
    .optional()
}

pub fn find_user_by_cd(conn: &Connection, cd: &str) -> Result<Option<User>> {
    conn.query_row(
        "SELECT id, cd, name, email, is_active FROM user WHERE cd = ?1",
        [cd],
        map_user,
    )
    .optional()
}

pub fn update_user(conn: &Connection, id: i64, name: &str, email: &str) -> Result<usize> {
    conn.execute(
        "UPDATE user SET name = ?1, email = ?2 WHERE id = ?3",
        params![name, email, id],
    )
}

pub fn set_active(conn: &Connection, id: i64, active: bool) -> Result<usize> {
    conn.execute(
        "UPDATE user SET is_active = ?1 WHERE id = ?2",
        params![active, id],
    )
}

pub fn delete_user(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM user WHERE id = ?1", [id])
}

pub fn count_active_users(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM user WHERE is_active = 1", [], |row| {
        row.get(0)
    })
}
