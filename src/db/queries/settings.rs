use rusqlite::{Connection, OptionalExtension, Result, params};

/// Key under which a user's own report template is stored.
pub const REPORT_TEMPLATE_KEY: &str = "report_template";

pub fn get_setting(conn: &Connection, user_id: i64, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT setting_value FROM user_setting WHERE user_id = ?1 AND setting_key = ?2",
        params![user_id, key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_setting(conn: &Connection, user_id: i64, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO user_setting (user_id, setting_key, setting_value)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id, setting_key) DO UPDATE SET setting_value = excluded.setting_value",
        params![user_id, key, value],
    )?;
    Ok(())
}

pub fn delete_setting(conn: &Connection, user_id: i64, key: &str) -> Result<usize> {
    conn.execute(
        "DELETE FROM user_setting WHERE user_id = ?1 AND setting_key = ?2",
        params![user_id, key],
    )
}
