use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal audit line into the `log` table.
pub fn audit_log(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`audit_log`], but a failure only produces a warning: the audit trail
/// must never abort the operation it describes.
pub fn audit_log_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit_log(conn, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}
