use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists: migrations are recorded in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Work-breakdown tables: project → issue → task, plus users and statuses.
const CORE_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS project (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        cd          TEXT NOT NULL UNIQUE,
        name        TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );

    CREATE TABLE IF NOT EXISTS project_status (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES project(id) ON DELETE CASCADE,
        code       TEXT NOT NULL,
        name       TEXT NOT NULL,
        sort_order INTEGER NOT NULL DEFAULT 0,
        UNIQUE(project_id, code)
    );

    CREATE TABLE IF NOT EXISTS user (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        cd        TEXT NOT NULL UNIQUE,
        name      TEXT NOT NULL,
        email     TEXT NOT NULL DEFAULT '',
        is_active INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS issue (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        cd          TEXT NOT NULL,
        project_id  INTEGER NOT NULL REFERENCES project(id) ON DELETE CASCADE,
        name        TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        status      TEXT NOT NULL DEFAULT 'open',
        UNIQUE(project_id, cd)
    );

    CREATE TABLE IF NOT EXISTS task (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        cd             TEXT NOT NULL,
        issue_id       INTEGER NOT NULL REFERENCES issue(id) ON DELETE CASCADE,
        name           TEXT NOT NULL,
        description    TEXT NOT NULL DEFAULT '',
        sort_order     INTEGER NOT NULL DEFAULT 0,
        estimate_hours REAL,
        progress_rate  INTEGER CHECK(progress_rate BETWEEN 0 AND 100),
        UNIQUE(issue_id, cd)
    );

    CREATE TABLE IF NOT EXISTS task_assignee (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        task_id INTEGER NOT NULL REFERENCES task(id) ON DELETE CASCADE,
        user_id INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        UNIQUE(task_id, user_id)
    );

    CREATE TABLE IF NOT EXISTS work_log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        task_id   INTEGER NOT NULL REFERENCES task(id) ON DELETE CASCADE,
        user_id   INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        work_date TEXT NOT NULL,
        hours     REAL NOT NULL,
        UNIQUE(task_id, user_id, work_date)
    );
"#;

/// Planning tables.
const PLANNING_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS monthly_assignment (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id       INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        project_id    INTEGER NOT NULL REFERENCES project(id) ON DELETE CASCADE,
        year_month    TEXT NOT NULL,
        planned_hours REAL NOT NULL,
        UNIQUE(user_id, project_id, year_month)
    );

    CREATE TABLE IF NOT EXISTS issue_estimate_item (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        issue_id   INTEGER NOT NULL REFERENCES issue(id) ON DELETE CASCADE,
        name       TEXT NOT NULL,
        hours      REAL NOT NULL,
        sort_order INTEGER NOT NULL DEFAULT 0,
        UNIQUE(issue_id, name)
    );
"#;

const SETTINGS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS user_setting (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id       INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        setting_key   TEXT NOT NULL,
        setting_value TEXT NOT NULL DEFAULT '',
        UNIQUE(user_id, setting_key)
    );
"#;

/// Attribute types, their options and the option each user holds.
const USER_ATTRIBUTES_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS user_attribute_type (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        code       TEXT NOT NULL UNIQUE,
        name       TEXT NOT NULL,
        sort_order INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS user_attribute_option (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        type_id    INTEGER NOT NULL REFERENCES user_attribute_type(id) ON DELETE CASCADE,
        code       TEXT NOT NULL,
        name       TEXT NOT NULL,
        sort_order INTEGER NOT NULL DEFAULT 0,
        UNIQUE(type_id, code)
    );

    CREATE TABLE IF NOT EXISTS user_attribute (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id   INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
        type_id   INTEGER NOT NULL REFERENCES user_attribute_type(id) ON DELETE CASCADE,
        option_id INTEGER NOT NULL REFERENCES user_attribute_option(id) ON DELETE CASCADE,
        UNIQUE(user_id, type_id)
    );
"#;

const WORK_LOG_INDEXES: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_work_log_date ON work_log(work_date);
    CREATE INDEX IF NOT EXISTS idx_work_log_user_date ON work_log(user_id, work_date);
    CREATE INDEX IF NOT EXISTS idx_monthly_assignment_month ON monthly_assignment(year_month);
"#;

/// Versioned migrations, applied in order and recorded in `log`.
const MIGRATIONS: [(&str, &str, &str); 5] = [
    (
        "20260105_0001_core_schema",
        CORE_SCHEMA,
        "Created project, status, user, issue, task, assignee and work_log tables",
    ),
    (
        "20260112_0002_planning_schema",
        PLANNING_SCHEMA,
        "Created monthly_assignment and issue_estimate_item tables",
    ),
    (
        "20260120_0003_user_settings",
        SETTINGS_SCHEMA,
        "Created user_setting table",
    ),
    (
        "20260202_0004_work_log_indexes",
        WORK_LOG_INDEXES,
        "Added work_log and monthly_assignment indexes",
    ),
    (
        "20260216_0005_user_attributes",
        USER_ATTRIBUTES_SCHEMA,
        "Created user_attribute_type, user_attribute_option and user_attribute tables",
    ),
];

/// Add `task.estimate_hours` to databases created before it existed.
fn migrate_add_task_estimate(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "task")? || has_column(conn, "task", "estimate_hours")? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE task ADD COLUMN estimate_hours REAL;")?;
    success("Added 'estimate_hours' column to task table.");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da `init`, da ogni comando che apre il DB e da `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) log table first: it records everything else
    ensure_log_table(conn)?;

    // 2) versioned schema steps
    for (version, sql, message) in MIGRATIONS {
        if migration_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        mark_applied(&tx, version, message)?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    // 3) column-level fixups for older databases
    migrate_add_task_estimate(conn)?;

    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
