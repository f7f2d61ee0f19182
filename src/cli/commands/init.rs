use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rWorklog…");

    //
    // 1️⃣ CONFIGURAZIONE
    //
    // Config::init_all crea ~/.rworklog/ e rworklog.conf, e ritorna la
    // configurazione con il path del DB scelto.
    //
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    //
    // 2️⃣ DB: tabelle + migrazioni
    //
    let pool = DbPool::new(&cfg.database)?;
    run_pending_migrations(&pool.conn)?;

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    audit_log_quiet(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    );

    println!("🎉 rWorklog initialization completed!");
    Ok(())
}
