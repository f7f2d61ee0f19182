pub mod assign;
pub mod attr;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod estimate;
pub mod export;
pub mod grid;
pub mod hours;
pub mod init;
pub mod issue;
pub mod log;
pub mod plan;
pub mod project;
pub mod report;
pub mod status;
pub mod task;
pub mod user;

use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, bringing its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    run_pending_migrations(&pool.conn)?;
    Ok(pool)
}
