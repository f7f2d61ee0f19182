use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            migrate_db(&pool)?;
        }
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
        if *check {
            integrity_check(&pool)?;
        }
        if *vacuum {
            println!("{CYAN}▶ Running VACUUM…{RESET}");
            pool.conn.execute_batch("VACUUM;")?;
            println!("{GREEN}✔ Vacuum completed.{RESET}\n");
        }
    }

    Ok(())
}

/// Apply pending migrations, then list every version the DB carries.
fn migrate_db(pool: &DbPool) -> AppResult<()> {
    println!("{CYAN}▶ Running migrations…{RESET}");
    run_pending_migrations(&pool.conn)?;

    for v in applied_versions(&pool.conn)? {
        println!("    {GREY}{v}{RESET}");
    }
    println!("{GREEN}✔ Migration completed.{RESET}\n");
    Ok(())
}

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    println!("{CYAN}▶ Running integrity check…{RESET}");

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        println!("{GREEN}✔ Integrity check passed.{RESET}\n");
    } else {
        println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
    }
    Ok(())
}
