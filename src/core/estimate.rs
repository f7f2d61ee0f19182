use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::estimates;
use crate::errors::{AppError, AppResult};
use crate::models::issue::EstimateItem;

fn check_hours(hours: f64) -> AppResult<()> {
    if hours > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidHours(format!(
            "estimate hours must be greater than 0 (got {hours})"
        )))
    }
}

pub struct EstimateLogic;

impl EstimateLogic {
    pub fn list(pool: &mut DbPool, issue_id: i64) -> AppResult<Vec<EstimateItem>> {
        lookup::issue(&pool.conn, issue_id)?;
        Ok(estimates::list_items(&pool.conn, issue_id)?)
    }

    pub fn add(pool: &mut DbPool, issue_id: i64, name: &str, hours: f64) -> AppResult<i64> {
        check_hours(hours)?;
        lookup::issue(&pool.conn, issue_id)?;

        let id = estimates::insert_item(&pool.conn, issue_id, name, hours)
            .map_err(|e| AppError::from_unique(e, &format!("Estimate item '{name}'")))?;
        audit_log_quiet(
            &pool.conn,
            "add",
            &format!("estimate issue #{issue_id}"),
            &format!("{name}: {hours}h"),
        );
        Ok(id)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        hours: Option<f64>,
    ) -> AppResult<EstimateItem> {
        let current = estimates::find_item(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("Estimate item #{id}")))?;
        let name = name.unwrap_or(&current.name).to_string();
        let hours = hours.unwrap_or(current.hours);
        check_hours(hours)?;

        estimates::update_item(&pool.conn, id, &name, hours)
            .map_err(|e| AppError::from_unique(e, &format!("Estimate item '{name}'")))?;
        audit_log_quiet(
            &pool.conn,
            "edit",
            &format!("estimate #{id}"),
            &format!("{name}: {hours}h"),
        );

        Ok(EstimateItem {
            name,
            hours,
            ..current
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let rows = estimates::delete_item(&pool.conn, id)?;
        lookup::ensure_touched(rows, || format!("Estimate item #{id}"))?;
        audit_log_quiet(&pool.conn, "del", &format!("estimate #{id}"), "");
        Ok(())
    }
}
